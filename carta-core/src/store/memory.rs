//! In-memory catalog store.
//!
//! Backs the engine tests and local development without a PostgreSQL
//! instance. Multi-row operations run under a single write lock, which
//! gives them the same all-or-nothing behavior the Postgres store gets
//! from a transaction.

use async_trait::async_trait;
use carta_model::{Category, CategoryId, Product, ProductId};
use tokio::sync::RwLock;

use crate::error::{CatalogError, Result};
use crate::store::traits::{CatalogStore, CategoryOrder, ProductFilter};

#[derive(Debug, Default)]
struct MemoryState {
    categories: Vec<Category>,
    products: Vec<Product>,
}

#[derive(Debug, Default)]
pub struct MemoryCatalogStore {
    state: RwLock<MemoryState>,
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    async fn list_categories(&self, order: CategoryOrder) -> Result<Vec<Category>> {
        let state = self.state.read().await;
        let mut categories = state.categories.clone();
        match order {
            CategoryOrder::DisplayIndex => {
                categories.sort_by_key(|c| c.order_index);
            }
            CategoryOrder::Name => {
                categories.sort_by(|a, b| a.name.cmp(&b.name));
            }
        }
        Ok(categories)
    }

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>> {
        let state = self.state.read().await;
        Ok(state.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn insert_category(&self, category: &Category) -> Result<()> {
        let mut state = self.state.write().await;
        if state.categories.iter().any(|c| c.id == category.id) {
            return Err(CatalogError::Store(format!(
                "duplicate category id {}",
                category.id
            )));
        }
        if state
            .categories
            .iter()
            .any(|c| c.order_index == category.order_index)
        {
            return Err(CatalogError::Store(format!(
                "duplicate order_index {}",
                category.order_index
            )));
        }
        state.categories.push(category.clone());
        Ok(())
    }

    async fn rename_category(&self, id: CategoryId, name: &str) -> Result<Category> {
        let mut state = self.state.write().await;
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CatalogError::NotFound(format!("category {id}")))?;
        category.name = name.to_string();
        Ok(category.clone())
    }

    async fn delete_category(&self, id: CategoryId) -> Result<()> {
        let mut state = self.state.write().await;
        if state.products.iter().any(|p| p.category_id == id) {
            return Err(CatalogError::Store(format!(
                "category {id} still has dependent products"
            )));
        }
        let before = state.categories.len();
        state.categories.retain(|c| c.id != id);
        if state.categories.len() == before {
            return Err(CatalogError::NotFound(format!("category {id}")));
        }
        Ok(())
    }

    async fn update_category_order(&self, id: CategoryId, new_index: i32) -> Result<()> {
        let mut state = self.state.write().await;
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CatalogError::NotFound(format!("category {id}")))?;
        category.order_index = new_index;
        Ok(())
    }

    async fn swap_category_order(
        &self,
        first: CategoryId,
        first_index: i32,
        second: CategoryId,
        second_index: i32,
    ) -> Result<()> {
        let mut state = self.state.write().await;
        let has_first = state.categories.iter().any(|c| c.id == first);
        let has_second = state.categories.iter().any(|c| c.id == second);
        if !has_first || !has_second {
            return Err(CatalogError::NotFound("category pair for swap".into()));
        }
        for category in state.categories.iter_mut() {
            if category.id == first {
                category.order_index = second_index;
            } else if category.id == second {
                category.order_index = first_index;
            }
        }
        Ok(())
    }

    async fn delete_category_cascade(&self, id: CategoryId) -> Result<u64> {
        let mut state = self.state.write().await;
        if !state.categories.iter().any(|c| c.id == id) {
            return Err(CatalogError::NotFound(format!("category {id}")));
        }
        let before = state.products.len();
        state.products.retain(|p| p.category_id != id);
        let removed = (before - state.products.len()) as u64;
        state.categories.retain(|c| c.id != id);
        Ok(removed)
    }

    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        let state = self.state.read().await;
        let mut products: Vec<Product> = state
            .products
            .iter()
            .filter(|p| {
                filter
                    .category_id
                    .is_none_or(|category_id| p.category_id == category_id)
            })
            .filter(|p| !filter.campaign_only || p.is_campaign)
            .cloned()
            .collect();
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(products)
    }

    async fn insert_product(&self, product: &Product) -> Result<()> {
        let mut state = self.state.write().await;
        if !state.categories.iter().any(|c| c.id == product.category_id) {
            return Err(CatalogError::Store(format!(
                "unknown category {}",
                product.category_id
            )));
        }
        if state.products.iter().any(|p| p.id == product.id) {
            return Err(CatalogError::Store(format!(
                "duplicate product id {}",
                product.id
            )));
        }
        state.products.push(product.clone());
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<()> {
        let mut state = self.state.write().await;
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(CatalogError::NotFound(format!("product {id}")));
        }
        Ok(())
    }
}
