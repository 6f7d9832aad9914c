//! Read-only composition for the storefront.
//!
//! Pure projections over the store: no business rules, no mutation, no
//! session gate. Callers re-fetch through here after every mutation rather
//! than trusting optimistic in-memory state.

use std::sync::Arc;

use carta_model::{Category, CategoryId, Product};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::store::{CatalogStore, CategoryOrder, ProductFilter};

/// One storefront section: a category and its products, newest first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuSection {
    pub category: Category,
    pub products: Vec<Product>,
}

#[derive(Clone)]
pub struct QueryFacade {
    store: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for QueryFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryFacade").finish_non_exhaustive()
    }
}

impl QueryFacade {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Categories in display order (`order_index` ascending).
    pub async fn ordered_categories(&self) -> Result<Vec<Category>> {
        self.store.list_categories(CategoryOrder::DisplayIndex).await
    }

    /// Categories alphabetically. Operator convenience view; the
    /// storefront never uses this order.
    pub async fn categories_by_name(&self) -> Result<Vec<Category>> {
        self.store.list_categories(CategoryOrder::Name).await
    }

    /// Products attached to one category, in store-return order
    /// (creation recency, descending).
    pub async fn products_for(&self, category_id: CategoryId) -> Result<Vec<Product>> {
        self.store
            .list_products(&ProductFilter::for_category(category_id))
            .await
    }

    /// Every product flagged for campaign display, independent of category.
    pub async fn campaign_products(&self) -> Result<Vec<Product>> {
        self.store.list_products(&ProductFilter::campaigns()).await
    }

    /// All products, newest first. Operator recency view.
    pub async fn recent_products(&self) -> Result<Vec<Product>> {
        self.store.list_products(&ProductFilter::default()).await
    }

    /// The full storefront render model: ordered categories, each carrying
    /// its products.
    pub async fn menu(&self) -> Result<Vec<MenuSection>> {
        let categories = self.ordered_categories().await?;
        let products = self.recent_products().await?;

        let mut sections: Vec<MenuSection> = categories
            .into_iter()
            .map(|category| MenuSection {
                category,
                products: Vec::new(),
            })
            .collect();

        for product in products {
            if let Some(section) = sections
                .iter_mut()
                .find(|s| s.category.id == product.category_id)
            {
                section.products.push(product);
            }
        }

        Ok(sections)
    }
}
