//! Storage port for the catalog.
//!
//! The engine consumes the relational store through this trait as a plain
//! CRUD + ordering substrate. Single-row writes are atomic at the store
//! level; the two multi-row operations (`swap_category_order`,
//! `delete_category_cascade`) are issued inside one transaction where the
//! backend supports transactions.

use async_trait::async_trait;
use carta_model::{Category, CategoryId, Product, ProductId};

use crate::error::Result;

/// Sort order for category listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryOrder {
    /// Ascending by `order_index`, the storefront display order.
    #[default]
    DisplayIndex,
    /// Alphabetical, used only for operator convenience views.
    Name,
}

/// Filter for product listings. Empty filter returns everything, newest
/// first.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub category_id: Option<CategoryId>,
    pub campaign_only: bool,
}

impl ProductFilter {
    pub fn for_category(category_id: CategoryId) -> Self {
        Self {
            category_id: Some(category_id),
            campaign_only: false,
        }
    }

    pub fn campaigns() -> Self {
        Self {
            category_id: None,
            campaign_only: true,
        }
    }
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Never errors on an empty catalog; returns an empty vector.
    async fn list_categories(&self, order: CategoryOrder) -> Result<Vec<Category>>;

    async fn get_category(&self, id: CategoryId) -> Result<Option<Category>>;

    async fn insert_category(&self, category: &Category) -> Result<()>;

    async fn rename_category(&self, id: CategoryId, name: &str) -> Result<Category>;

    /// Plain delete. Fails while dependent products still reference the
    /// category; cascading is the guard's job via
    /// [`delete_category_cascade`](Self::delete_category_cascade).
    async fn delete_category(&self, id: CategoryId) -> Result<()>;

    async fn update_category_order(&self, id: CategoryId, new_index: i32) -> Result<()>;

    /// Exchange the `order_index` values of two categories. Both rows move
    /// in one transaction so the pairwise-distinct invariant is never
    /// observable as violated.
    async fn swap_category_order(
        &self,
        first: CategoryId,
        first_index: i32,
        second: CategoryId,
        second_index: i32,
    ) -> Result<()>;

    /// Delete every product referencing the category, then the category
    /// itself, in one transaction. Returns the number of products removed.
    async fn delete_category_cascade(&self, id: CategoryId) -> Result<u64>;

    /// Never errors on an empty result; returns an empty vector, newest
    /// first (`created_at` descending).
    async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>>;

    async fn insert_product(&self, product: &Product) -> Result<()>;

    async fn delete_product(&self, id: ProductId) -> Result<()>;
}
