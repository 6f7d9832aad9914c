//! Referential rules the relational store does not enforce on its own.

use std::sync::Arc;

use carta_model::{Category, CategoryId};
use tracing::info;

use crate::error::{CatalogError, Result};
use crate::store::CatalogStore;

#[derive(Clone)]
pub struct ConsistencyGuard {
    store: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for ConsistencyGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsistencyGuard").finish_non_exhaustive()
    }
}

impl ConsistencyGuard {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Resolve a product's category reference against the live category
    /// set. Runs before any asset upload so a bad reference never costs an
    /// object-store write.
    pub async fn validate_product_category(
        &self,
        category_id: CategoryId,
    ) -> Result<Category> {
        self.store
            .get_category(category_id)
            .await?
            .ok_or_else(|| {
                CatalogError::Validation(format!(
                    "category {category_id} does not exist"
                ))
            })
    }

    /// Remove a category together with every product that references it.
    ///
    /// Destructive and irreversible, so the operator's confirmation is a
    /// hard precondition rather than a UI nicety. Products go first, then
    /// the category, in one store transaction. Returns the number of
    /// products removed.
    pub async fn delete_category_cascade(
        &self,
        id: CategoryId,
        confirmed: bool,
    ) -> Result<u64> {
        if !confirmed {
            return Err(CatalogError::ConfirmationRequired(format!(
                "deleting category {id} removes all of its products"
            )));
        }

        let removed = self.store.delete_category_cascade(id).await?;
        info!(category = %id, products_removed = removed, "category cascade delete");
        Ok(removed)
    }
}
