//! Category display-order maintenance.
//!
//! Categories move by one position at a time via a pairwise `order_index`
//! swap; the sequence is never renumbered wholesale. New categories always
//! take the next unused maximum index so they sort last without touching
//! their neighbors.

use std::sync::Arc;

use carta_model::{CategoryId, ReorderDirection};
use tracing::debug;

use crate::error::{CatalogError, Result};
use crate::store::{CatalogStore, CategoryOrder};

#[derive(Clone)]
pub struct OrderingService {
    store: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for OrderingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderingService").finish_non_exhaustive()
    }
}

impl OrderingService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Index to assign to a newly created category: one past the current
    /// maximum, or 1 on an empty catalog.
    pub async fn next_order_index(&self) -> Result<i32> {
        let categories = self.store.list_categories(CategoryOrder::DisplayIndex).await?;
        Ok(categories
            .iter()
            .map(|c| c.order_index)
            .max()
            .map_or(1, |max| max + 1))
    }

    /// Move a category one position up or down by swapping `order_index`
    /// values with its neighbor.
    ///
    /// Moving the first category up or the last one down is a successful
    /// no-op; `Ok(false)` distinguishes it for callers that want to skip a
    /// refetch. The mutation does not update any cached list; callers
    /// re-read through the query facade afterwards.
    pub async fn move_category(
        &self,
        id: CategoryId,
        direction: ReorderDirection,
    ) -> Result<bool> {
        let ordered = self.store.list_categories(CategoryOrder::DisplayIndex).await?;

        let position = ordered
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CatalogError::NotFound(format!("category {id}")))?;

        let neighbor = match direction {
            ReorderDirection::Up => position.checked_sub(1),
            ReorderDirection::Down => {
                let below = position + 1;
                (below < ordered.len()).then_some(below)
            }
        };

        let Some(neighbor) = neighbor else {
            debug!(%id, ?direction, "boundary move, nothing to do");
            return Ok(false);
        };

        let current = &ordered[position];
        let other = &ordered[neighbor];

        self.store
            .swap_category_order(current.id, current.order_index, other.id, other.order_index)
            .await?;

        debug!(
            moved = %current.id,
            displaced = %other.id,
            "swapped category order indexes"
        );
        Ok(true)
    }
}
