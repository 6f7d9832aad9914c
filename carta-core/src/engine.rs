//! Mutation entry points of the catalog.
//!
//! Sequences each operator action: validate the input struct, resolve
//! references through the consistency guard, upload the image asset when
//! one was supplied, then write the row. An upload failure aborts the
//! whole action before any row exists, so the store never holds a
//! reference to bytes that were not persisted.
//!
//! None of these calls update a cached list; callers re-fetch through
//! [`QueryFacade`](crate::query::QueryFacade) to observe the new state.

use std::sync::Arc;

use carta_model::{
    Category, CategoryId, NewCategoryInput, NewProductInput, Product, ProductId,
    RenameCategoryInput, ReorderDirection,
};
use chrono::Utc;
use tracing::info;

use crate::assets::AssetStore;
use crate::error::Result;
use crate::guard::ConsistencyGuard;
use crate::ordering::OrderingService;
use crate::store::CatalogStore;

#[derive(Clone)]
pub struct CatalogEngine {
    store: Arc<dyn CatalogStore>,
    assets: Arc<dyn AssetStore>,
    ordering: OrderingService,
    guard: ConsistencyGuard,
}

impl std::fmt::Debug for CatalogEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogEngine").finish_non_exhaustive()
    }
}

impl CatalogEngine {
    pub fn new(store: Arc<dyn CatalogStore>, assets: Arc<dyn AssetStore>) -> Self {
        let ordering = OrderingService::new(Arc::clone(&store));
        let guard = ConsistencyGuard::new(Arc::clone(&store));
        Self {
            store,
            assets,
            ordering,
            guard,
        }
    }

    pub fn ordering(&self) -> &OrderingService {
        &self.ordering
    }

    pub fn guard(&self) -> &ConsistencyGuard {
        &self.guard
    }

    /// Create a category at the end of the display order.
    pub async fn create_category(&self, input: NewCategoryInput) -> Result<Category> {
        input.validate()?;

        let category = Category {
            id: CategoryId::new(),
            name: input.name.trim().to_string(),
            order_index: self.ordering.next_order_index().await?,
        };
        self.store.insert_category(&category).await?;

        info!(category = %category.id, name = %category.name, "category created");
        Ok(category)
    }

    pub async fn rename_category(
        &self,
        id: CategoryId,
        input: RenameCategoryInput,
    ) -> Result<Category> {
        input.validate()?;
        self.store.rename_category(id, input.name.trim()).await
    }

    /// Move a category one position; boundary moves succeed without change.
    pub async fn move_category(
        &self,
        id: CategoryId,
        direction: ReorderDirection,
    ) -> Result<bool> {
        self.ordering.move_category(id, direction).await
    }

    /// Cascade-delete a category. `confirmed` is the operator's explicit
    /// acknowledgement that every dependent product goes with it.
    pub async fn delete_category(&self, id: CategoryId, confirmed: bool) -> Result<u64> {
        self.guard.delete_category_cascade(id, confirmed).await
    }

    /// Create a product. Validation and the category check run before the
    /// asset upload; the row insert only runs after the upload succeeded.
    pub async fn create_product(&self, input: NewProductInput) -> Result<Product> {
        input.validate()?;
        self.guard.validate_product_category(input.category_id).await?;

        let image_url = match &input.image {
            Some(image) => Some(
                self.assets
                    .upload(&image.bytes, &image.extension)
                    .await?,
            ),
            None => None,
        };

        let product = Product {
            id: ProductId::new(),
            name: input.name.trim().to_string(),
            price: input.price,
            description: input
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .map(String::from),
            category_id: input.category_id,
            image_url,
            is_campaign: input.is_campaign,
            created_at: Utc::now(),
        };
        self.store.insert_product(&product).await?;

        info!(product = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Delete a product. The image asset, if any, stays behind: no asset
    /// reclamation path exists in this design.
    pub async fn delete_product(&self, id: ProductId) -> Result<()> {
        self.store.delete_product(id).await
    }
}
