pub mod memory;
pub mod postgres;
pub mod traits;

pub use memory::MemoryCatalogStore;
pub use postgres::PostgresCatalogStore;
pub use traits::{CatalogStore, CategoryOrder, ProductFilter};

use std::sync::Arc;

use crate::error::Result;

/// Handle to the configured catalog backend, shared across the engine and
/// the read facade.
#[derive(Clone)]
pub struct CatalogDatabase {
    backend: Arc<dyn CatalogStore>,
}

impl std::fmt::Debug for CatalogDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogDatabase").finish_non_exhaustive()
    }
}

impl CatalogDatabase {
    pub async fn connect_postgres(connection_string: &str) -> Result<Self> {
        let store = PostgresCatalogStore::new(connection_string).await?;
        store.initialize_schema().await?;
        Ok(Self {
            backend: Arc::new(store),
        })
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Arc::new(MemoryCatalogStore::new()),
        }
    }

    pub fn from_backend(backend: Arc<dyn CatalogStore>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &dyn CatalogStore {
        self.backend.as_ref()
    }

    pub fn backend_arc(&self) -> Arc<dyn CatalogStore> {
        Arc::clone(&self.backend)
    }
}
