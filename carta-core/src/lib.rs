//! Carta core: the catalog consistency and ordering engine.
//!
//! Keeps categories in a stable, manually controlled display order, keeps
//! products attached to live categories, keeps the campaign flag a plain
//! projection, and binds uploaded image assets to the product rows that
//! reference them. Every mutation is gated behind a valid operator
//! session; storefront reads go through the ungated query facade.

pub mod api;
pub mod assets;
pub mod auth;
pub mod engine;
pub mod error;
pub mod guard;
pub mod ordering;
pub mod query;
pub mod store;

pub use api::ApiResponse;
pub use assets::{AssetStore, LocalAssetStore};
pub use auth::{OperatorCredentials, OperatorSession, SessionGate, SessionState};
pub use engine::CatalogEngine;
pub use error::{CatalogError, Result};
pub use guard::ConsistencyGuard;
pub use ordering::OrderingService;
pub use query::{MenuSection, QueryFacade};
pub use store::{
    CatalogDatabase, CatalogStore, CategoryOrder, MemoryCatalogStore,
    PostgresCatalogStore, ProductFilter,
};

// Shared model surface, re-exported for downstream crates.
pub use carta_model::{
    Category, CategoryId, ImagePayload, NewCategoryInput, NewProductInput,
    Product, ProductId, RenameCategoryInput, ReorderDirection,
};
