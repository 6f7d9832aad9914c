//! Core data model definitions shared across Carta crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod ids;
pub mod inputs;
pub mod prelude;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::{Category, Product};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{CategoryId, ProductId};
pub use inputs::{
    ImagePayload, NewCategoryInput, NewProductInput, RenameCategoryInput,
    ReorderDirection,
};
