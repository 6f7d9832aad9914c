//! Consumer-facing snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in carta-core or the server crate.

pub use super::catalog::{Category, Product};
pub use super::error::{ModelError, Result as ModelResult};
pub use super::ids::{CategoryId, ProductId};
pub use super::inputs::{
    ImagePayload, NewCategoryInput, NewProductInput, RenameCategoryInput,
    ReorderDirection,
};
