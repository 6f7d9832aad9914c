//! Explicit per-action input structs.
//!
//! Each operator action maps to a single owned struct so that validation is
//! a pure function of the struct, with no ambient state feeding into it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::ids::CategoryId;

/// Input for creating a category. The display index is assigned by the
/// engine, not the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCategoryInput {
    pub name: String,
}

impl NewCategoryInput {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::invalid("name", "must not be empty"));
        }
        Ok(())
    }
}

/// Input for renaming an existing category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenameCategoryInput {
    pub name: String,
}

impl RenameCategoryInput {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::invalid("name", "must not be empty"));
        }
        Ok(())
    }
}

/// Raw image bytes supplied alongside a new product, with the original
/// file extension used when minting the stored asset name.
#[derive(Clone, Serialize, Deserialize)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub extension: String,
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("bytes", &format_args!("{} bytes", self.bytes.len()))
            .field("extension", &self.extension)
            .finish()
    }
}

/// Input for creating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProductInput {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub category_id: CategoryId,
    #[serde(default)]
    pub is_campaign: bool,
    #[serde(default)]
    pub image: Option<ImagePayload>,
}

impl NewProductInput {
    /// Field-level checks that need no store access. Category existence is
    /// verified separately against the known category set.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ModelError::invalid("name", "must not be empty"));
        }
        if self.price.is_sign_negative() {
            return Err(ModelError::invalid("price", "must not be negative"));
        }
        if let Some(image) = &self.image {
            if image.bytes.is_empty() {
                return Err(ModelError::invalid("image", "must not be empty"));
            }
            if image.extension.trim().is_empty() {
                return Err(ModelError::invalid(
                    "image",
                    "missing file extension",
                ));
            }
        }
        Ok(())
    }
}

/// Direction of a single-position category move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderDirection {
    Up,
    Down,
}
