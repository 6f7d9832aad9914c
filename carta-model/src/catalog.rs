//! Catalog entities: categories and the products attached to them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::{CategoryId, ProductId};

/// A named grouping of products with a manually controlled display position.
///
/// `order_index` establishes the total display order among all categories
/// and stays pairwise distinct across the set; reordering swaps two indexes
/// rather than renumbering the whole sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub order_index: i32,
}

/// A priced catalog item belonging to exactly one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub category_id: CategoryId,
    /// Durable public URL previously returned by the asset store; set at
    /// most once during creation, never fabricated.
    pub image_url: Option<String>,
    /// Marks the product for highlighted display, orthogonal to category.
    pub is_campaign: bool,
    pub created_at: DateTime<Utc>,
}
