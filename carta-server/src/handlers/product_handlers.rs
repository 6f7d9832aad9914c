//! Operator product mutations and the recency listing.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use carta_core::ApiResponse;
use carta_model::{
    CategoryId, ImagePayload, NewProductInput, Product, ProductId,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

#[derive(Debug, Deserialize)]
pub struct ImageUpload {
    /// Base64-encoded image bytes.
    pub data: String,
    /// Original file extension, e.g. "jpg".
    pub extension: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub category_id: Uuid,
    #[serde(default)]
    pub is_campaign: bool,
    pub image: Option<ImageUpload>,
}

impl CreateProductRequest {
    fn into_input(self) -> Result<NewProductInput, AppError> {
        let image = self
            .image
            .map(|upload| {
                BASE64
                    .decode(upload.data.as_bytes())
                    .map(|bytes| ImagePayload {
                        bytes,
                        extension: upload.extension,
                    })
                    .map_err(|_| AppError::bad_request("image data is not valid base64"))
            })
            .transpose()?;

        Ok(NewProductInput {
            name: self.name,
            price: self.price,
            description: self.description,
            category_id: CategoryId(self.category_id),
            is_campaign: self.is_campaign,
            image,
        })
    }
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Product>>)> {
    let input = request.into_input()?;
    let product = state.engine.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(product))))
}

/// Operator view: every product, newest first.
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = state.queries.recent_products().await?;
    Ok(Json(ApiResponse::success(products)))
}

/// Deletes the row only; the image asset, if any, is not reclaimed.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.engine.delete_product(ProductId(id)).await?;
    Ok(Json(ApiResponse::success(())))
}
