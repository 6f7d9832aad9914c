//! Public storefront reads. No session gate on any of these.

use axum::{
    Json,
    extract::{Path, State},
};
use carta_core::{ApiResponse, MenuSection};
use carta_model::{Category, CategoryId, Product};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::infra::{app_state::AppState, errors::AppResult};

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// The full storefront render model in one round trip.
pub async fn get_menu(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<MenuSection>>>> {
    let menu = state.queries.menu().await?;
    Ok(Json(ApiResponse::success(menu)))
}

pub async fn get_campaigns(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let campaigns = state.queries.campaign_products().await?;
    Ok(Json(ApiResponse::success(campaigns)))
}

pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = state.queries.ordered_categories().await?;
    Ok(Json(ApiResponse::success(categories)))
}

pub async fn category_products(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let products = state.queries.products_for(CategoryId(id)).await?;
    Ok(Json(ApiResponse::success(products)))
}
