//! Operator category mutations. Every handler here sits behind the
//! session gate; none of them return updated listings, callers re-fetch
//! through the read endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use carta_core::ApiResponse;
use carta_model::{
    Category, CategoryId, NewCategoryInput, RenameCategoryInput, ReorderDirection,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::infra::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<NewCategoryInput>,
) -> AppResult<(StatusCode, Json<ApiResponse<Category>>)> {
    let category = state.engine.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(category))))
}

/// Operator view: alphabetical, unlike the storefront's display order.
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Category>>>> {
    let categories = state.queries.categories_by_name().await?;
    Ok(Json(ApiResponse::success(categories)))
}

pub async fn rename_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<RenameCategoryInput>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let category = state
        .engine
        .rename_category(CategoryId(id), input)
        .await?;
    Ok(Json(ApiResponse::success(category)))
}

#[derive(Debug, Deserialize)]
pub struct MoveRequest {
    pub direction: ReorderDirection,
}

#[derive(Debug, Serialize)]
pub struct MoveOutcome {
    /// False when the move hit a boundary and nothing changed.
    pub moved: bool,
}

pub async fn move_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<MoveRequest>,
) -> AppResult<Json<ApiResponse<MoveOutcome>>> {
    let moved = state
        .engine
        .move_category(CategoryId(id), request.direction)
        .await?;
    Ok(Json(ApiResponse::success(MoveOutcome { moved })))
}

#[derive(Debug, Deserialize)]
pub struct DeleteCategoryQuery {
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct CascadeOutcome {
    pub products_removed: u64,
}

/// Cascade delete. Refuses to run without `?confirm=true`; the deletion is
/// irreversible and takes every product in the category with it.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<DeleteCategoryQuery>,
) -> AppResult<Json<ApiResponse<CascadeOutcome>>> {
    if !query.confirm {
        return Err(AppError::bad_request(
            "cascade delete requires explicit confirmation (confirm=true)",
        ));
    }

    let products_removed = state
        .engine
        .delete_category(CategoryId(id), true)
        .await?;

    info!(category = %id, products_removed, "operator deleted category");
    Ok(Json(ApiResponse::success(CascadeOutcome { products_removed })))
}
