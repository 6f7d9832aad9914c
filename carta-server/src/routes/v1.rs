use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{
    auth,
    handlers::{category_handlers, menu_handlers, product_handlers},
    infra::app_state::AppState,
};

/// Create all v1 API routes
pub fn create_v1_router(state: AppState) -> Router<AppState> {
    Router::new()
        // Public storefront endpoints
        .route("/menu", get(menu_handlers::get_menu))
        .route("/campaigns", get(menu_handlers::get_campaigns))
        .route("/categories", get(menu_handlers::list_categories))
        .route(
            "/categories/{id}/products",
            get(menu_handlers::category_products),
        )
        // Public authentication entry point
        .route("/auth/login", post(auth::handlers::login))
        // Merge gated operator routes
        .merge(create_operator_routes(state))
}

/// Routes that require an authorized operator session
fn create_operator_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/logout", post(auth::handlers::logout))
        .route("/auth/session", get(auth::handlers::session_status))
        .route(
            "/admin/categories",
            post(category_handlers::create_category)
                .get(category_handlers::list_categories),
        )
        .route(
            "/admin/categories/{id}",
            put(category_handlers::rename_category)
                .delete(category_handlers::delete_category),
        )
        .route(
            "/admin/categories/{id}/move",
            post(category_handlers::move_category),
        )
        .route(
            "/admin/products",
            post(product_handlers::create_product)
                .get(product_handlers::list_products),
        )
        .route(
            "/admin/products/{id}",
            delete(product_handlers::delete_product),
        )
        .route_layer(middleware::from_fn_with_state(
            state,
            auth::middleware::operator_gate,
        ))
}
