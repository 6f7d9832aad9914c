//! Carta HTTP server.
//!
//! Two audiences share one router: the unauthenticated storefront reads
//! the catalog, the authenticated operator mutates it. Uploaded image
//! assets are served back as static files under `/assets`.

pub mod auth;
pub mod handlers;
pub mod infra;
pub mod routes;

pub use infra::app_state::AppState;
pub use infra::config::{Config, ConfigLoad};
pub use infra::errors::{AppError, AppResult};

use axum::{Router, routing::get};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::menu_handlers;

pub fn create_app(state: AppState) -> Router {
    let versioned_api = routes::create_api_router(state.clone());

    Router::new()
        .route("/health", get(menu_handlers::health))
        .merge(versioned_api)
        .nest_service(
            "/assets",
            ServeDir::new(state.config.assets.dir.clone()),
        )
        // Middleware layers, outer to inner: CORS, then tracing
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
