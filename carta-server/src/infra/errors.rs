use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use carta_core::ApiResponse;
use std::fmt;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

// Error responses use the same envelope as success responses, so clients
// parse one shape everywhere.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(ApiResponse::<()>::error(self.message));
        (self.status, body).into_response()
    }
}

// Convert from various error types
impl From<carta_core::CatalogError> for AppError {
    fn from(err: carta_core::CatalogError) -> Self {
        use carta_core::CatalogError;
        match err {
            CatalogError::AuthRequired => Self::unauthorized(err.to_string()),
            CatalogError::Validation(msg) => Self::bad_request(msg),
            CatalogError::ConfirmationRequired(msg) => Self::bad_request(msg),
            CatalogError::NotFound(msg) => Self::not_found(msg),
            CatalogError::AssetUpload(msg) => Self::bad_gateway(msg),
            CatalogError::Store(msg) => Self::internal(msg),
            _ => Self::internal(err.to_string()),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal(err.to_string())
    }
}

impl From<carta_model::ModelError> for AppError {
    fn from(err: carta_model::ModelError) -> Self {
        Self::bad_request(err.to_string())
    }
}
