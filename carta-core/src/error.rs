use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store error: {0}")]
    Store(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("asset upload failed: {0}")]
    AssetUpload(String),

    #[error("authorization required")]
    AuthRequired,

    #[error("confirmation required: {0}")]
    ConfirmationRequired(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<carta_model::ModelError> for CatalogError {
    fn from(err: carta_model::ModelError) -> Self {
        CatalogError::Validation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
