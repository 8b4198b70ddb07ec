use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Shoe not found: {0}")]
    ShoeNotFound(String),

    #[error("Invalid catalog path: {0}")]
    InvalidCatalogPath(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
