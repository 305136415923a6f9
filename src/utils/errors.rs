use crate::storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CertStoreError {
    #[error("Storage read error for '{key}': {source}")]
    StorageRead { key: String, source: StorageError },

    #[error("Storage write error for '{key}': {source}")]
    StorageWrite { key: String, source: StorageError },

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Certificate not found: {0}")]
    CertNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, CertStoreError>;
