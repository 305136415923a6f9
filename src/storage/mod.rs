pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors produced by a storage backend itself, before the certificate
/// layer assigns them to a read or write operation.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid key '{0}'")]
    InvalidKey(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// A stored payload together with the key it was stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEntry {
    pub key: String,
    pub value: Vec<u8>,
}

impl StorageEntry {
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Flat key-value storage. Keys are opaque strings; the certificate layer
/// builds them from a category prefix and a serial number.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the entry at `key`. `Ok(None)` means the key does not exist.
    async fn get(&self, key: &str) -> Result<Option<StorageEntry>, StorageError>;

    /// Write an entry, replacing any existing value at its key.
    async fn put(&self, entry: StorageEntry) -> Result<(), StorageError>;

    /// Remove the entry at `key`. Removing a missing key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// List all keys starting with `prefix`, in unspecified order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}
