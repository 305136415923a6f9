pub mod cert;
pub mod cli;
pub mod storage;
pub mod utils;

// Re-export specific items to avoid conflicts
pub use cert::{
    fetch_ca, fetch_cert_by_serial, fetch_crl, normalize_serial, revoke_cert, CertCategory,
    RevocationEntry, SerialNumber,
};
pub use cli::{args, commands};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageEntry, StorageError};
pub use utils::errors;
