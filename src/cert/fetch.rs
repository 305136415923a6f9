use crate::cert::serial::normalize_serial;
use crate::storage::{KeyValueStore, StorageEntry};
use crate::utils::errors::{CertStoreError, Result};

/// Storage namespace a certificate record lives under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CertCategory {
    /// Issued certificates, stored under "certs/".
    Active,
    /// Revocation records, stored under "revoked/".
    Revoked,
}

impl CertCategory {
    pub fn prefix(&self) -> &'static str {
        match self {
            CertCategory::Active => "certs/",
            CertCategory::Revoked => "revoked/",
        }
    }
}

/// Storage key for the CA certificate. Fixed path, no serial component.
pub const CA_KEY: &str = "ca";
/// Storage key for the current CRL. Fixed path, no serial component.
pub const CRL_KEY: &str = "crl";

/// Fetch a certificate record by serial number, resolving both key formats
/// the serial may have been stored under.
///
/// The canonical key (lowercase, hyphen-delimited serial) is tried first.
/// On a miss the legacy key (serial exactly as supplied) is tried, and a hit
/// there is rewritten under the canonical key so future lookups take the
/// fast path. The legacy key is left in place; concurrent readers may still
/// be resolving through it.
///
/// An absent record is `Ok(None)`. Backend failures surface as
/// [`CertStoreError::StorageRead`] or, for a failed migration write,
/// [`CertStoreError::StorageWrite`] so callers can tell a missing record
/// from a misbehaving backend.
pub async fn fetch_cert_by_serial(
    store: &dyn KeyValueStore,
    category: CertCategory,
    serial: &str,
) -> Result<Option<StorageEntry>> {
    let canonical_key = format!("{}{}", category.prefix(), normalize_serial(serial));

    if let Some(entry) = read_key(store, &canonical_key).await? {
        return Ok(Some(entry));
    }

    let legacy_key = format!("{}{}", category.prefix(), serial);
    if legacy_key == canonical_key {
        // Input was already canonical; nothing else to look under.
        return Ok(None);
    }

    let Some(legacy_entry) = read_key(store, &legacy_key).await? else {
        return Ok(None);
    };

    // Self-heal: rewrite the record under the canonical key. A failed write
    // must be reported, not swallowed, or callers would assume the canonical
    // key now exists.
    let migrated = StorageEntry::new(canonical_key.clone(), legacy_entry.value);
    store
        .put(migrated.clone())
        .await
        .map_err(|source| CertStoreError::StorageWrite {
            key: canonical_key.clone(),
            source,
        })?;
    tracing::debug!("migrated '{legacy_key}' to '{canonical_key}'");

    Ok(Some(migrated))
}

/// Fetch the CA certificate from its fixed storage path.
pub async fn fetch_ca(store: &dyn KeyValueStore) -> Result<Option<StorageEntry>> {
    read_key(store, CA_KEY).await
}

/// Fetch the current CRL from its fixed storage path.
pub async fn fetch_crl(store: &dyn KeyValueStore) -> Result<Option<StorageEntry>> {
    read_key(store, CRL_KEY).await
}

async fn read_key(store: &dyn KeyValueStore, key: &str) -> Result<Option<StorageEntry>> {
    store
        .get(key)
        .await
        .map_err(|source| CertStoreError::StorageRead {
            key: key.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[tokio::test]
    async fn test_canonical_hit_returns_entry() {
        let store = MemoryStore::new();
        store
            .put(StorageEntry::new("certs/ab-cd", b"pem".to_vec()))
            .await
            .unwrap();

        let entry = fetch_cert_by_serial(&store, CertCategory::Active, "AB:CD")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(entry.key, "certs/ab-cd");
        assert_eq!(entry.value, b"pem");
    }

    #[tokio::test]
    async fn test_legacy_hit_migrates_and_keeps_legacy_key() {
        let store = MemoryStore::new();
        store
            .put(StorageEntry::new("certs/AB:CD", b"pem".to_vec()))
            .await
            .unwrap();

        let entry = fetch_cert_by_serial(&store, CertCategory::Active, "AB:CD")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(entry.key, "certs/ab-cd");
        assert_eq!(entry.value, b"pem");

        // Canonical key now holds the payload; legacy key is untouched.
        let canonical = store.get("certs/ab-cd").await.unwrap().unwrap();
        assert_eq!(canonical.value, b"pem");
        assert!(store.get("certs/AB:CD").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_double_miss_is_none_not_error() {
        let store = MemoryStore::new();
        let result = fetch_cert_by_serial(&store, CertCategory::Revoked, "11:22:33")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_canonical_input_skips_legacy_read() {
        let store = MemoryStore::new();
        let result = fetch_cert_by_serial(&store, CertCategory::Active, "ab-cd")
            .await
            .unwrap();
        assert!(result.is_none());
        // No migration write happened for a canonical miss.
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_malformed_serial_is_just_a_miss() {
        let store = MemoryStore::new();
        let result = fetch_cert_by_serial(&store, CertCategory::Active, "not hex at all")
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_fixed_paths() {
        let store = MemoryStore::new();
        store
            .put(StorageEntry::new(CA_KEY, b"ca pem".to_vec()))
            .await
            .unwrap();

        assert_eq!(fetch_ca(&store).await.unwrap().unwrap().value, b"ca pem");
        assert!(fetch_crl(&store).await.unwrap().is_none());
    }
}
