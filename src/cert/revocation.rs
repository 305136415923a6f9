use crate::cert::fetch::{fetch_cert_by_serial, CertCategory};
use crate::cert::serial::normalize_serial;
use crate::storage::{KeyValueStore, StorageEntry};
use crate::utils::errors::{CertStoreError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Payload stored under `revoked/<serial>`: the certificate that was revoked
/// and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevocationEntry {
    pub certificate: String,
    pub revocation_time: DateTime<Utc>,
}

/// Mark the certificate with the given serial as revoked.
///
/// Looks up the active record (migrating its key if needed), then writes a
/// [`RevocationEntry`] under the canonical revoked key. The active record is
/// kept; pruning issued certificates belongs to CRL rebuilding.
pub async fn revoke_cert(
    store: &dyn KeyValueStore,
    serial: &str,
) -> Result<RevocationEntry> {
    let entry = fetch_cert_by_serial(store, CertCategory::Active, serial)
        .await?
        .ok_or_else(|| {
            CertStoreError::InvalidInput(format!("no certificate with serial '{serial}'"))
        })?;

    let revocation = RevocationEntry {
        certificate: String::from_utf8(entry.value)?,
        revocation_time: Utc::now(),
    };

    let key = format!(
        "{}{}",
        CertCategory::Revoked.prefix(),
        normalize_serial(serial)
    );
    let value = serde_json::to_vec(&revocation)?;
    store
        .put(StorageEntry::new(key.clone(), value))
        .await
        .map_err(|source| CertStoreError::StorageWrite { key, source })?;

    tracing::info!("revoked certificate serial '{}'", normalize_serial(serial));
    Ok(revocation)
}
