use crate::storage::{KeyValueStore, StorageEntry, StorageError};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory key-value store for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<StorageEntry>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .map(|value| StorageEntry::new(key, value.clone())))
    }

    async fn put(&self, entry: StorageEntry) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.insert(entry.key, entry.value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_roundtrip() {
        let store = MemoryStore::new();
        store
            .put(StorageEntry::new("certs/ab-cd", b"payload".to_vec()))
            .await
            .unwrap();

        let entry = store.get("certs/ab-cd").await.unwrap().unwrap();
        assert_eq!(entry.key, "certs/ab-cd");
        assert_eq!(entry.value, b"payload");
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = MemoryStore::new();
        assert!(store.get("certs/missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_and_list() {
        let store = MemoryStore::new();
        store
            .put(StorageEntry::new("certs/aa", b"a".to_vec()))
            .await
            .unwrap();
        store
            .put(StorageEntry::new("certs/bb", b"b".to_vec()))
            .await
            .unwrap();
        store
            .put(StorageEntry::new("revoked/cc", b"c".to_vec()))
            .await
            .unwrap();

        let mut certs = store.list("certs/").await.unwrap();
        certs.sort();
        assert_eq!(certs, vec!["certs/aa", "certs/bb"]);

        store.delete("certs/aa").await.unwrap();
        assert!(store.get("certs/aa").await.unwrap().is_none());
        assert_eq!(store.len().await, 2);

        // Deleting a missing key is not an error
        store.delete("certs/aa").await.unwrap();
    }
}
