use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        // A poisoned map still holds consistent data; every write is a single insert/remove.
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.lock().get(key).cloned())
    }

    async fn put(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.lock().insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_remove() {
        let store = MemoryStore::new();
        assert!(store.get("token").await.unwrap().is_none());

        store.put("token", b"abc".to_vec()).await.unwrap();
        assert_eq!(store.get("token").await.unwrap(), Some(b"abc".to_vec()));

        store.remove("token").await.unwrap();
        assert!(store.get("token").await.unwrap().is_none());

        // Removing twice is fine
        store.remove("token").await.unwrap();
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.put("k", b"v".to_vec()).await.unwrap();
        assert_eq!(other.get("k").await.unwrap(), Some(b"v".to_vec()));
    }
}
