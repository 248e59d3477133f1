//! In-memory state store backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::store::{StateStore, StoreError};

/// Process-local store. State is lost when the process exits.
#[derive(Default)]
pub struct MemoryStateStore {
    entries: DashMap<String, Vec<String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, mainly for tests.
    pub fn with_entry(self, key: &str, titles: &[&str]) -> Self {
        self.entries
            .insert(key.to_string(), titles.iter().map(|t| t.to_string()).collect());
        self
    }

    /// Whether anything has ever been stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

#[async_trait]
impl StateStore for MemoryStateStore {
    async fn load(&self, key: &str) -> Result<Vec<String>, StoreError> {
        Ok(self
            .entries
            .get(key)
            .map(|entry| entry.value().clone())
            .unwrap_or_default())
    }

    async fn save(&self, key: &str, titles: &[String]) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), titles.to_vec());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_missing_key_is_empty() {
        let store = MemoryStateStore::new();
        assert!(store.load("last_all.txt").await.unwrap().is_empty());
        assert!(!store.contains("last_all.txt"));
    }

    #[tokio::test]
    async fn test_save_overwrites() {
        let store = MemoryStateStore::new().with_entry("k", &["a", "b"]);
        store.save("k", &["c".to_string()]).await.unwrap();
        assert_eq!(store.load("k").await.unwrap(), vec!["c".to_string()]);
    }
}
