//! StateStore trait definition.

use async_trait::async_trait;

use crate::store::StoreError;

/// Key-value store for the ordered title list of each category.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Load the titles stored under `key`, or an empty list if there is none.
    async fn load(&self, key: &str) -> Result<Vec<String>, StoreError>;

    /// Replace whatever is stored under `key` with `titles`.
    async fn save(&self, key: &str, titles: &[String]) -> Result<(), StoreError>;

    /// Backend name for logging.
    fn name(&self) -> &'static str;
}
