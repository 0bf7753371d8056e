use crate::shared::errors::AppResult;
use async_trait::async_trait;

/// Durable string key/value storage backing the local catalog cache
///
/// This abstracts the storage mechanism from the retrieval chain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write a value, replacing any previous one
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete a value; deleting a missing key is not an error
    async fn remove(&self, key: &str) -> AppResult<()>;
}
