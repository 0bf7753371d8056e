use crate::modules::catalog::CatalogEntry;
use crate::modules::source::domain::errors::{RetrievalError, RetrievalResult};
use crate::modules::source::domain::repositories::KeyValueStore;
use crate::shared::errors::AppResult;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::debug;

pub const DATA_KEY: &str = "cybersearch_data";
pub const TIMESTAMP_KEY: &str = "cybersearch_timestamp";

/// A catalog snapshot read back from the store
#[derive(Debug, Clone, PartialEq)]
pub struct CachedCatalog {
    pub entries: Vec<CatalogEntry>,
    /// Missing or unreadable timestamps do not invalidate the entries
    pub saved_at: Option<DateTime<Utc>>,
}

/// Last fresh catalog, kept under two keys of a [`KeyValueStore`]
#[derive(Clone)]
pub struct CatalogCache {
    store: Arc<dyn KeyValueStore>,
}

impl CatalogCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist entries and stamp them with the current time
    pub async fn store(&self, entries: &[CatalogEntry]) -> AppResult<DateTime<Utc>> {
        let saved_at = Utc::now();
        let data = serde_json::to_string(entries)?;

        self.store.set(DATA_KEY, &data).await?;
        self.store.set(TIMESTAMP_KEY, &saved_at.to_rfc3339()).await?;

        debug!("Cached {} catalog entries", entries.len());
        Ok(saved_at)
    }

    /// Read the snapshot back
    ///
    /// `Ok(None)` when nothing was ever stored. Unreadable data is an error so
    /// the caller can report it and move on.
    pub async fn load(&self) -> RetrievalResult<Option<CachedCatalog>> {
        let Some(data) = self.store.get(DATA_KEY).await? else {
            return Ok(None);
        };

        let entries: Vec<CatalogEntry> = serde_json::from_str(&data)
            .map_err(|e| RetrievalError::parse(format!("Corrupted cache data: {}", e)))?;

        let saved_at = match self.store.get(TIMESTAMP_KEY).await? {
            Some(raw) => match DateTime::parse_from_rfc3339(raw.trim()) {
                Ok(ts) => Some(ts.with_timezone(&Utc)),
                Err(e) => {
                    debug!("Ignoring unreadable cache timestamp '{}': {}", raw, e);
                    None
                }
            },
            None => None,
        };

        Ok(Some(CachedCatalog { entries, saved_at }))
    }

    /// Whether a snapshot is present (it may still be unreadable)
    pub async fn is_available(&self) -> bool {
        matches!(self.store.get(DATA_KEY).await, Ok(Some(_)))
    }

    pub async fn clear(&self) -> AppResult<()> {
        self.store.remove(DATA_KEY).await?;
        self.store.remove(TIMESTAMP_KEY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::source::domain::repositories::MockKeyValueStore;
    use crate::modules::source::infrastructure::store::MemoryStore;
    use crate::shared::errors::AppError;

    fn entries() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("Nasi Goreng", "pedas").unwrap(),
            CatalogEntry::new("Es Teh", "").unwrap(),
        ]
    }

    #[tokio::test]
    async fn test_store_then_load() {
        let store = Arc::new(MemoryStore::new());
        let cache = CatalogCache::new(store.clone());

        let saved_at = cache.store(&entries()).await.unwrap();
        let loaded = cache.load().await.unwrap().unwrap();

        assert_eq!(loaded.entries, entries());
        assert_eq!(loaded.saved_at.map(|t| t.timestamp()), Some(saved_at.timestamp()));
        assert!(store.get(DATA_KEY).await.unwrap().unwrap().contains("Nasi Goreng"));
    }

    #[tokio::test]
    async fn test_empty_store_reads_as_absent() {
        let cache = CatalogCache::new(Arc::new(MemoryStore::new()));
        assert_eq!(cache.load().await.unwrap(), None);
        assert!(!cache.is_available().await);
    }

    #[tokio::test]
    async fn test_missing_timestamp_keeps_entries() {
        let store = Arc::new(MemoryStore::new());
        store.set(DATA_KEY, r#"[{"title":"Kopi","info":""}]"#).await.unwrap();
        store.set(TIMESTAMP_KEY, "yesterday").await.unwrap();

        let cache = CatalogCache::new(store);
        let loaded = cache.load().await.unwrap().unwrap();
        assert_eq!(loaded.entries.len(), 1);
        assert_eq!(loaded.saved_at, None);
        assert!(cache.is_available().await);
    }

    #[tokio::test]
    async fn test_corrupted_data_is_parse_error() {
        let store = Arc::new(MemoryStore::new());
        store.set(DATA_KEY, "[{").await.unwrap();
        store.set(TIMESTAMP_KEY, "2025-01-01T00:00:00Z").await.unwrap();

        let err = CatalogCache::new(store).load().await.unwrap_err();
        assert!(matches!(err, RetrievalError::Parse { ref message } if message.contains("data")));
    }

    #[tokio::test]
    async fn test_blank_title_in_cache_is_rejected() {
        let store = Arc::new(MemoryStore::new());
        store.set(DATA_KEY, r#"[{"title":"  ","info":"x"}]"#).await.unwrap();
        store.set(TIMESTAMP_KEY, "2025-01-01T00:00:00Z").await.unwrap();

        let result = CatalogCache::new(store).load().await;
        assert!(matches!(result, Err(RetrievalError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_store_failure_is_reported() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_set()
            .returning(|_, _| Err(AppError::StorageError("disk full".to_string())));

        let result = CatalogCache::new(Arc::new(mock)).store(&entries()).await;
        assert!(matches!(result, Err(AppError::StorageError(_))));
    }

    #[tokio::test]
    async fn test_read_failure_is_storage_error() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get()
            .returning(|_| Err(AppError::StorageError("locked".to_string())));

        let cache = CatalogCache::new(Arc::new(mock));
        assert_eq!(
            cache.load().await.unwrap_err(),
            RetrievalError::storage("locked")
        );
        assert!(!cache.is_available().await);
    }

    #[tokio::test]
    async fn test_clear_removes_both_keys() {
        let store = Arc::new(MemoryStore::new());
        let cache = CatalogCache::new(store.clone());
        cache.store(&entries()).await.unwrap();

        cache.clear().await.unwrap();
        assert!(store.is_empty());
    }
}
