use crate::modules::source::domain::entities::{RetrievalOutcome, StrategyKind};
use crate::modules::source::domain::errors::{RetrievalError, RetrievalResult};
use crate::modules::source::domain::strategies::CatalogStrategy;
use crate::modules::source::infrastructure::store::CatalogCache;
use async_trait::async_trait;

const CACHE_LABEL: &str = "cache";

/// Method 4: serve the last fresh catalog from local storage
pub struct CachedCatalogStrategy {
    cache: CatalogCache,
}

impl CachedCatalogStrategy {
    pub fn new(cache: CatalogCache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl CatalogStrategy for CachedCatalogStrategy {
    fn kind(&self) -> StrategyKind {
        StrategyKind::LocalCache
    }

    async fn attempt(&self) -> RetrievalResult<RetrievalOutcome> {
        let cached = self
            .cache
            .load()
            .await?
            .ok_or_else(|| RetrievalError::empty(CACHE_LABEL))?;

        if cached.entries.is_empty() {
            return Err(RetrievalError::empty(CACHE_LABEL));
        }

        Ok(RetrievalOutcome::offline(
            cached.entries,
            StrategyKind::LocalCache,
            CACHE_LABEL,
            cached.saved_at,
        ))
    }
}
