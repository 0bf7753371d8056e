//! The retrieval chain
//!
//! Strategies are tried strictly in order, each exactly once per cycle. The
//! first populated outcome wins; every failure is reported to the observers
//! and the walk moves on. The chain cannot fail: when every strategy has
//! given up, the built-in placeholder catalog is served.

use super::observer::{LoggingObserver, RetrievalObserver};
use crate::modules::source::domain::entities::RetrievalOutcome;
use crate::modules::source::domain::errors::RetrievalError;
use crate::modules::source::domain::repositories::KeyValueStore;
use crate::modules::source::domain::strategies::CatalogStrategy;
use crate::modules::source::infrastructure::gviz::SheetsClient;
use crate::modules::source::infrastructure::store::CatalogCache;
use crate::modules::source::infrastructure::strategies::{
    BuiltInCatalogStrategy, CachedCatalogStrategy, RemoteSheetStrategy,
};
use crate::shared::config::AppConfig;
use crate::shared::errors::AppResult;
use crate::shared::utils::{LogContext, TimedOperation};
use crate::{log_debug, log_warn};
use std::sync::Arc;

pub struct CatalogSource {
    strategies: Vec<Box<dyn CatalogStrategy>>,
    cache: Option<CatalogCache>,
    observers: Vec<Arc<dyn RetrievalObserver>>,
}

impl CatalogSource {
    /// Chain over explicit strategies; `cache` receives every fresh result
    pub fn new(strategies: Vec<Box<dyn CatalogStrategy>>, cache: Option<CatalogCache>) -> Self {
        Self {
            strategies,
            cache,
            observers: Vec::new(),
        }
    }

    /// The standard five-method chain against the configured spreadsheet
    pub fn from_config(config: &AppConfig, store: Arc<dyn KeyValueStore>) -> AppResult<Self> {
        let client = Arc::new(SheetsClient::new(config)?);
        let cache = CatalogCache::new(store);

        let strategies: Vec<Box<dyn CatalogStrategy>> = vec![
            Box::new(RemoteSheetStrategy::default_view(client.clone())),
            Box::new(RemoteSheetStrategy::named(client.clone(), config.sheet_name.clone())),
            Box::new(RemoteSheetStrategy::discovered(client)),
            Box::new(CachedCatalogStrategy::new(cache.clone())),
            Box::new(BuiltInCatalogStrategy::new()),
        ];

        Ok(Self::new(strategies, Some(cache)).with_observer(Arc::new(LoggingObserver)))
    }

    pub fn with_observer(mut self, observer: Arc<dyn RetrievalObserver>) -> Self {
        self.add_observer(observer);
        self
    }

    pub fn add_observer(&mut self, observer: Arc<dyn RetrievalObserver>) {
        self.observers.push(observer);
    }

    pub fn cache(&self) -> Option<&CatalogCache> {
        self.cache.as_ref()
    }

    /// Run one retrieval cycle
    pub async fn retrieve(&self) -> RetrievalOutcome {
        let timer = TimedOperation::new("catalog retrieval");

        for strategy in &self.strategies {
            let kind = strategy.kind();
            self.notify(|o| o.on_attempt(kind));

            let error = match strategy.attempt().await {
                Ok(outcome) if !outcome.is_empty() => {
                    if outcome.is_fresh {
                        self.persist(&outcome).await;
                    }
                    self.notify(|o| o.on_success(&outcome));
                    timer.finish_with_info(&outcome.source_label);
                    return outcome;
                }
                Ok(outcome) => RetrievalError::empty(outcome.source_label),
                Err(e) => e,
            };

            self.notify(|o| o.on_failure(kind, &error));
        }

        log_debug!("Every configured strategy failed, serving built-in entries");
        let outcome = BuiltInCatalogStrategy::outcome();
        self.notify(|o| o.on_attempt(outcome.source));
        self.notify(|o| o.on_success(&outcome));
        timer.finish_with_info(&outcome.source_label);
        outcome
    }

    async fn persist(&self, outcome: &RetrievalOutcome) {
        let Some(cache) = &self.cache else {
            return;
        };

        if let Err(e) = cache.store(&outcome.entries).await {
            log_warn!("Could not cache {} entries: {}", outcome.len(), e);
            LogContext::error_with_context(&e, "Catalog cache write failed");
        }
    }

    fn notify(&self, event: impl Fn(&dyn RetrievalObserver)) {
        for observer in &self.observers {
            event(observer.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::CatalogEntry;
    use crate::modules::source::application::observer::{RecordingObserver, RetrievalEvent};
    use crate::modules::source::domain::entities::StrategyKind;
    use crate::modules::source::domain::repositories::MockKeyValueStore;
    use crate::modules::source::domain::strategies::MockCatalogStrategy;
    use crate::modules::source::infrastructure::store::MemoryStore;
    use crate::shared::errors::AppError;

    fn entries(titles: &[&str]) -> Vec<CatalogEntry> {
        titles
            .iter()
            .filter_map(|t| CatalogEntry::new(t, ""))
            .collect()
    }

    fn failing(kind: StrategyKind, error: RetrievalError) -> Box<dyn CatalogStrategy> {
        let mut mock = MockCatalogStrategy::new();
        mock.expect_kind().return_const(kind);
        mock.expect_attempt()
            .times(1)
            .returning(move || Err(error.clone()));
        Box::new(mock)
    }

    fn succeeding(kind: StrategyKind, titles: &'static [&'static str]) -> Box<dyn CatalogStrategy> {
        let mut mock = MockCatalogStrategy::new();
        mock.expect_kind().return_const(kind);
        mock.expect_attempt().times(1).returning(move || {
            if kind.is_remote() {
                Ok(RetrievalOutcome::fresh(entries(titles), kind, "remote"))
            } else {
                Ok(RetrievalOutcome::offline(entries(titles), kind, "local", None))
            }
        });
        Box::new(mock)
    }

    fn never_called(kind: StrategyKind) -> Box<dyn CatalogStrategy> {
        let mut mock = MockCatalogStrategy::new();
        mock.expect_kind().return_const(kind);
        mock.expect_attempt().never();
        Box::new(mock)
    }

    #[tokio::test]
    async fn test_first_success_ends_chain_and_is_cached() {
        let store = Arc::new(MemoryStore::new());
        let recorder = Arc::new(RecordingObserver::new());
        let source = CatalogSource::new(
            vec![
                failing(StrategyKind::DefaultView, RetrievalError::empty("database")),
                succeeding(StrategyKind::NamedSheet, &["Soto", "Bakso", "Es Teh"]),
                never_called(StrategyKind::DiscoveredSheet),
                never_called(StrategyKind::LocalCache),
            ],
            Some(CatalogCache::new(store.clone())),
        )
        .with_observer(recorder.clone());

        let outcome = source.retrieve().await;

        assert_eq!(outcome.source, StrategyKind::NamedSheet);
        assert!(outcome.is_fresh);
        assert_eq!(outcome.len(), 3);

        let cached = CatalogCache::new(store).load().await.unwrap().unwrap();
        assert_eq!(cached.entries.len(), 3);

        assert_eq!(
            recorder.events(),
            vec![
                RetrievalEvent::Attempt { kind: StrategyKind::DefaultView },
                RetrievalEvent::Failure {
                    kind: StrategyKind::DefaultView,
                    reason: "No usable rows in database".to_string(),
                },
                RetrievalEvent::Attempt { kind: StrategyKind::NamedSheet },
                RetrievalEvent::success(&outcome),
            ]
        );
    }

    #[tokio::test]
    async fn test_offline_result_is_not_cached() {
        let mut store = MockKeyValueStore::new();
        store.expect_set().never();

        let source = CatalogSource::new(
            vec![
                failing(StrategyKind::DefaultView, RetrievalError::network("offline")),
                succeeding(StrategyKind::LocalCache, &["Kopi"]),
            ],
            Some(CatalogCache::new(Arc::new(store))),
        );

        let outcome = source.retrieve().await;
        assert_eq!(outcome.source, StrategyKind::LocalCache);
        assert!(!outcome.is_fresh);
    }

    #[tokio::test]
    async fn test_cache_write_failure_does_not_fail_retrieval() {
        let mut store = MockKeyValueStore::new();
        store
            .expect_set()
            .returning(|_, _| Err(AppError::StorageError("read-only".to_string())));

        let source = CatalogSource::new(
            vec![succeeding(StrategyKind::DefaultView, &["Soto"])],
            Some(CatalogCache::new(Arc::new(store))),
        );

        let outcome = source.retrieve().await;
        assert_eq!(outcome.source, StrategyKind::DefaultView);
        assert_eq!(outcome.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_outcome_counts_as_failure() {
        let mut empty = MockCatalogStrategy::new();
        empty.expect_kind().return_const(StrategyKind::LocalCache);
        empty.expect_attempt().returning(|| {
            Ok(RetrievalOutcome::offline(vec![], StrategyKind::LocalCache, "cache", None))
        });

        let recorder = Arc::new(RecordingObserver::new());
        let source = CatalogSource::new(vec![Box::new(empty)], None).with_observer(recorder.clone());

        let outcome = source.retrieve().await;
        assert_eq!(outcome.source, StrategyKind::BuiltIn);
        assert!(recorder
            .messages()
            .contains(&"Method 4 failed: No usable rows in cache".to_string()));
    }

    #[tokio::test]
    async fn test_exhausted_chain_serves_builtin() {
        let recorder = Arc::new(RecordingObserver::new());
        let source = CatalogSource::new(
            vec![
                failing(StrategyKind::DefaultView, RetrievalError::network("HTTP error! status: 500")),
                failing(StrategyKind::NamedSheet, RetrievalError::parse("no envelope")),
                failing(StrategyKind::DiscoveredSheet, RetrievalError::network("timeout")),
                failing(StrategyKind::LocalCache, RetrievalError::empty("cache")),
            ],
            None,
        )
        .with_observer(recorder.clone());

        let outcome = source.retrieve().await;

        assert_eq!(outcome.source, StrategyKind::BuiltIn);
        assert_eq!(outcome.len(), 3);
        assert!(!outcome.is_fresh);

        let messages = recorder.messages();
        assert_eq!(messages.len(), 10);
        assert_eq!(messages[8], "Method 5: Using sample data...");
        assert_eq!(messages[9], "WARNING: Using 3 sample menu items");
    }

    #[tokio::test]
    async fn test_empty_chain_still_yields_entries() {
        let outcome = CatalogSource::new(Vec::new(), None).retrieve().await;
        assert!(!outcome.is_empty());
    }
}
