//! Presentation state over the working catalog
//!
//! The controller owns the catalog produced by the last retrieval cycle, the
//! ranked view of it for the current query, the open detail entry and the
//! status line. Catalog, view and detail live behind a single lock so a
//! reader never sees a view ranked against a different catalog.

use crate::modules::catalog::CatalogEntry;
use crate::modules::controller::domain::{ActivityLine, ActivityLog, DebugSnapshot, SystemStatus};
use crate::modules::search::{CatalogRanker, MatchedEntry, QueryDebouncer};
use crate::modules::source::{CatalogSource, EventLevel, RetrievalOutcome, StrategyKind};
use crate::shared::utils::{LogContext, TimedOperation};
use crate::log_debug;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

const COPY_PREVIEW_CHARS: usize = 50;

#[derive(Debug)]
struct ControllerState {
    catalog: Vec<CatalogEntry>,
    view: Vec<MatchedEntry>,
    query: String,
    detail: Option<CatalogEntry>,
    status: SystemStatus,
    source: Option<StrategyKind>,
    retrieved_at: Option<DateTime<Utc>>,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            view: Vec::new(),
            query: String::new(),
            detail: None,
            status: SystemStatus::loading(),
            source: None,
            retrieved_at: None,
        }
    }
}

pub struct CatalogController {
    source: CatalogSource,
    ranker: CatalogRanker,
    state: Arc<RwLock<ControllerState>>,
    activity: Arc<ActivityLog>,
    debouncer: QueryDebouncer,
}

impl CatalogController {
    pub fn new(mut source: CatalogSource, ranker: CatalogRanker, debounce: Duration) -> Self {
        let activity = Arc::new(ActivityLog::default());
        source.add_observer(activity.clone());

        Self {
            source,
            ranker,
            state: Arc::new(RwLock::new(ControllerState::default())),
            activity,
            debouncer: QueryDebouncer::new(debounce),
        }
    }

    /// Run a retrieval cycle and replace the working catalog with its result
    ///
    /// The view is reset to the whole catalog in source order.
    pub async fn load(&self) -> RetrievalOutcome {
        self.state.write().await.status = SystemStatus::loading();
        self.activity
            .push("Attempting to connect to database...", EventLevel::Warning);

        let outcome = self.source.retrieve().await;

        let mut state = self.state.write().await;
        state.catalog = outcome.entries.clone();
        state.view = outcome
            .entries
            .iter()
            .cloned()
            .map(MatchedEntry::unranked)
            .collect();
        state.query.clear();
        state.status = SystemStatus::for_outcome(&outcome);
        state.source = Some(outcome.source);
        state.retrieved_at = outcome.retrieved_at;

        outcome
    }

    /// Rank the catalog against `query` right away
    pub async fn apply_query(&self, query: &str) -> Vec<MatchedEntry> {
        run_query(&self.state, &self.ranker, &self.activity, query).await
    }

    /// Rank once edits have been quiet for the debounce interval
    ///
    /// Supersedes any pass still waiting; the handle yields `false` if this
    /// pass is itself superseded.
    pub fn schedule_query(&self, query: impl Into<String>) -> JoinHandle<bool> {
        let query = query.into();
        let state = self.state.clone();
        let ranker = self.ranker.clone();
        let activity = self.activity.clone();

        self.debouncer.schedule(move || async move {
            run_query(&state, &ranker, &activity, &query).await;
        })
    }

    /// Open the entry at `index` of the current view
    pub async fn open_detail(&self, index: usize) -> Option<CatalogEntry> {
        let mut state = self.state.write().await;
        let entry = state.view.get(index)?.entry.clone();
        state.detail = Some(entry.clone());

        self.activity
            .push(format!("Opening menu: {}", entry.title()), EventLevel::Normal);
        Some(entry)
    }

    pub async fn close_detail(&self) {
        self.state.write().await.detail = None;
    }

    pub async fn current_detail(&self) -> Option<CatalogEntry> {
        self.state.read().await.detail.clone()
    }

    /// Text to put on the clipboard for the open detail
    pub async fn copy_detail(&self) -> Option<String> {
        let info = self.state.read().await.detail.as_ref()?.info().to_string();

        self.activity.push(
            format!("Data copied to clipboard: {}", copy_preview(&info)),
            EventLevel::Success,
        );
        Some(info)
    }

    pub async fn results(&self) -> Vec<MatchedEntry> {
        self.state.read().await.view.clone()
    }

    pub async fn catalog(&self) -> Vec<CatalogEntry> {
        self.state.read().await.catalog.clone()
    }

    pub async fn query(&self) -> String {
        self.state.read().await.query.clone()
    }

    pub async fn status(&self) -> SystemStatus {
        self.state.read().await.status.clone()
    }

    /// Strategy that produced the working catalog, once loaded
    pub async fn source_kind(&self) -> Option<StrategyKind> {
        self.state.read().await.source
    }

    pub async fn retrieved_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.retrieved_at
    }

    pub fn activity(&self) -> Vec<ActivityLine> {
        self.activity.lines()
    }

    pub async fn debug_snapshot(&self) -> DebugSnapshot {
        let cache_available = match self.source.cache() {
            Some(cache) => cache.is_available().await,
            None => false,
        };

        let state = self.state.read().await;
        DebugSnapshot {
            total_entries: state.catalog.len(),
            filtered_entries: state.view.len(),
            current_detail: state.detail.as_ref().map(|d| d.title().to_string()),
            cache_available,
        }
    }
}

async fn run_query(
    state: &RwLock<ControllerState>,
    ranker: &CatalogRanker,
    activity: &ActivityLog,
    query: &str,
) -> Vec<MatchedEntry> {
    let query = query.trim();
    let timer = TimedOperation::new("ranking pass");
    LogContext::search_operation(query, None);

    let mut state = state.write().await;
    let view = ranker.rank(&state.catalog, query);
    state.view = view.clone();
    state.query = query.to_string();
    drop(state);

    LogContext::search_operation(query, Some(view.len()));
    activity.push(
        format!("Fuzzy filter applied: \"{}\" ({} results)", query, view.len()),
        EventLevel::Normal,
    );
    timer.finish();
    log_debug!("View now holds {} entries", view.len());

    view
}

/// First 50 characters, with an ellipsis when the text was longer
fn copy_preview(text: &str) -> String {
    let mut chars = text.chars();
    let preview: String = chars.by_ref().take(COPY_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}...", preview)
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::search::MatchType;
    use crate::modules::source::domain::strategies::MockCatalogStrategy;
    use crate::modules::source::{
        BuiltInCatalogStrategy, CatalogCache, CatalogStrategy, MemoryStore, RetrievalError,
    };

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("Nasi Goreng", "pedas").unwrap(),
            CatalogEntry::new("Mie Ayam", "").unwrap(),
            CatalogEntry::new("Nasi Uduk", "santan").unwrap(),
        ]
    }

    fn remote_strategy(entries: Vec<CatalogEntry>) -> Box<dyn CatalogStrategy> {
        let mut mock = MockCatalogStrategy::new();
        mock.expect_kind().return_const(StrategyKind::DefaultView);
        mock.expect_attempt().returning(move || {
            Ok(RetrievalOutcome::fresh(
                entries.clone(),
                StrategyKind::DefaultView,
                "database",
            ))
        });
        Box::new(mock)
    }

    fn controller_with(strategies: Vec<Box<dyn CatalogStrategy>>) -> CatalogController {
        let cache = CatalogCache::new(Arc::new(MemoryStore::new()));
        CatalogController::new(
            CatalogSource::new(strategies, Some(cache)),
            CatalogRanker::default(),
            Duration::from_millis(20),
        )
    }

    async fn loaded_controller() -> CatalogController {
        let controller = controller_with(vec![remote_strategy(catalog())]);
        controller.load().await;
        controller
    }

    #[tokio::test]
    async fn test_initial_status_is_loading() {
        let controller = controller_with(vec![]);
        assert_eq!(controller.status().await, SystemStatus::loading());
        assert!(controller.results().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_replaces_catalog_and_resets_view() {
        let controller = loaded_controller().await;

        assert_eq!(controller.status().await, SystemStatus::online());
        assert_eq!(controller.source_kind().await, Some(StrategyKind::DefaultView));
        assert!(controller.retrieved_at().await.is_some());

        let results = controller.results().await;
        assert_eq!(results.len(), 3);
        assert!(results.iter().all(|r| r.match_type().is_none()));
        assert_eq!(results[0].title(), "Nasi Goreng");
    }

    #[tokio::test]
    async fn test_load_falls_back_to_builtin() {
        let mut failing = MockCatalogStrategy::new();
        failing.expect_kind().return_const(StrategyKind::DefaultView);
        failing
            .expect_attempt()
            .returning(|| Err(RetrievalError::network("HTTP error! status: 503")));

        let controller = controller_with(vec![Box::new(failing), Box::new(BuiltInCatalogStrategy::new())]);
        let outcome = controller.load().await;

        assert_eq!(outcome.source, StrategyKind::BuiltIn);
        assert_eq!(controller.status().await, SystemStatus::offline());

        let activity: Vec<String> = controller.activity().into_iter().map(|l| l.text).collect();
        assert_eq!(activity[0], "Attempting to connect to database...");
        assert!(activity.contains(&"Method 1 failed: Network error: HTTP error! status: 503".to_string()));
        assert_eq!(activity.last().unwrap(), "WARNING: Using 3 sample menu items");
    }

    #[tokio::test]
    async fn test_apply_query_ranks_and_logs() {
        let controller = loaded_controller().await;

        let results = controller.apply_query("  nasi ").await;
        let titles: Vec<&str> = results.iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["Nasi Goreng", "Nasi Uduk"]);
        assert!(results.iter().all(|r| r.match_type() == Some(MatchType::Exact)));

        assert_eq!(controller.query().await, "nasi");
        assert_eq!(controller.results().await, results);
        assert_eq!(
            controller.activity().last().unwrap().text,
            "Fuzzy filter applied: \"nasi\" (2 results)"
        );
    }

    #[tokio::test]
    async fn test_empty_query_restores_catalog_order() {
        let controller = loaded_controller().await;
        controller.apply_query("uduk").await;

        let results = controller.apply_query("").await;
        assert_eq!(results.len(), 3);
        assert_eq!(results[2].title(), "Nasi Uduk");
    }

    #[tokio::test]
    async fn test_ranking_does_not_touch_catalog() {
        let controller = loaded_controller().await;
        controller.apply_query("zzzz").await;

        assert!(controller.results().await.is_empty());
        assert_eq!(controller.catalog().await, catalog());
    }

    #[tokio::test]
    async fn test_schedule_query_applies_only_last_edit() {
        let controller = loaded_controller().await;

        let first = controller.schedule_query("m");
        let second = controller.schedule_query("mi");
        let last = controller.schedule_query("mie");

        assert!(!first.await.unwrap());
        assert!(!second.await.unwrap());
        assert!(last.await.unwrap());

        assert_eq!(controller.query().await, "mie");
        let results = controller.results().await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title(), "Mie Ayam");

        let applied = controller
            .activity()
            .iter()
            .filter(|l| l.text.starts_with("Fuzzy filter applied"))
            .count();
        assert_eq!(applied, 1);
    }

    #[tokio::test]
    async fn test_detail_lifecycle() {
        let controller = loaded_controller().await;
        controller.apply_query("uduk").await;

        assert_eq!(controller.open_detail(5).await, None);

        let detail = controller.open_detail(0).await.unwrap();
        assert_eq!(detail.title(), "Nasi Uduk");
        assert_eq!(controller.current_detail().await, Some(detail));
        assert_eq!(controller.activity().last().unwrap().text, "Opening menu: Nasi Uduk");

        assert_eq!(controller.copy_detail().await.as_deref(), Some("santan"));
        assert_eq!(
            controller.activity().last().unwrap().text,
            "Data copied to clipboard: santan"
        );

        controller.close_detail().await;
        assert_eq!(controller.current_detail().await, None);
        assert_eq!(controller.copy_detail().await, None);
    }

    #[tokio::test]
    async fn test_debug_snapshot() {
        let controller = loaded_controller().await;
        controller.apply_query("nasi").await;
        controller.open_detail(1).await;

        let snapshot = controller.debug_snapshot().await;
        assert_eq!(snapshot.total_entries, 3);
        assert_eq!(snapshot.filtered_entries, 2);
        assert_eq!(snapshot.current_detail.as_deref(), Some("Nasi Uduk"));
        assert!(snapshot.cache_available);
    }

    #[test]
    fn test_copy_preview_truncates_long_text() {
        assert_eq!(copy_preview("pendek"), "pendek");

        let exact = "a".repeat(50);
        assert_eq!(copy_preview(&exact), exact);

        let long = "b".repeat(51);
        assert_eq!(copy_preview(&long), format!("{}...", "b".repeat(50)));
    }
}
