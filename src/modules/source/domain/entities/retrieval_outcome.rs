use crate::modules::catalog::CatalogEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five retrieval methods, in the order the chain attempts them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Default view of the remote sheet (`gid=0`)
    DefaultView,
    /// Configured named sheet
    NamedSheet,
    /// First sheet listed by the worksheet feed
    DiscoveredSheet,
    /// Last fresh result persisted locally
    LocalCache,
    /// Built-in placeholder entries
    BuiltIn,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::DefaultView,
        StrategyKind::NamedSheet,
        StrategyKind::DiscoveredSheet,
        StrategyKind::LocalCache,
        StrategyKind::BuiltIn,
    ];

    /// 1-based position in the chain
    pub fn method_number(self) -> u8 {
        match self {
            StrategyKind::DefaultView => 1,
            StrategyKind::NamedSheet => 2,
            StrategyKind::DiscoveredSheet => 3,
            StrategyKind::LocalCache => 4,
            StrategyKind::BuiltIn => 5,
        }
    }

    /// Whether a success from this method counts as a live remote result
    pub fn is_remote(self) -> bool {
        matches!(
            self,
            StrategyKind::DefaultView | StrategyKind::NamedSheet | StrategyKind::DiscoveredSheet
        )
    }

    pub fn description(self) -> &'static str {
        match self {
            StrategyKind::DefaultView => "Accessing sheet by gid=0",
            StrategyKind::NamedSheet => "Accessing sheet by name",
            StrategyKind::DiscoveredSheet => "Getting all sheets",
            StrategyKind::LocalCache => "Loading from cache",
            StrategyKind::BuiltIn => "Using sample data",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Method {}", self.method_number())
    }
}

/// Result of one retrieval cycle; replaces the working catalog wholesale
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalOutcome {
    pub entries: Vec<CatalogEntry>,
    pub source: StrategyKind,
    /// Human-readable origin, e.g. the sheet name that answered
    pub source_label: String,
    /// `false` for cached or built-in data (offline mode)
    pub is_fresh: bool,
    /// When the entries were fetched from the remote sheet, if known
    pub retrieved_at: Option<DateTime<Utc>>,
}

impl RetrievalOutcome {
    /// Outcome of a live remote fetch
    pub fn fresh(entries: Vec<CatalogEntry>, source: StrategyKind, source_label: impl Into<String>) -> Self {
        Self {
            entries,
            source,
            source_label: source_label.into(),
            is_fresh: true,
            retrieved_at: Some(Utc::now()),
        }
    }

    /// Outcome served from local data
    pub fn offline(
        entries: Vec<CatalogEntry>,
        source: StrategyKind,
        source_label: impl Into<String>,
        retrieved_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            entries,
            source,
            source_label: source_label.into(),
            is_fresh: false,
            retrieved_at,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
