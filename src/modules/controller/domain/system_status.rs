use crate::modules::source::{EventLevel, RetrievalOutcome, StrategyKind};
use serde::Serialize;
use std::fmt;

/// One-line connection status shown above the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemStatus {
    pub text: String,
    pub level: EventLevel,
}

impl SystemStatus {
    fn new(text: &str, level: EventLevel) -> Self {
        Self {
            text: text.to_string(),
            level,
        }
    }

    pub fn loading() -> Self {
        Self::new("MENGAMBIL DATA...", EventLevel::Warning)
    }

    pub fn online() -> Self {
        Self::new("SISTEM ONLINE", EventLevel::Success)
    }

    pub fn cached() -> Self {
        Self::new("SISTEM ONLINE (OFFLINE)", EventLevel::Warning)
    }

    pub fn offline() -> Self {
        Self::new("SISTEM OFFLINE", EventLevel::Error)
    }

    /// Status graded by where the catalog came from
    pub fn for_outcome(outcome: &RetrievalOutcome) -> Self {
        if outcome.is_fresh {
            return Self::online();
        }
        match outcome.source {
            StrategyKind::BuiltIn => Self::offline(),
            _ => Self::cached(),
        }
    }
}

impl fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
