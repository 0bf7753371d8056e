use crate::modules::source::domain::entities::{RetrievalOutcome, StrategyKind};
use crate::modules::source::domain::errors::RetrievalError;
use crate::shared::utils::LogContext;
use crate::{log_info, log_warn};
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::sync::Mutex;

/// Severity of a chain event, as shown in the activity log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Normal,
    Success,
    Warning,
    Error,
}

/// Something that happened while walking the retrieval chain
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RetrievalEvent {
    Attempt {
        kind: StrategyKind,
    },
    Failure {
        kind: StrategyKind,
        reason: String,
    },
    Success {
        kind: StrategyKind,
        count: usize,
        source_label: String,
        retrieved_at: Option<DateTime<Utc>>,
    },
}

impl RetrievalEvent {
    pub fn success(outcome: &RetrievalOutcome) -> Self {
        RetrievalEvent::Success {
            kind: outcome.source,
            count: outcome.len(),
            source_label: outcome.source_label.clone(),
            retrieved_at: outcome.retrieved_at,
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            RetrievalEvent::Attempt { kind }
            | RetrievalEvent::Failure { kind, .. }
            | RetrievalEvent::Success { kind, .. } => *kind,
        }
    }

    /// Terminal-style line for this event
    pub fn message(&self) -> String {
        match self {
            RetrievalEvent::Attempt { kind } => format!("{}: {}...", kind, kind.description()),
            RetrievalEvent::Failure { kind, reason } => format!("{} failed: {}", kind, reason),
            RetrievalEvent::Success {
                kind: StrategyKind::BuiltIn,
                count,
                ..
            } => format!("WARNING: Using {} sample menu items", count),
            RetrievalEvent::Success {
                kind: StrategyKind::LocalCache,
                count,
                retrieved_at,
                ..
            } => {
                let when = retrieved_at
                    .map(|ts| ts.with_timezone(&Local).format("%d/%m/%Y %H:%M:%S").to_string())
                    .unwrap_or_else(|| "unknown time".to_string());
                format!("SUCCESS: Loaded {} menu items from cache ({})", count, when)
            }
            RetrievalEvent::Success {
                count,
                source_label,
                ..
            } => format!("SUCCESS: Loaded {} menu items from {}", count, source_label),
        }
    }

    pub fn level(&self) -> EventLevel {
        match self {
            RetrievalEvent::Attempt {
                kind: StrategyKind::BuiltIn,
            } => EventLevel::Warning,
            RetrievalEvent::Attempt { .. } => EventLevel::Normal,
            RetrievalEvent::Failure { .. } => EventLevel::Error,
            RetrievalEvent::Success {
                kind: StrategyKind::BuiltIn,
                ..
            } => EventLevel::Warning,
            RetrievalEvent::Success { .. } => EventLevel::Success,
        }
    }
}

/// Receives progress of a retrieval cycle
pub trait RetrievalObserver: Send + Sync {
    fn on_attempt(&self, kind: StrategyKind);
    fn on_failure(&self, kind: StrategyKind, error: &RetrievalError);
    fn on_success(&self, outcome: &RetrievalOutcome);
}

/// Writes chain progress to the application log
#[derive(Debug, Default)]
pub struct LoggingObserver;

impl RetrievalObserver for LoggingObserver {
    fn on_attempt(&self, kind: StrategyKind) {
        log_info!("{}", RetrievalEvent::Attempt { kind }.message());
    }

    fn on_failure(&self, kind: StrategyKind, error: &RetrievalError) {
        let reason = error.to_string();
        LogContext::retrieval_attempt(&kind.to_string(), Err(&reason));
    }

    fn on_success(&self, outcome: &RetrievalOutcome) {
        let event = RetrievalEvent::success(outcome);
        match event.level() {
            EventLevel::Warning => log_warn!("{}", event.message()),
            _ => log_info!("{}", event.message()),
        }
        LogContext::retrieval_attempt(&outcome.source.to_string(), Ok(outcome.len()));
    }
}

/// Keeps every event in memory, oldest first
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<RetrievalEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RetrievalEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.events().iter().map(RetrievalEvent::message).collect()
    }

    fn push(&self, event: RetrievalEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl RetrievalObserver for RecordingObserver {
    fn on_attempt(&self, kind: StrategyKind) {
        self.push(RetrievalEvent::Attempt { kind });
    }

    fn on_failure(&self, kind: StrategyKind, error: &RetrievalError) {
        self.push(RetrievalEvent::Failure {
            kind,
            reason: error.to_string(),
        });
    }

    fn on_success(&self, outcome: &RetrievalOutcome) {
        self.push(RetrievalEvent::success(outcome));
    }
}
