use crate::modules::source::{
    EventLevel, RetrievalError, RetrievalEvent, RetrievalObserver, RetrievalOutcome, StrategyKind,
};
use serde::Serialize;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Mutex;

const DEFAULT_CAPACITY: usize = 200;

/// A line of the terminal-style activity log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityLine {
    pub text: String,
    pub level: EventLevel,
}

impl fmt::Display for ActivityLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SYSTEM> {}", self.text)
    }
}

/// Bounded activity log, newest last; the oldest lines fall off first
#[derive(Debug)]
pub struct ActivityLog {
    lines: Mutex<VecDeque<ActivityLine>>,
    capacity: usize,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY))),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&self, text: impl Into<String>, level: EventLevel) {
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(ActivityLine {
            text: text.into(),
            level,
        });
    }

    pub fn lines(&self) -> Vec<ActivityLine> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.iter().cloned().collect()
    }

    pub fn last(&self) -> Option<ActivityLine> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.back().cloned()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().map(|l| l.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&self, event: RetrievalEvent) {
        self.push(event.message(), event.level());
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl RetrievalObserver for ActivityLog {
    fn on_attempt(&self, kind: StrategyKind) {
        self.record(RetrievalEvent::Attempt { kind });
    }

    fn on_failure(&self, kind: StrategyKind, error: &RetrievalError) {
        self.record(RetrievalEvent::Failure {
            kind,
            reason: error.to_string(),
        });
    }

    fn on_success(&self, outcome: &RetrievalOutcome) {
        self.record(RetrievalEvent::success(outcome));
    }
}
