use serde::Serialize;
use std::fmt;

/// Counters for the debug panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugSnapshot {
    pub total_entries: usize,
    pub filtered_entries: usize,
    pub current_detail: Option<String>,
    pub cache_available: bool,
}

impl fmt::Display for DebugSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Data: {}", self.total_entries)?;
        writeln!(f, "Filtered Data: {}", self.filtered_entries)?;
        writeln!(
            f,
            "Current Detail: {}",
            self.current_detail.as_deref().unwrap_or("None")
        )?;
        write!(
            f,
            "Cache: {}",
            if self.cache_available { "Available" } else { "Empty" }
        )
    }
}
