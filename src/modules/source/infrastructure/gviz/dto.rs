use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a gviz `setResponse(...)` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GvizResponse {
    pub version: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub errors: Vec<GvizError>,
    pub table: Option<GvizTable>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GvizError {
    pub reason: Option<String>,
    pub message: Option<String>,
    pub detailed_message: Option<String>,
}

impl GvizError {
    pub fn describe(&self) -> String {
        self.detailed_message
            .clone()
            .or_else(|| self.message.clone())
            .or_else(|| self.reason.clone())
            .unwrap_or_else(|| "unknown gviz error".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GvizTable {
    #[serde(default)]
    pub rows: Vec<GvizRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GvizRow {
    /// Positional cells; a missing cell is `null`
    #[serde(default)]
    pub c: Vec<Option<GvizCell>>,
}

impl GvizRow {
    /// Text of the cell at `index`, empty when absent
    pub fn cell_text(&self, index: usize) -> String {
        self.c
            .get(index)
            .and_then(Option::as_ref)
            .map(GvizCell::text)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GvizCell {
    #[serde(default)]
    pub v: Value,
    /// Formatted value, present for dates and numbers
    pub f: Option<String>,
}

impl GvizCell {
    /// Stringified cell value
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) read as empty, the same as a
    /// missing cell. Integral numbers print without a fractional part.
    pub fn text(&self) -> String {
        match &self.v {
            Value::Null | Value::Bool(false) => String::new(),
            Value::Bool(true) => "true".to_string(),
            Value::String(s) => s.clone(),
            Value::Number(n) => match n.as_f64() {
                Some(f) if f == 0.0 || f.is_nan() => String::new(),
                // f64 Display drops a zero fraction: 12.0 -> "12"
                Some(f) => f.to_string(),
                None => n.to_string(),
            },
            other => other.to_string(),
        }
    }
}

/// Legacy worksheet feed (`/feeds/worksheets/<id>/public/basic?alt=json`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetFeed {
    pub feed: Option<Feed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feed {
    #[serde(default)]
    pub entry: Vec<FeedEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: FeedText,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedText {
    #[serde(rename = "$t")]
    pub text: String,
}

impl WorksheetFeed {
    /// Name of the first listed worksheet
    pub fn first_sheet_name(&self) -> Option<&str> {
        self.feed
            .as_ref()
            .and_then(|feed| feed.entry.first())
            .map(|entry| entry.title.text.as_str())
    }
}
