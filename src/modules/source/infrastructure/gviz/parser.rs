//! Parsing of gviz query responses into catalog entries
//!
//! A gviz JSON response is not plain JSON: the object is wrapped in a
//! JavaScript call, `/*O_o*/\ngoogle.visualization.Query.setResponse(` ... `);`.
//! The object is cut out of that envelope, then the first two cells of
//! every row become an entry's title and info.

use super::dto::GvizResponse;
use crate::modules::catalog::CatalogEntry;
use crate::modules::source::domain::errors::{RetrievalError, RetrievalResult};
use regex::Regex;
use std::sync::OnceLock;

pub const RESPONSE_MARKER: &str = "google.visualization.Query.setResponse";

fn envelope() -> &'static Regex {
    static ENVELOPE: OnceLock<Regex> = OnceLock::new();
    ENVELOPE.get_or_init(|| {
        Regex::new(r"(?s)google\.visualization\.Query\.setResponse\((\{.*\})\);?\s*$")
            .expect("envelope pattern is valid")
    })
}

/// Cut the JSON object out of a gviz response body
pub fn extract_payload(body: &str) -> RetrievalResult<&str> {
    if !body.contains(RESPONSE_MARKER) {
        return Err(RetrievalError::parse(
            "response is missing the gviz setResponse envelope",
        ));
    }

    envelope()
        .captures(body)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| RetrievalError::parse("gviz envelope does not wrap a JSON object"))
}

/// Parse a gviz response body into catalog entries
///
/// Rows with a blank title are dropped. An empty result is not an error here;
/// strategies decide what an empty sheet means.
pub fn parse_catalog(body: &str) -> RetrievalResult<Vec<CatalogEntry>> {
    let payload = extract_payload(body)?;
    let response: GvizResponse = serde_json::from_str(payload)?;

    if response.status.as_deref() == Some("error") {
        let reason = response
            .errors
            .first()
            .map(|e| e.describe())
            .unwrap_or_else(|| "gviz reported an error".to_string());
        return Err(RetrievalError::parse(reason));
    }

    let table = response
        .table
        .ok_or_else(|| RetrievalError::parse("gviz response has no table"))?;

    Ok(table
        .rows
        .iter()
        .filter_map(|row| CatalogEntry::new(row.cell_text(0), row.cell_text(1)))
        .collect())
}
