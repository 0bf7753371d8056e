//! A single named entry of the menu catalog

use serde::{Deserialize, Serialize};

/// Title plus free-text body, as read from the first two spreadsheet columns
///
/// The title is always non-empty and trimmed; the body may be empty. Entries
/// that would violate this are rejected at construction, including when they
/// are deserialized from the local cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalogEntry")]
pub struct CatalogEntry {
    title: String,
    info: String,
}

impl CatalogEntry {
    /// Build an entry from untrimmed cell text, returning `None` when the title is blank
    pub fn new(title: impl AsRef<str>, info: impl AsRef<str>) -> Option<Self> {
        let title = title.as_ref().trim();
        if title.is_empty() {
            return None;
        }

        Some(Self {
            title: title.to_string(),
            info: info.as_ref().trim().to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn info(&self) -> &str {
        &self.info
    }
}

/// Wire shape used when reading entries back from storage
#[derive(Deserialize)]
struct RawCatalogEntry {
    title: String,
    #[serde(default)]
    info: String,
}

impl TryFrom<RawCatalogEntry> for CatalogEntry {
    type Error = String;

    fn try_from(raw: RawCatalogEntry) -> Result<Self, Self::Error> {
        CatalogEntry::new(&raw.title, &raw.info)
            .ok_or_else(|| "catalog entry title cannot be empty".to_string())
    }
}
