use crate::modules::catalog::CatalogEntry;
use crate::modules::search::domain::value_objects::MatchType;
use serde::Serialize;

/// Query-scoped relevance data attached to a ranked entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchAnnotation {
    pub match_score: u8,
    pub match_type: MatchType,
}

/// A catalog entry as shown in a result list
///
/// Entries listed for an empty query carry no annotation. The wrapped entry
/// is a copy; the working catalog is never mutated by a ranking pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedEntry {
    #[serde(flatten)]
    pub entry: CatalogEntry,
    #[serde(flatten)]
    pub annotation: Option<MatchAnnotation>,
}

impl MatchedEntry {
    pub fn unranked(entry: CatalogEntry) -> Self {
        Self {
            entry,
            annotation: None,
        }
    }

    pub fn ranked(entry: CatalogEntry, match_score: u8, match_type: MatchType) -> Self {
        Self {
            entry,
            annotation: Some(MatchAnnotation {
                match_score,
                match_type,
            }),
        }
    }

    pub fn title(&self) -> &str {
        self.entry.title()
    }

    pub fn info(&self) -> &str {
        self.entry.info()
    }

    /// Score used for ordering; unranked entries count as 0
    pub fn match_score(&self) -> u8 {
        self.annotation.map(|a| a.match_score).unwrap_or(0)
    }

    pub fn match_type(&self) -> Option<MatchType> {
        self.annotation.map(|a| a.match_type)
    }

    /// Badge text for a result card; unranked entries show a generic badge
    pub fn badge(&self) -> &'static str {
        self.match_type().map(MatchType::label).unwrap_or("MATCH")
    }
}
