use serde::{Deserialize, Serialize};
use std::fmt;

/// How a query matched a single text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchKind {
    None,
    Exact,
    Prefix,
    Fuzzy,
    Contains,
}

impl MatchKind {
    /// The positive match type, or `None` for a non-match
    pub fn as_match_type(self) -> Option<MatchType> {
        match self {
            MatchKind::None => None,
            MatchKind::Exact => Some(MatchType::Exact),
            MatchKind::Prefix => Some(MatchType::Prefix),
            MatchKind::Fuzzy => Some(MatchType::Fuzzy),
            MatchKind::Contains => Some(MatchType::Contains),
        }
    }
}

/// Match type attached to a ranked entry; a ranked entry always matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchType {
    Exact,
    Prefix,
    Fuzzy,
    Contains,
}

impl MatchType {
    /// Upper-case label shown on result cards
    pub fn label(self) -> &'static str {
        match self {
            MatchType::Exact => "EXACT",
            MatchType::Prefix => "PREFIX",
            MatchType::Fuzzy => "FUZZY",
            MatchType::Contains => "CONTAINS",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of comparing one query against one text field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: bool,
    /// 0..=100
    pub score: u8,
    pub kind: MatchKind,
}

impl MatchResult {
    pub const fn no_match() -> Self {
        Self {
            matched: false,
            score: 0,
            kind: MatchKind::None,
        }
    }

    pub const fn exact() -> Self {
        Self {
            matched: true,
            score: 100,
            kind: MatchKind::Exact,
        }
    }

    pub fn new(score: u8, kind: MatchKind) -> Self {
        Self {
            matched: kind != MatchKind::None,
            score: score.min(100),
            kind,
        }
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::no_match()
    }
}
