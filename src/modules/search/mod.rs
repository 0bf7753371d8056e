pub mod application;
pub mod domain;

// Re-exports for easy access
pub use application::QueryDebouncer;
pub use domain::entities::{MatchAnnotation, MatchedEntry};
pub use domain::services::{
    CatalogRanker, LevenshteinStrategy, QueryMatcher, SearchConfig, SearchConfigBuilder,
    SimilarityStrategy,
};
pub use domain::value_objects::{MatchKind, MatchResult, MatchType};
