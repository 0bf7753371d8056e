pub mod catalog_ranker;
pub mod config;
pub mod query_matcher;
pub mod similarity_strategy;

// Primary exports
pub use catalog_ranker::CatalogRanker;
pub use config::{SearchConfig, SearchConfigBuilder};
pub use query_matcher::QueryMatcher;
pub use similarity_strategy::{edit_distance, similarity, LevenshteinStrategy, SimilarityStrategy};
