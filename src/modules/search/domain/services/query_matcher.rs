use super::config::SearchConfig;
use super::similarity_strategy::{LevenshteinStrategy, SimilarityStrategy};
use crate::modules::search::domain::value_objects::{MatchKind, MatchResult};
use std::sync::Arc;

/// Decides whether, and how well, a query matches a text field
///
/// Matching is case-insensitive. A substring hit anywhere in the text is an
/// exact match and wins outright; otherwise every whitespace-separated word is
/// scored by the prefix, fuzzy and contains tests and the best single score
/// across all words is kept.
#[derive(Clone)]
pub struct QueryMatcher {
    config: SearchConfig,
    strategy: Arc<dyn SimilarityStrategy>,
}

impl QueryMatcher {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_strategy(config, Arc::new(LevenshteinStrategy))
    }

    pub fn with_strategy(config: SearchConfig, strategy: Arc<dyn SimilarityStrategy>) -> Self {
        Self { config, strategy }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Match `query` against `text`
    ///
    /// Callers skip empty queries; an empty query is contained in every text
    /// and therefore reports an exact match.
    pub fn match_text(&self, query: &str, text: &str) -> MatchResult {
        let query = query.to_lowercase();
        let text = text.to_lowercase();

        if text.contains(&query) {
            return MatchResult::exact();
        }

        text.split_whitespace()
            .fold(MatchResult::no_match(), |best, word| {
                self.improve(best, &query, word)
            })
    }

    /// Best result for a single word, starting from no match
    pub fn score_word(&self, query: &str, word: &str) -> MatchResult {
        self.improve(MatchResult::no_match(), &query.to_lowercase(), &word.to_lowercase())
    }

    /// Run prefix, fuzzy and contains in that order; each replaces `best`
    /// only with a strictly greater score.
    fn improve(&self, mut best: MatchResult, query: &str, word: &str) -> MatchResult {
        let query_len = query.chars().count();
        let word_len = word.chars().count();

        if word.starts_with(query) {
            let score = scaled(query_len, word_len, self.config.prefix_weight);
            if score > best.score {
                best = MatchResult::new(score, MatchKind::Prefix);
            }
        }

        let similarity = self.strategy.calculate(query, word);
        if similarity >= self.config.fuzzy_threshold && similarity > best.score {
            best = MatchResult::new(similarity, MatchKind::Fuzzy);
        }

        if word.contains(query) {
            let score = scaled(query_len, word_len, self.config.contains_weight);
            if score > best.score {
                best = MatchResult::new(score, MatchKind::Contains);
            }
        }

        best
    }
}

impl Default for QueryMatcher {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl std::fmt::Debug for QueryMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryMatcher")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// `round(query_len / word_len * weight)`, saturating into 0..=100
fn scaled(query_len: usize, word_len: usize, weight: f64) -> u8 {
    if word_len == 0 {
        return 0;
    }
    let score = (query_len as f64 / word_len as f64 * weight).round();
    score.clamp(0.0, 100.0) as u8
}
