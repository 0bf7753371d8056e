use strsim::levenshtein;

/// Case-insensitive edit distance between two strings
///
/// Unit-cost insertions, deletions and substitutions over Unicode scalar
/// values, computed on the lowercased inputs.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

/// Percentage similarity derived from [`edit_distance`]
///
/// `round((L - D) / L * 100)` where `L` is the longer length in chars.
/// Two empty strings are identical (100).
pub fn similarity(a: &str, b: &str) -> u8 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();

    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 100;
    }

    let distance = levenshtein(&a, &b);
    let ratio = (longest - distance) as f64 / longest as f64;
    (ratio * 100.0).round() as u8
}

/// Strategy for calculating similarity between two strings
///
/// This trait enables different similarity algorithms to be used interchangeably,
/// making the matcher testable and extensible.
pub trait SimilarityStrategy: Send + Sync {
    /// Calculate similarity between query and target
    ///
    /// Returns a value between 0 (completely different) and 100 (identical)
    fn calculate(&self, query: &str, target: &str) -> u8;

    /// Get the name of this strategy for logging/debugging
    fn name(&self) -> &'static str;
}

/// Edit-distance similarity strategy
///
/// Good for detecting typos and character-level differences.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinStrategy;

impl SimilarityStrategy for LevenshteinStrategy {
    fn calculate(&self, query: &str, target: &str) -> u8 {
        similarity(query, target)
    }

    fn name(&self) -> &'static str {
        "Levenshtein"
    }
}
