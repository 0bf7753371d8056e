use super::query_matcher::QueryMatcher;
use crate::modules::catalog::CatalogEntry;
use crate::modules::search::domain::entities::MatchedEntry;
use tracing::debug;

/// Ranks a catalog against a query
///
/// Each entry is scored on its title and its info; the better of the two is
/// kept, with ties going to info. Non-matching entries are dropped and the
/// rest are ordered by score, highest first. The sort is stable so entries
/// with equal scores keep their catalog order.
#[derive(Debug, Clone, Default)]
pub struct CatalogRanker {
    matcher: QueryMatcher,
}

impl CatalogRanker {
    pub fn new(matcher: QueryMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &QueryMatcher {
        &self.matcher
    }

    pub fn rank(&self, catalog: &[CatalogEntry], query: &str) -> Vec<MatchedEntry> {
        let query = query.trim();

        if query.is_empty() {
            return catalog.iter().cloned().map(MatchedEntry::unranked).collect();
        }

        let mut results: Vec<MatchedEntry> = catalog
            .iter()
            .filter_map(|entry| {
                let title_match = self.matcher.match_text(query, entry.title());
                let info_match = self.matcher.match_text(query, entry.info());

                let best = if title_match.score > info_match.score {
                    title_match
                } else {
                    info_match
                };

                let match_type = best.kind.as_match_type().filter(|_| best.matched)?;
                Some(MatchedEntry::ranked(entry.clone(), best.score, match_type))
            })
            .collect();

        // `sort_by` is stable
        results.sort_by(|a, b| b.match_score().cmp(&a.match_score()));

        debug!(
            "Ranked {} of {} entries for query '{}'",
            results.len(),
            catalog.len(),
            query
        );

        results
    }
}
