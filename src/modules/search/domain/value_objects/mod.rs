pub mod match_result;

pub use match_result::{MatchKind, MatchResult, MatchType};
