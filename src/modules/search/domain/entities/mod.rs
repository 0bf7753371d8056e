pub mod matched_entry;

pub use matched_entry::{MatchAnnotation, MatchedEntry};
