pub mod retrieval_outcome;

pub use retrieval_outcome::{RetrievalOutcome, StrategyKind};
