use crate::modules::source::domain::entities::{RetrievalOutcome, StrategyKind};
use crate::modules::source::domain::errors::RetrievalResult;
use async_trait::async_trait;

/// One link of the retrieval chain
///
/// An attempt either yields a populated outcome or a strategy-local error;
/// the driver moves on to the next strategy on error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStrategy: Send + Sync {
    /// Which method of the chain this strategy implements
    fn kind(&self) -> StrategyKind;

    /// Attempt retrieval exactly once
    async fn attempt(&self) -> RetrievalResult<RetrievalOutcome>;
}
