use crate::modules::source::domain::entities::{RetrievalOutcome, StrategyKind};
use crate::modules::source::domain::errors::{RetrievalError, RetrievalResult};
use crate::modules::source::domain::strategies::CatalogStrategy;
use crate::modules::source::infrastructure::gviz::{SheetView, SheetsClient};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Which remote view a [`RemoteSheetStrategy`] reads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteTarget {
    /// `gid=0`
    DefaultView,
    /// A configured sheet name
    Named(String),
    /// The first sheet listed by the worksheet feed
    Discovered,
}

/// Methods 1 to 3: fetch the catalog from the published spreadsheet
pub struct RemoteSheetStrategy {
    client: Arc<SheetsClient>,
    target: RemoteTarget,
}

impl RemoteSheetStrategy {
    pub fn new(client: Arc<SheetsClient>, target: RemoteTarget) -> Self {
        Self { client, target }
    }

    pub fn default_view(client: Arc<SheetsClient>) -> Self {
        Self::new(client, RemoteTarget::DefaultView)
    }

    pub fn named(client: Arc<SheetsClient>, sheet_name: impl Into<String>) -> Self {
        Self::new(client, RemoteTarget::Named(sheet_name.into()))
    }

    pub fn discovered(client: Arc<SheetsClient>) -> Self {
        Self::new(client, RemoteTarget::Discovered)
    }

    async fn resolve_view(&self) -> RetrievalResult<SheetView> {
        match &self.target {
            RemoteTarget::DefaultView => Ok(SheetView::Default),
            RemoteTarget::Named(name) => Ok(SheetView::Named(name.clone())),
            RemoteTarget::Discovered => {
                let name = self.client.discover_first_sheet().await?;
                debug!("Worksheet feed lists '{}' first", name);
                Ok(SheetView::Named(name))
            }
        }
    }
}

#[async_trait]
impl CatalogStrategy for RemoteSheetStrategy {
    fn kind(&self) -> StrategyKind {
        match self.target {
            RemoteTarget::DefaultView => StrategyKind::DefaultView,
            RemoteTarget::Named(_) => StrategyKind::NamedSheet,
            RemoteTarget::Discovered => StrategyKind::DiscoveredSheet,
        }
    }

    async fn attempt(&self) -> RetrievalResult<RetrievalOutcome> {
        let view = self.resolve_view().await?;
        let entries = self.client.fetch_sheet(&view).await?;

        let label = match &view {
            SheetView::Default => "database".to_string(),
            SheetView::Named(name) => format!("{} sheet", name),
        };

        if entries.is_empty() {
            return Err(RetrievalError::empty(label));
        }

        Ok(RetrievalOutcome::fresh(entries, self.kind(), label))
    }
}
