use super::dto::WorksheetFeed;
use super::parser::parse_catalog;
use crate::modules::catalog::CatalogEntry;
use crate::modules::source::domain::errors::{RetrievalError, RetrievalResult};
use crate::shared::config::AppConfig;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;
use reqwest::{Client, StatusCode};
use std::time::{Duration, Instant};

const USER_AGENT: &str = "CyberSearch/1.0";

/// Which view of the spreadsheet a gviz query addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetView {
    /// First tab, addressed as `gid=0`
    Default,
    /// Tab addressed by its visible name
    Named(String),
}

impl SheetView {
    pub fn label(&self) -> &str {
        match self {
            SheetView::Default => "gid=0",
            SheetView::Named(name) => name,
        }
    }
}

/// HTTP client for the public gviz query endpoint and the worksheet feed
#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    docs_base_url: String,
    feeds_base_url: String,
    sheet_id: String,
}

impl SheetsClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let client = Self::create_http_client(config.http_timeout)?;

        Ok(Self {
            client,
            docs_base_url: config.docs_base_url.trim_end_matches('/').to_string(),
            feeds_base_url: config.feeds_base_url.trim_end_matches('/').to_string(),
            sheet_id: config.sheet_id.clone(),
        })
    }

    fn create_http_client(timeout: Duration) -> AppResult<Client> {
        Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }

    pub fn sheet_url(&self, view: &SheetView) -> String {
        let base = format!(
            "{}/spreadsheets/d/{}/gviz/tq?tqx=out:json",
            self.docs_base_url, self.sheet_id
        );
        match view {
            SheetView::Default => format!("{}&gid=0", base),
            SheetView::Named(name) => format!("{}&sheet={}", base, urlencoding::encode(name)),
        }
    }

    pub fn worksheets_url(&self) -> String {
        format!(
            "{}/feeds/worksheets/{}/public/basic?alt=json",
            self.feeds_base_url, self.sheet_id
        )
    }

    /// Fetch and parse one view of the sheet
    pub async fn fetch_sheet(&self, view: &SheetView) -> RetrievalResult<Vec<CatalogEntry>> {
        let url = self.sheet_url(view);
        let body = self.get_text(&url, view.label()).await?;
        parse_catalog(&body)
    }

    /// Name of the first worksheet listed by the feed
    pub async fn discover_first_sheet(&self) -> RetrievalResult<String> {
        let url = self.worksheets_url();
        let body = self.get_text(&url, "worksheets").await?;
        let feed: WorksheetFeed = serde_json::from_str(&body)?;

        feed.first_sheet_name()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .ok_or_else(|| RetrievalError::parse("worksheet feed lists no sheets"))
    }

    async fn get_text(&self, url: &str, endpoint: &str) -> RetrievalResult<String> {
        LogContext::api_call("Sheets", endpoint, "request", None);
        let start = Instant::now();

        let response = self.client.get(url).send().await?;
        let status = response.status();
        LogContext::api_call(
            "Sheets",
            endpoint,
            status.as_str(),
            Some(start.elapsed().as_millis() as u64),
        );

        Self::handle_response_status(status)?;
        Ok(response.text().await?)
    }

    fn handle_response_status(status: StatusCode) -> RetrievalResult<()> {
        if status.is_success() {
            Ok(())
        } else {
            Err(RetrievalError::network(format!(
                "HTTP error! status: {}",
                status.as_u16()
            )))
        }
    }
}
