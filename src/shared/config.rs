use crate::shared::errors::{AppError, AppResult};
use std::path::PathBuf;
use std::time::Duration;

/// Public spreadsheet the menu catalog is published from
pub const DEFAULT_SHEET_ID: &str = "1k5U_YwloyQsad7PT_DmXobkNycJ6bsV0zhE00TLmSIg";
pub const DEFAULT_SHEET_NAME: &str = "REPORTAN";
pub const DEFAULT_DOCS_BASE_URL: &str = "https://docs.google.com";
pub const DEFAULT_FEEDS_BASE_URL: &str = "https://spreadsheets.google.com";

const CACHE_FILE_NAME: &str = "cache.json";
const FALLBACK_CACHE_PATH: &str = ".cybersearch-cache.json";

/// Runtime configuration, read from the environment (and `.env` when present)
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Opaque key identifying the remote spreadsheet
    pub sheet_id: String,
    /// Named view tried when the default view yields nothing
    pub sheet_name: String,
    /// Host serving the gviz query endpoint
    pub docs_base_url: String,
    /// Host serving the worksheet discovery feed
    pub feeds_base_url: String,
    /// File backing the local key/value store
    pub cache_path: PathBuf,
    pub http_timeout: Duration,
    /// Quiescence interval before a query edit is ranked
    pub debounce: Duration,
}

impl AppConfig {
    /// Load configuration from process environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let http_timeout_secs = match non_empty("CYBERSEARCH_HTTP_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("CYBERSEARCH_HTTP_TIMEOUT_SECS '{}': {}", raw, e))
            })?,
            None => 30,
        };

        let debounce_ms = match non_empty("CYBERSEARCH_DEBOUNCE_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                AppError::ConfigError(format!("CYBERSEARCH_DEBOUNCE_MS '{}': {}", raw, e))
            })?,
            None => 300,
        };

        let config = Self {
            sheet_id: non_empty("CYBERSEARCH_SHEET_ID")
                .unwrap_or_else(|| DEFAULT_SHEET_ID.to_string()),
            sheet_name: non_empty("CYBERSEARCH_SHEET_NAME")
                .unwrap_or_else(|| DEFAULT_SHEET_NAME.to_string()),
            docs_base_url: non_empty("CYBERSEARCH_DOCS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_DOCS_BASE_URL.to_string()),
            feeds_base_url: non_empty("CYBERSEARCH_FEEDS_BASE_URL")
                .unwrap_or_else(|| DEFAULT_FEEDS_BASE_URL.to_string()),
            cache_path: non_empty("CYBERSEARCH_CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(Self::default_cache_path),
            http_timeout: Duration::from_secs(http_timeout_secs),
            debounce: Duration::from_millis(debounce_ms),
        };

        config.validate()?;
        Ok(config)
    }

    fn default_cache_path() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join("cybersearch").join(CACHE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_CACHE_PATH))
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.sheet_id.trim().is_empty() {
            return Err(AppError::ConfigError("sheet id cannot be empty".to_string()));
        }

        for (name, url) in [
            ("docs base url", &self.docs_base_url),
            ("feeds base url", &self.feeds_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::ConfigError(format!(
                    "{} must be an http(s) url, got '{}'",
                    name, url
                )));
            }
        }

        if self.http_timeout.is_zero() {
            return Err(AppError::ConfigError(
                "http timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            docs_base_url: DEFAULT_DOCS_BASE_URL.to_string(),
            feeds_base_url: DEFAULT_FEEDS_BASE_URL.to_string(),
            cache_path: Self::default_cache_path(),
            http_timeout: Duration::from_secs(30),
            debounce: Duration::from_millis(300),
        }
    }
}
