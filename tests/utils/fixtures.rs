/// Fixtures for tests that stand in for the published spreadsheet
use cybersearch_lib::modules::catalog::CatalogEntry;
use cybersearch_lib::shared::AppConfig;
use std::path::Path;
use std::time::Duration;
use wiremock::MockServer;

pub const SHEET_ID: &str = "test-sheet";
pub const GVIZ_PATH: &str = "/spreadsheets/d/test-sheet/gviz/tq";
pub const FEED_PATH: &str = "/feeds/worksheets/test-sheet/public/basic";

/// Config pointing both hosts at the mock server
pub fn config_for(server: &MockServer, cache_path: &Path) -> AppConfig {
    AppConfig {
        sheet_id: SHEET_ID.to_string(),
        sheet_name: "REPORTAN".to_string(),
        docs_base_url: server.uri(),
        feeds_base_url: server.uri(),
        cache_path: cache_path.to_path_buf(),
        http_timeout: Duration::from_secs(5),
        debounce: Duration::from_millis(10),
    }
}

/// A gviz response body wrapping the given `(title, info)` rows
pub fn gviz_body(rows: &[(&str, &str)]) -> String {
    let rows: Vec<serde_json::Value> = rows
        .iter()
        .map(|(title, info)| serde_json::json!({"c": [{"v": title}, {"v": info}]}))
        .collect();
    let payload = serde_json::json!({
        "version": "0.6",
        "status": "ok",
        "table": {"cols": [], "rows": rows}
    });
    format!(
        "/*O_o*/\ngoogle.visualization.Query.setResponse({});",
        payload
    )
}

pub fn feed_body(sheet_names: &[&str]) -> String {
    let entries: Vec<serde_json::Value> = sheet_names
        .iter()
        .map(|name| serde_json::json!({"title": {"$t": name}}))
        .collect();
    serde_json::json!({"feed": {"entry": entries}}).to_string()
}

pub fn menu() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Nasi Goreng", "Nasi goreng spesial dengan telur"),
        ("Mie Ayam", "Mie dengan ayam kecap"),
        ("Nasi Uduk", "Nasi santan dengan lauk"),
        ("Es Teh Manis", "Minuman dingin"),
    ]
}

pub fn entries(rows: &[(&str, &str)]) -> Vec<CatalogEntry> {
    rows.iter()
        .filter_map(|(title, info)| CatalogEntry::new(title, info))
        .collect()
}
