pub mod modules;
pub mod shared;

use modules::controller::{execute, render_results, CatalogController, Command};
use modules::search::{CatalogRanker, QueryMatcher, SearchConfig};
use modules::source::{CatalogSource, FileStore, KeyValueStore};
use shared::{utils::init_logger, AppConfig};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "Type to search. Commands: :open N, :copy, :close, :reload, :debug, :quit";

/// Build the controller for a configuration, backed by the on-disk cache
pub fn build_controller(config: &AppConfig) -> shared::AppResult<CatalogController> {
    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.cache_path.clone()));
    let source = CatalogSource::from_config(config, store)?;
    let ranker = CatalogRanker::new(QueryMatcher::new(SearchConfig::default()));

    Ok(CatalogController::new(source, ranker, config.debounce))
}

/// Terminal front end: load the catalog, then serve line commands from stdin
pub async fn run() -> anyhow::Result<()> {
    init_logger();

    let config = AppConfig::from_env()?;
    log_info!(
        "Starting with sheet {} (cache at {})",
        config.sheet_id,
        config.cache_path.display()
    );

    let controller = build_controller(&config)?;
    controller.load().await;

    println!("{}", controller.status().await);
    for line in render_results(&controller.results().await) {
        println!("{}", line);
    }
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };

        match execute(&controller, command).await {
            Ok(reply) => {
                for line in &reply.lines {
                    println!("{}", line);
                }
                if reply.quit {
                    break;
                }
            }
            Err(e) => eprintln!("{}", e),
        }
    }

    log_info!("Shutting down");
    Ok(())
}
