//! Line commands of the terminal front end
//!
//! Plain text is a search query; lines starting with `:` are commands.

use super::application::CatalogController;
use crate::modules::search::MatchedEntry;
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Rank the catalog; an empty query lists everything
    Search(String),
    /// Open the detail of the 1-based result number
    Open(usize),
    Copy,
    Close,
    Reload,
    Debug,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> AppResult<Self> {
        let line = line.trim();
        let Some(rest) = line.strip_prefix(':') else {
            return Ok(Command::Search(line.to_string()));
        };

        let mut parts = rest.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();

        match name.as_str() {
            "open" | "o" => {
                let raw = parts
                    .next()
                    .ok_or_else(|| AppError::InvalidInput("usage: :open <number>".to_string()))?;
                let number: usize = raw.parse().map_err(|_| {
                    AppError::InvalidInput(format!("'{}' is not a result number", raw))
                })?;
                if number == 0 {
                    return Err(AppError::InvalidInput(
                        "result numbers start at 1".to_string(),
                    ));
                }
                Ok(Command::Open(number))
            }
            "copy" | "c" => Ok(Command::Copy),
            "close" => Ok(Command::Close),
            "reload" | "r" => Ok(Command::Reload),
            "debug" | "d" => Ok(Command::Debug),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            other => Err(AppError::InvalidInput(format!("unknown command ':{}'", other))),
        }
    }
}

/// What the front end should print after a command
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CommandReply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl CommandReply {
    fn lines(lines: Vec<String>) -> Self {
        Self { lines, quit: false }
    }
}

pub async fn execute(controller: &CatalogController, command: Command) -> AppResult<CommandReply> {
    log_debug!("Executing command: {:?}", command);

    match command {
        Command::Search(query) => {
            let handle = controller.schedule_query(query);
            if !handle.await.unwrap_or(false) {
                return Ok(CommandReply::default());
            }
            Ok(CommandReply::lines(render_results(&controller.results().await)))
        }
        Command::Open(number) => {
            let entry = controller.open_detail(number - 1).await.ok_or_else(|| {
                AppError::NotFound(format!("no result #{} in the current list", number))
            })?;
            Ok(CommandReply::lines(vec![
                format!("== {} ==", entry.title()),
                entry.info().to_string(),
            ]))
        }
        Command::Copy => {
            let text = controller
                .copy_detail()
                .await
                .ok_or_else(|| AppError::InvalidInput("no detail is open".to_string()))?;
            Ok(CommandReply::lines(vec![text]))
        }
        Command::Close => {
            controller.close_detail().await;
            Ok(CommandReply::default())
        }
        Command::Reload => {
            let outcome = controller.load().await;
            log_info!("Reloaded {} entries from {}", outcome.len(), outcome.source_label);
            let mut lines = vec![controller.status().await.to_string()];
            lines.extend(render_results(&controller.results().await));
            Ok(CommandReply::lines(lines))
        }
        Command::Debug => {
            let snapshot = controller.debug_snapshot().await;
            Ok(CommandReply::lines(
                snapshot.to_string().lines().map(str::to_string).collect(),
            ))
        }
        Command::Quit => Ok(CommandReply {
            lines: Vec::new(),
            quit: true,
        }),
    }
}

/// One numbered line per result, badge and score when ranked
pub fn render_results(results: &[MatchedEntry]) -> Vec<String> {
    if results.is_empty() {
        return vec!["(no results)".to_string()];
    }

    results
        .iter()
        .enumerate()
        .map(|(i, result)| match result.match_type() {
            Some(_) => format!(
                "{:>3}. {} [{} {}]",
                i + 1,
                result.title(),
                result.badge(),
                result.match_score()
            ),
            None => format!("{:>3}. {} [MENU #{}]", i + 1, result.title(), i + 1),
        })
        .collect()
}
