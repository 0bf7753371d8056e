pub mod application;
pub mod commands;
pub mod domain;

// Re-exports for easy access
pub use application::CatalogController;
pub use commands::{execute, render_results, Command, CommandReply};
pub use domain::{ActivityLine, ActivityLog, DebugSnapshot, SystemStatus};
