// Shared kernel: configuration, errors and logging used by every module

pub mod config;
pub mod errors;
pub mod utils;

pub use config::AppConfig;
pub use errors::{AppError, AppResult};
