pub mod client;
pub mod dto;
pub mod parser;

pub use client::{SheetView, SheetsClient};
pub use parser::{parse_catalog, RESPONSE_MARKER};
