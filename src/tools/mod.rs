/// Result export tools
///
/// Utilities for handing separation results to downstream consumers
/// (spreadsheets, pipelines) as CSV or JSON files.

pub mod export;

pub use export::{export_to_csv, export_to_json, ExportOptions};

use thiserror::Error;

/// Export errors
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

pub type ToolResult<T> = Result<T, ToolError>;
