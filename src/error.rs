use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the analyzer library.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("No tags selected. Select tags first.")]
    EmptySelection,

    #[error("Data folder not found: {}", .0.display())]
    DataDirMissing(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to list data folder: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;

/// Reasons a single CSV row is rejected during ingestion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RowError {
    #[error("Expected at least {expected} fields, got {actual}")]
    TooFewFields { expected: usize, actual: usize },

    #[error("Invalid number for field '{field}': '{value}'")]
    InvalidNumber { field: &'static str, value: String },
}
