//! Error types for tier list ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing the sheet or moving record files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Document Errors ===
    /// The document has no element matching the data table selector.
    #[error("data table not found (selector `{selector}`)")]
    TableNotFound { selector: String },

    /// The configured table selector is not valid CSS.
    #[error("invalid table selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    /// Column layout rejected before extraction.
    #[error("invalid column layout: {0}")]
    InvalidLayout(#[from] tier_model::ModelError),

    // === File Errors ===
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Record file is not a JSON array of records.
    #[error("invalid record file {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IngestError {
    /// True for the one failure callers are expected to recover from.
    pub fn is_table_not_found(&self) -> bool {
        matches!(self, Self::TableNotFound { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
