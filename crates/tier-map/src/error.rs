//! Error types for index export and matcher setup.

use thiserror::Error;

/// Errors from building a matcher or moving an index through JSON.
///
/// Matching itself never fails; a title that matches nothing is `None`.
#[derive(Debug, Error)]
pub enum MapError {
    /// A title rewrite pattern is not a valid regular expression.
    #[error("invalid title rewrite `{pattern}`: {message}")]
    InvalidRewrite { pattern: String, message: String },

    #[error("alias index JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MapError>;
