//! Error types for configuration and host-side work (parsing, I/O).
//!
//! Analysis of a parsed file never fails; these only surface before a file is
//! analyzed or while reading it.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LintError {
    /// A rule option failed validation.
    #[error("invalid options for rule '{rule}': {reason}")]
    Config { rule: String, reason: String },

    #[error("unknown rule '{0}'")]
    UnknownRule(String),

    #[error("invalid ignorePath pattern '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// The host parser rejected the file.
    #[error("failed to parse {}: {}", .path.display(), .message)]
    Parse { path: PathBuf, message: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = LintError> = std::result::Result<T, E>;
