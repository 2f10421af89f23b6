use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for gfl operations
#[derive(Error, Debug)]
pub enum GflError {
    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Unsupported increment kind: '{0}' (must be 'major', 'minor' or 'patch')")]
    UnsupportedIncrementKind(String),

    #[error("Failed to parse config file '{path}': {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown branch kind: '{0}' (must be 'feature', 'fix' or 'hotfix')")]
    UnknownBranchKind(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in gfl
pub type Result<T> = std::result::Result<T, GflError>;

impl GflError {
    /// Create an invalid-version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        GflError::InvalidVersionFormat(msg.into())
    }

    /// Create a config parse error for a given source file
    pub fn config_parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        GflError::ConfigParse {
            path: path.into(),
            message: message.into(),
        }
    }
}
