//! Error types for readme-cli

use std::path::PathBuf;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from readme-blocks
    #[error(transparent)]
    Blocks(#[from] readme_blocks::Error),

    /// Error from readme-sources
    #[error(transparent)]
    Sources(#[from] readme_sources::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed configuration file
    #[error("Failed to parse config {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Advisory lock could not be acquired during the atomic write
    #[error("Failed to lock {path}")]
    LockFailed { path: PathBuf },

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
