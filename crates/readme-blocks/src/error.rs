//! Error types for readme-blocks

/// Result type for readme-blocks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in region operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Region not found: {name}")]
    RegionNotFound { name: String },
}
