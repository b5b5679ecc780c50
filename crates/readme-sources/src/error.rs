//! Error types for readme-sources

/// Result type for data-source operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while fetching or decoding source data
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// HTTP transport or status error
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed RSS/Atom feed
    #[error("Failed to parse feed: {0}")]
    Feed(#[from] feed_rs::parser::ParseFeedError),

    /// Malformed JSON payload
    #[error("Failed to decode JSON response: {0}")]
    Json(#[from] serde_json::Error),

    /// GraphQL-level errors returned alongside (or instead of) data
    #[error("GraphQL query failed: {message}")]
    Graphql { message: String },

    /// The configured Yuque knowledge base does not exist
    #[error("Knowledge base not found: {name}")]
    RepoNotFound { name: String },
}
