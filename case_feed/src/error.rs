//! Error types for the case_feed crate

use thiserror::Error;

/// Errors that can occur while fetching or decoding feed data
#[derive(Debug, Error)]
pub enum FeedError {
    /// Error from the HTTP transport
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error decoding a response payload
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// Error building a series from decoded records
    #[error("data error: {0}")]
    Data(#[from] case_data::DataError),

    /// Non-success HTTP status
    #[error("unexpected status {code} from {url}")]
    Status { code: u16, url: String },

    /// The news API key environment variable is not set
    #[error("news API key not configured: set the NEWS_API_KEY environment variable")]
    MissingApiKey,
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, FeedError>;
