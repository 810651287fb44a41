//! Error types for the case_data crate

use thiserror::Error;

/// Errors that can occur while loading or validating case data
#[derive(Debug, Error)]
pub enum DataError {
    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from JSON parsing
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A series must contain at least one observation
    #[error("series contains no observations")]
    EmptySeries,
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, DataError>;
