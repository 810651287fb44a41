//! Error types for the case_forecast crate

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur when computing a forecast
///
/// All of these are detected before any forecast output is constructed;
/// the caller decides how to surface them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForecastError {
    /// Fewer than two observations; no daily rate can be computed
    #[error("insufficient history: need at least 2 observations, got {observations}")]
    InsufficientHistory { observations: usize },

    /// Two adjacent observations whose dates do not strictly ascend
    #[error("non-monotonic observation dates: {next} does not follow {prev}")]
    NonMonotonicDates { prev: NaiveDate, next: NaiveDate },

    /// Horizon outside the accepted range
    #[error("invalid horizon {horizon}: must be between 1 and {max} days")]
    InvalidHorizon { horizon: u32, max: u32 },
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
