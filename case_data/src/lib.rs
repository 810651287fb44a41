//! # Case Data
//!
//! `case_data` provides the validated daily case-series types shared by the
//! viral-insights workspace, plus loaders for the two formats the data
//! arrives in:
//!
//! - CSV files with a `date,confirmed,deaths,recovered,active` header
//! - JSON dumps in the covid19api `total/dayone` record format
//!
//! Loaders sort observations by date; strict date ordering beyond that is
//! the concern of the consumer (the forecaster rejects duplicate dates).
//!
//! ## Usage Example
//!
//! ```
//! use case_data::{CaseSeries, Observation};
//! use chrono::NaiveDate;
//!
//! let day = |d: u32| NaiveDate::from_ymd_opt(2023, 3, d).unwrap();
//! let series = CaseSeries::new(vec![
//!     Observation::new(day(1), 100, 2, 10, 88),
//!     Observation::new(day(2), 150, 3, 12, 135),
//! ])
//! .unwrap();
//!
//! assert_eq!(series.len(), 2);
//! assert_eq!(series.last().confirmed, 150);
//! ```

pub mod error;
pub mod loader;
pub mod series;

// Re-export commonly used types
pub use crate::error::DataError;
pub use crate::loader::{from_api_records, load_csv, load_json, ApiCaseRecord};
pub use crate::series::{CaseSeries, Observation};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
