//! # Case Forecast
//!
//! `case_forecast` extends a historical daily case series into the future
//! using piecewise linear growth rates.
//!
//! The model computes the average day-over-day change between each pair of
//! adjacent observations, fills the forecast window wherever a historical
//! segment overlaps it, and extrapolates the final segment's rate out to
//! the horizon. Window dates no fill pass reaches stay unresolved and are
//! surfaced on the result rather than zero-filled, so display layers can
//! render gaps honestly.
//!
//! ## Quick Start
//!
//! ```
//! use case_data::{CaseSeries, Observation};
//! use case_forecast::LinearRateForecaster;
//! use chrono::NaiveDate;
//!
//! let day = |d: u32| NaiveDate::from_ymd_opt(2023, 3, d).unwrap();
//! let series = CaseSeries::new(vec![
//!     Observation::new(day(1), 100, 2, 10, 88),
//!     Observation::new(day(2), 150, 3, 12, 135),
//!     Observation::new(day(3), 180, 4, 15, 161),
//! ])
//! .unwrap();
//!
//! let forecast = LinearRateForecaster::new().forecast(&series, 2).unwrap();
//!
//! // horizon + 1 points, anchored at the last observed date
//! assert_eq!(forecast.points().len(), 3);
//! assert_eq!(forecast.terminal().predicted, Some(240));
//! ```

pub mod error;
pub mod forecast;
pub mod rate;

// Re-export commonly used types
pub use crate::error::ForecastError;
pub use crate::forecast::{
    forecast, Forecast, ForecastPoint, LinearRateForecaster, DEFAULT_HORIZON, MAX_HORIZON,
};
pub use crate::rate::{RatePass, SegmentRate};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
