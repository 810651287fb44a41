//! The historical-pairs pass: per-segment daily growth rates

use crate::error::{ForecastError, Result};
use case_data::CaseSeries;
use chrono::NaiveDate;

/// The daily growth rate between one pair of adjacent observations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRate {
    /// Date of the earlier observation
    pub start: NaiveDate,
    /// Confirmed count at the earlier observation
    pub start_count: u64,
    /// Whole calendar days covered by the segment, always >= 1
    pub days: i64,
    /// Average per-day change in confirmed count; negative when counts
    /// were revised downward
    pub daily_rate: f64,
}

/// Outcome of the historical-pairs pass
///
/// The extrapolation rate is an explicit field of this result, not a
/// leftover loop variable, so a series too short to produce one fails at
/// construction instead of extrapolating from an undefined rate.
#[derive(Debug, Clone)]
pub struct RatePass {
    segments: Vec<SegmentRate>,
    last_daily_rate: f64,
}

impl RatePass {
    /// Compute segment rates for every adjacent pair of observations
    ///
    /// Fails with [`ForecastError::InsufficientHistory`] when fewer than
    /// two observations exist and [`ForecastError::NonMonotonicDates`]
    /// when any pair of neighbours does not strictly ascend by date.
    pub fn compute(series: &CaseSeries) -> Result<Self> {
        let observations = series.observations();
        if observations.len() < 2 {
            return Err(ForecastError::InsufficientHistory {
                observations: observations.len(),
            });
        }

        let mut segments = Vec::with_capacity(observations.len() - 1);
        for pair in observations.windows(2) {
            let days = (pair[1].date - pair[0].date).num_days();
            if days <= 0 {
                return Err(ForecastError::NonMonotonicDates {
                    prev: pair[0].date,
                    next: pair[1].date,
                });
            }

            let daily_rate = (pair[1].confirmed as f64 - pair[0].confirmed as f64) / days as f64;
            segments.push(SegmentRate {
                start: pair[0].date,
                start_count: pair[0].confirmed,
                days,
                daily_rate,
            });
        }

        let last_daily_rate = segments[segments.len() - 1].daily_rate;
        Ok(Self {
            segments,
            last_daily_rate,
        })
    }

    /// Segment rates in date order
    pub fn segments(&self) -> &[SegmentRate] {
        &self.segments
    }

    /// The per-day rate of the final historical segment, regardless of
    /// how many days that segment spans
    pub fn last_daily_rate(&self) -> f64 {
        self.last_daily_rate
    }
}
