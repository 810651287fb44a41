//! Daily case observation types

use crate::error::{DataError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One reported day of case statistics for a single country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Calendar date the statistics were reported for
    pub date: NaiveDate,
    /// Cumulative confirmed case count
    pub confirmed: u64,
    /// Cumulative death count
    pub deaths: u64,
    /// Cumulative recovered count
    pub recovered: u64,
    /// Currently active cases; can go negative in revised upstream data
    pub active: i64,
}

impl Observation {
    /// Create a new observation
    pub fn new(date: NaiveDate, confirmed: u64, deaths: u64, recovered: u64, active: i64) -> Self {
        Self {
            date,
            confirmed,
            deaths,
            recovered,
            active,
        }
    }
}

/// A non-empty, date-ordered sequence of observations
///
/// The series owns its observations; consumers read but never mutate them.
/// Construction rejects an empty vector. Dates are expected to ascend with
/// one observation per calendar day; loaders in this crate sort by date
/// before building the series, and the forecaster rejects any duplicate
/// dates that survive (it needs a positive day span between neighbours).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseSeries {
    observations: Vec<Observation>,
}

impl CaseSeries {
    /// Create a series from a vector of observations
    pub fn new(observations: Vec<Observation>) -> Result<Self> {
        if observations.is_empty() {
            return Err(DataError::EmptySeries);
        }

        Ok(Self { observations })
    }

    /// Number of observations in the series
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the series is empty; always false for a constructed series
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All observations in date order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// The earliest observation
    pub fn first(&self) -> &Observation {
        &self.observations[0]
    }

    /// The latest observation
    pub fn last(&self) -> &Observation {
        &self.observations[self.observations.len() - 1]
    }

    /// Confirmed counts in date order
    pub fn confirmed_counts(&self) -> Vec<u64> {
        self.observations.iter().map(|obs| obs.confirmed).collect()
    }

    /// Whole calendar days between the first and last observation
    pub fn span_days(&self) -> i64 {
        (self.last().date - self.first().date).num_days()
    }

    /// Whether every adjacent pair of observations is strictly ascending
    /// by date
    pub fn is_strictly_dated(&self) -> bool {
        self.observations
            .windows(2)
            .all(|pair| pair[0].date < pair[1].date)
    }
}
