//! Forward extension of a case series by linear-rate extrapolation

use crate::error::{ForecastError, Result};
use crate::rate::RatePass;
use case_data::CaseSeries;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp;

/// Number of future days predicted when the caller does not choose one
pub const DEFAULT_HORIZON: u32 = 30;

/// Upper bound on the horizon; keeps the window allocation bounded when
/// the horizon comes from untrusted input
pub const MAX_HORIZON: u32 = 3650;

/// One predicted day
///
/// `predicted` is `None` for window dates no fill pass reached; display
/// layers render those as blanks, never as zeros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Calendar date of the prediction
    pub date: NaiveDate,
    /// Predicted confirmed count, rounded half away from zero
    pub predicted: Option<i64>,
}

/// The result of a forecast run
///
/// Points are consecutive calendar days in ascending order: `horizon + 1`
/// of them, anchored at the last observed date and running through
/// `horizon` days after it. The terminal point is always resolved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    points: Vec<ForecastPoint>,
    horizon: u32,
    last_daily_rate: f64,
}

impl Forecast {
    /// Predicted points in date order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// The horizon this forecast was run with
    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// The per-day rate of the final historical segment, used for the
    /// terminal extrapolation
    pub fn last_daily_rate(&self) -> f64 {
        self.last_daily_rate
    }

    /// The final predicted point, `horizon` days after the last
    /// observation; always resolved
    pub fn terminal(&self) -> &ForecastPoint {
        &self.points[self.points.len() - 1]
    }

    /// Window dates that no fill pass resolved
    ///
    /// A non-empty result is a warning, not a failure: the terminal value
    /// is still a clean extrapolation, but callers should show these
    /// dates as gaps instead of fabricating values for them.
    pub fn unresolved_dates(&self) -> Vec<NaiveDate> {
        self.points
            .iter()
            .filter(|point| point.predicted.is_none())
            .map(|point| point.date)
            .collect()
    }

    /// Whether every window date received a prediction
    pub fn is_complete(&self) -> bool {
        self.points.iter().all(|point| point.predicted.is_some())
    }
}

/// Piecewise linear-rate forecaster
///
/// Extends a historical series forward on the assumption that the most
/// recent observed daily growth rate is the best predictor of near-future
/// growth.
#[derive(Debug, Clone)]
pub struct LinearRateForecaster {
    max_horizon: u32,
}

impl Default for LinearRateForecaster {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearRateForecaster {
    /// Create a forecaster with the default horizon bound
    pub fn new() -> Self {
        Self {
            max_horizon: MAX_HORIZON,
        }
    }

    /// Create a forecaster with a custom horizon bound
    pub fn with_max_horizon(max_horizon: u32) -> Self {
        Self { max_horizon }
    }

    /// Forecast `horizon` days past the end of `series`
    ///
    /// The window holds `horizon + 1` consecutive dates anchored at the
    /// last observed date. Each historical segment fills the window slots
    /// it overlaps with its own linear rate; the terminal slot is then
    /// overwritten with `round(last_count + last_rate * horizon)` so the
    /// terminal prediction never accumulates intermediate rounding.
    /// Predictions round half away from zero.
    pub fn forecast(&self, series: &CaseSeries, horizon: u32) -> Result<Forecast> {
        if horizon == 0 || horizon > self.max_horizon {
            return Err(ForecastError::InvalidHorizon {
                horizon,
                max: self.max_horizon,
            });
        }

        let rates = RatePass::compute(series)?;

        let window_start = series.last().date;
        let slots = horizon as usize + 1;
        let mut predicted: Vec<Option<i64>> = vec![None; slots];

        // Window membership by index arithmetic: a segment starting
        // `base` days before the window touches slots `base + j` for the
        // j-range below, empty when the segment ends before the window.
        for segment in rates.segments() {
            let base = (segment.start - window_start).num_days();
            let lo = cmp::max(1, -base);
            let hi = cmp::min(segment.days, horizon as i64 - base);
            for j in lo..=hi {
                let value = segment.start_count as f64 + segment.daily_rate * j as f64;
                predicted[(base + j) as usize] = Some(round_count(value));
            }
        }

        let terminal =
            series.last().confirmed as f64 + rates.last_daily_rate() * f64::from(horizon);
        predicted[horizon as usize] = Some(round_count(terminal));

        let points = predicted
            .into_iter()
            .enumerate()
            .map(|(offset, value)| ForecastPoint {
                date: window_start + Duration::days(offset as i64),
                predicted: value,
            })
            .collect();

        Ok(Forecast {
            points,
            horizon,
            last_daily_rate: rates.last_daily_rate(),
        })
    }
}

/// Forecast with the default forecaster configuration
pub fn forecast(series: &CaseSeries, horizon: u32) -> Result<Forecast> {
    LinearRateForecaster::new().forecast(series, horizon)
}

fn round_count(value: f64) -> i64 {
    value.round() as i64
}
