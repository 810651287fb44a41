use case_data::{CaseSeries, Observation};
use case_forecast::{forecast, ForecastError, LinearRateForecaster, MAX_HORIZON};
use chrono::{Duration, NaiveDate};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 3, d).unwrap()
}

/// Daily series with a constant increase per day
fn linear_series(start_count: u64, step: i64, days: usize) -> CaseSeries {
    let observations = (0..days)
        .map(|i| {
            let count = (start_count as i64 + step * i as i64) as u64;
            Observation::new(day(1) + Duration::days(i as i64), count, 0, 0, count as i64)
        })
        .collect();
    CaseSeries::new(observations).unwrap()
}

#[rstest]
#[case(1)]
#[case(7)]
#[case(30)]
fn window_shape_holds_for_any_horizon(#[case] horizon: u32) {
    let series = linear_series(100, 50, 10);
    let result = forecast(&series, horizon).unwrap();

    assert_eq!(result.points().len(), horizon as usize + 1);
    assert_eq!(result.points()[0].date, series.last().date);
    assert_eq!(
        result.terminal().date,
        series.last().date + Duration::days(i64::from(horizon))
    );

    // Consecutive days, ascending, no duplicates
    for pair in result.points().windows(2) {
        assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
    }
}

#[test]
fn terminal_is_a_clean_extrapolation_of_the_last_rate() {
    let series = linear_series(100, 50, 5);
    let result = forecast(&series, 30).unwrap();

    assert_eq!(result.last_daily_rate(), 50.0);
    // round(last_count + last_rate * horizon)
    assert_eq!(result.terminal().predicted, Some(300 + 50 * 30));
}

#[test]
fn spec_scenario_three_days_horizon_two() {
    let series = CaseSeries::new(vec![
        Observation::new(day(1), 100, 0, 0, 100),
        Observation::new(day(2), 150, 0, 0, 150),
        Observation::new(day(3), 180, 0, 0, 180),
    ])
    .unwrap();

    let result = forecast(&series, 2).unwrap();
    let points = result.points();

    // Window anchored at the last observed day
    assert_eq!(points[0].date, day(3));
    assert_eq!(points[0].predicted, Some(180));

    // The day between anchor and terminal is never reached by a fill pass
    assert_eq!(points[1].date, day(4));
    assert_eq!(points[1].predicted, None);

    // Terminal forced from the final segment's 30/day rate
    assert_eq!(points[2].date, day(5));
    assert_eq!(points[2].predicted, Some(240));

    assert!(!result.is_complete());
    assert_eq!(result.unresolved_dates(), vec![day(4)]);
}

#[test]
fn interior_window_dates_are_reported_not_zero_filled() {
    let series = linear_series(100, 10, 4);
    let result = forecast(&series, 5).unwrap();

    let unresolved = result.unresolved_dates();
    assert_eq!(unresolved.len(), 4);
    // Anchor and terminal always resolve
    assert!(result.points()[0].predicted.is_some());
    assert!(result.terminal().predicted.is_some());
    assert!(!unresolved.contains(&result.points()[0].date));
    assert!(!unresolved.contains(&result.terminal().date));
}

#[test]
fn sparse_sampling_uses_the_average_segment_rate() {
    // Final segment spans 5 days: rate (200 - 100) / 5 = 20/day
    let series = CaseSeries::new(vec![
        Observation::new(day(1), 100, 0, 0, 100),
        Observation::new(day(6), 200, 0, 0, 200),
    ])
    .unwrap();

    let result = forecast(&series, 3).unwrap();
    assert_eq!(result.last_daily_rate(), 20.0);
    assert_eq!(result.points()[0].predicted, Some(200));
    assert_eq!(result.terminal().predicted, Some(260));
}

#[test]
fn negative_growth_extrapolates_downward() {
    // Counts revised downward: rate stays negative, never clamped
    let series = CaseSeries::new(vec![
        Observation::new(day(1), 500, 0, 0, 500),
        Observation::new(day(2), 470, 0, 0, 470),
        Observation::new(day(3), 440, 0, 0, 440),
    ])
    .unwrap();

    let result = forecast(&series, 10).unwrap();
    assert_eq!(result.last_daily_rate(), -30.0);
    assert_eq!(result.terminal().predicted, Some(440 - 30 * 10));
    assert!(result.terminal().predicted < result.points()[0].predicted);
}

#[test]
fn single_observation_fails() {
    let series = CaseSeries::new(vec![Observation::new(day(1), 100, 0, 0, 100)]).unwrap();
    assert_eq!(
        forecast(&series, 30).unwrap_err(),
        ForecastError::InsufficientHistory { observations: 1 }
    );
}

#[test]
fn duplicate_dates_fail() {
    let series = CaseSeries::new(vec![
        Observation::new(day(1), 100, 0, 0, 100),
        Observation::new(day(1), 150, 0, 0, 150),
    ])
    .unwrap();
    assert_eq!(
        forecast(&series, 30).unwrap_err(),
        ForecastError::NonMonotonicDates {
            prev: day(1),
            next: day(1),
        }
    );
}

#[rstest]
#[case(0)]
#[case(MAX_HORIZON + 1)]
fn out_of_range_horizon_fails(#[case] horizon: u32) {
    let series = linear_series(100, 50, 5);
    assert_eq!(
        forecast(&series, horizon).unwrap_err(),
        ForecastError::InvalidHorizon {
            horizon,
            max: MAX_HORIZON,
        }
    );
}

#[test]
fn custom_horizon_bound_is_enforced() {
    let series = linear_series(100, 50, 5);
    let forecaster = LinearRateForecaster::with_max_horizon(7);

    assert!(forecaster.forecast(&series, 7).is_ok());
    assert_eq!(
        forecaster.forecast(&series, 8).unwrap_err(),
        ForecastError::InvalidHorizon { horizon: 8, max: 7 }
    );
}

#[test]
fn fatal_errors_win_over_horizon_order() {
    // Horizon is validated first; a bad horizon reports even on a series
    // that would also fail the history checks
    let series = CaseSeries::new(vec![Observation::new(day(1), 100, 0, 0, 100)]).unwrap();
    assert!(matches!(
        forecast(&series, 0).unwrap_err(),
        ForecastError::InvalidHorizon { .. }
    ));
}
