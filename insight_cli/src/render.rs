//! Terminal table and headline rendering

use case_data::CaseSeries;
use case_feed::Article;
use case_forecast::Forecast;
use chrono::NaiveDate;
use std::collections::HashMap;

const HEADER: &str = "date          confirmed    deaths  recovered      active   predicted";

fn row(
    date: NaiveDate,
    confirmed: &str,
    deaths: &str,
    recovered: &str,
    active: &str,
    predicted: &str,
) -> String {
    format!(
        "{:<12}{:>11}{:>10}{:>11}{:>12}{:>12}",
        date.format("%Y-%m-%d"),
        confirmed,
        deaths,
        recovered,
        active,
        predicted
    )
}

/// Render the trailing history plus the forecast window as a table
///
/// The forecast window is anchored at the last observed date, so that
/// date's prediction lands on its history row; unresolved predictions
/// render as blank cells.
pub fn render_table(series: &CaseSeries, forecast: &Forecast, tail: usize) -> String {
    let predictions: HashMap<NaiveDate, i64> = forecast
        .points()
        .iter()
        .filter_map(|point| point.predicted.map(|value| (point.date, value)))
        .collect();

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    let skip = series.len().saturating_sub(tail);
    let history = &series.observations()[skip..];
    for obs in history {
        let predicted = predictions
            .get(&obs.date)
            .map(|value| value.to_string())
            .unwrap_or_default();
        out.push_str(&row(
            obs.date,
            &obs.confirmed.to_string(),
            &obs.deaths.to_string(),
            &obs.recovered.to_string(),
            &obs.active.to_string(),
            &predicted,
        ));
        out.push('\n');
    }

    // The anchor point sits on the last history row when one is shown;
    // with no history rows it gets its own forecast row
    let future_start = usize::from(!history.is_empty());
    for point in forecast.points().iter().skip(future_start) {
        let predicted = point
            .predicted
            .map(|value| value.to_string())
            .unwrap_or_default();
        out.push_str(&row(point.date, "", "", "", "", &predicted));
        out.push('\n');
    }

    out
}

/// Render the note shown when some window dates stayed unresolved
pub fn render_gap_note(forecast: &Forecast) -> String {
    let dates: Vec<String> = forecast
        .unresolved_dates()
        .iter()
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect();
    format!(
        "note: no prediction for {} of {} window dates: {}",
        dates.len(),
        forecast.points().len(),
        dates.join(", ")
    )
}

/// Render fetched headlines, one per line with its link
pub fn render_headlines(articles: &[Article]) -> String {
    if articles.is_empty() {
        return "no headlines found\n".to_string();
    }

    let mut out = String::new();
    for article in articles {
        match &article.source {
            Some(source) => out.push_str(&format!("- {} ({})\n", article.title, source)),
            None => out.push_str(&format!("- {}\n", article.title)),
        }
        out.push_str(&format!("  {}\n", article.url));
    }
    out
}
