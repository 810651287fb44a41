//! Loading case series from CSV files and covid19api JSON dumps

use crate::error::Result;
use crate::series::{CaseSeries, Observation};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    confirmed: u64,
    deaths: u64,
    recovered: u64,
    active: i64,
}

/// One record of the covid19api `total/dayone/country` response
///
/// The payload carries RFC-3339 timestamps; only the calendar date is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCaseRecord {
    #[serde(rename = "Confirmed")]
    pub confirmed: u64,
    #[serde(rename = "Deaths")]
    pub deaths: u64,
    #[serde(rename = "Recovered")]
    pub recovered: u64,
    #[serde(rename = "Active")]
    pub active: i64,
    #[serde(rename = "Date")]
    pub date: DateTime<Utc>,
}

/// Load a case series from a CSV file
///
/// The expected format is:
/// date,confirmed,deaths,recovered,active
/// 2023-03-01,100,2,10,88
///
/// Rows are sorted by date after parsing.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<CaseSeries> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut observations = Vec::new();
    for row in reader.deserialize() {
        let row: CsvRow = row?;
        observations.push(Observation::new(
            row.date,
            row.confirmed,
            row.deaths,
            row.recovered,
            row.active,
        ));
    }

    observations.sort_by_key(|obs| obs.date);
    CaseSeries::new(observations)
}

/// Load a case series from a JSON file holding an array of covid19api
/// records
pub fn load_json<P: AsRef<Path>>(path: P) -> Result<CaseSeries> {
    let file = File::open(path)?;
    let records: Vec<ApiCaseRecord> = serde_json::from_reader(file)?;
    from_api_records(records)
}

/// Build a case series from covid19api records
///
/// Records are sorted by date. The upstream feed occasionally repeats the
/// most recent day; when several records share a calendar date, the last
/// one wins.
pub fn from_api_records(records: Vec<ApiCaseRecord>) -> Result<CaseSeries> {
    let mut records = records;
    records.sort_by_key(|record| record.date);

    let mut observations: Vec<Observation> = Vec::with_capacity(records.len());
    for record in records {
        let observation = Observation::new(
            record.date.date_naive(),
            record.confirmed,
            record.deaths,
            record.recovered,
            record.active,
        );
        match observations.last_mut() {
            Some(prev) if prev.date == observation.date => *prev = observation,
            _ => observations.push(observation),
        }
    }

    CaseSeries::new(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataError;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const API_FIXTURE: &str = r#"[
        {"Country": "Switzerland", "Confirmed": 100, "Deaths": 2, "Recovered": 10, "Active": 88, "Date": "2023-03-01T00:00:00Z"},
        {"Country": "Switzerland", "Confirmed": 150, "Deaths": 3, "Recovered": 12, "Active": 135, "Date": "2023-03-02T00:00:00Z"},
        {"Country": "Switzerland", "Confirmed": 155, "Deaths": 3, "Recovered": 14, "Active": 138, "Date": "2023-03-02T00:00:00Z"}
    ]"#;

    #[test]
    fn test_load_csv() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,confirmed,deaths,recovered,active").unwrap();
        writeln!(file, "2023-03-02,150,3,12,135").unwrap();
        writeln!(file, "2023-03-01,100,2,10,88").unwrap();

        let series = load_csv(file.path()).unwrap();
        assert_eq!(series.len(), 2);
        // Rows arrive unsorted and come back in date order
        assert_eq!(series.first().confirmed, 100);
        assert_eq!(series.last().confirmed, 150);
    }

    #[test]
    fn test_load_csv_bad_field() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,confirmed,deaths,recovered,active").unwrap();
        writeln!(file, "2023-03-01,not-a-number,2,10,88").unwrap();

        let result = load_csv(file.path());
        assert!(matches!(result, Err(DataError::Csv(_))));
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", API_FIXTURE).unwrap();

        let series = load_json(file.path()).unwrap();
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_from_api_records_collapses_repeated_days() {
        let records: Vec<ApiCaseRecord> = serde_json::from_str(API_FIXTURE).unwrap();
        let series = from_api_records(records).unwrap();

        assert_eq!(series.len(), 2);
        // The later record for 2023-03-02 wins
        assert_eq!(series.last().confirmed, 155);
        assert!(series.is_strictly_dated());
    }

    #[test]
    fn test_from_api_records_empty() {
        let result = from_api_records(Vec::new());
        assert!(matches!(result, Err(DataError::EmptySeries)));
    }
}
