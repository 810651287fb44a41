//! Client for per-country cumulative case statistics

use crate::error::{FeedError, Result};
use case_data::{from_api_records, ApiCaseRecord, CaseSeries};

/// Default covid19api endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.covid19api.com";

/// Blocking client for the covid19api case feed
#[derive(Debug, Clone)]
pub struct CaseApiClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl Default for CaseApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CaseApiClient {
    /// Create a client against the default endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against a custom endpoint, e.g. a local mirror
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Fetch the full day-one cumulative series for a country
    ///
    /// `country` is a covid19api country slug such as `switzerland`.
    pub fn total_by_country(&self, country: &str) -> Result<CaseSeries> {
        let url = format!("{}/total/dayone/country/{}", self.base_url, country);
        let response = self.http.get(&url).send()?;

        if !response.status().is_success() {
            return Err(FeedError::Status {
                code: response.status().as_u16(),
                url,
            });
        }

        let body = response.text()?;
        parse_total_response(&body)
    }
}

/// Decode a `total/dayone/country` response body into a case series
pub fn parse_total_response(body: &str) -> Result<CaseSeries> {
    let records: Vec<ApiCaseRecord> = serde_json::from_str(body)?;
    Ok(from_api_records(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    const TOTAL_FIXTURE: &str = r#"[
        {"Country": "Switzerland", "CountryCode": "", "Province": "", "City": "", "CityCode": "", "Lat": "0", "Lon": "0",
         "Confirmed": 100, "Deaths": 2, "Recovered": 10, "Active": 88, "Date": "2023-03-01T00:00:00Z"},
        {"Country": "Switzerland", "CountryCode": "", "Province": "", "City": "", "CityCode": "", "Lat": "0", "Lon": "0",
         "Confirmed": 150, "Deaths": 3, "Recovered": 12, "Active": 135, "Date": "2023-03-02T00:00:00Z"}
    ]"#;

    #[test]
    fn test_parse_total_response() {
        let series = parse_total_response(TOTAL_FIXTURE).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.first().date, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
        assert_eq!(series.last().confirmed, 150);
    }

    #[test]
    fn test_parse_total_response_invalid_json() {
        let result = parse_total_response("{not json");
        assert!(matches!(result, Err(FeedError::Decode(_))));
    }

    #[test]
    fn test_parse_total_response_empty_array() {
        let result = parse_total_response("[]");
        assert!(matches!(result, Err(FeedError::Data(_))));
    }
}
