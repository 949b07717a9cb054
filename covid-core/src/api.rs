use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::error::FetchError;
use crate::model::{CaseTriple, CountryRecord, GlobalSummary, ProvinceRecord, TimeSeriesPoint};

pub const DEFAULT_BASE_URL: &str = "https://api.covid19api.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the covid19api.com REST service. No auth, no retries; every
/// request carries a fixed timeout so an unresponsive service cannot block
/// the process indefinitely.
#[derive(Debug, Clone)]
pub struct CovidApiClient {
    base_url: String,
    http: Client,
}

impl CovidApiClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { base_url: base_url.into(), http })
    }

    /// GET `/summary`: worldwide new/total triples plus per-country totals.
    pub async fn fetch_global_summary(&self) -> Result<GlobalSummary, FetchError> {
        let url = format!("{}/summary", self.base_url);
        let body = self.get_text(&url).await?;

        let parsed: SummaryPayload = serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(format!("summary: {e}")))?;

        Ok(GlobalSummary {
            new: CaseTriple {
                confirmed: parsed.global.new_confirmed,
                deaths: parsed.global.new_deaths,
                recovered: parsed.global.new_recovered,
            },
            total: CaseTriple {
                confirmed: parsed.global.total_confirmed,
                deaths: parsed.global.total_deaths,
                recovered: parsed.global.total_recovered,
            },
            countries: parsed.countries,
        })
    }

    /// GET `/total/country/{id}`: chronological daily series since the
    /// country's first reported case.
    ///
    /// `country_id` is passed through verbatim (lower-case, hyphen for
    /// space); an unknown id comes back as a non-array error body, which
    /// surfaces as [`FetchError::MalformedResponse`].
    pub async fn fetch_country_time_series(
        &self,
        country_id: &str,
    ) -> Result<Vec<TimeSeriesPoint>, FetchError> {
        let url = format!("{}/total/country/{}", self.base_url, country_id);
        let body = self.get_text(&url).await?;

        serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(format!("country series: {e}")))
    }

    /// GET `/dayone/country/{id}/status/confirmed`: one entry per day per
    /// province/city since that location's first case.
    pub async fn fetch_country_province_series(
        &self,
        country_id: &str,
    ) -> Result<Vec<ProvinceRecord>, FetchError> {
        let url = format!("{}/dayone/country/{}/status/confirmed", self.base_url, country_id);
        let body = self.get_text(&url).await?;

        serde_json::from_str(&body)
            .map_err(|e| FetchError::MalformedResponse(format!("province series: {e}")))
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let res = self.http.get(url).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Network(format!(
                "{url} returned status {status}: {}",
                truncate_body(&body),
            )));
        }

        Ok(body)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GlobalPayload {
    new_confirmed: u64,
    total_confirmed: u64,
    new_deaths: u64,
    total_deaths: u64,
    new_recovered: u64,
    total_recovered: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SummaryPayload {
    global: GlobalPayload,
    countries: Vec<CountryRecord>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    // Back off to a char boundary so multibyte error pages don't panic.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_payload_deserializes() {
        let json = r#"{
            "Global": {
                "NewConfirmed": 100,
                "TotalConfirmed": 1000000,
                "NewDeaths": 5,
                "TotalDeaths": 20000,
                "NewRecovered": 80,
                "TotalRecovered": 900000
            },
            "Countries": [
                {
                    "Country": "Afghanistan",
                    "CountryCode": "AF",
                    "Slug": "afghanistan",
                    "NewConfirmed": 3,
                    "TotalConfirmed": 150000,
                    "NewDeaths": 0,
                    "TotalDeaths": 2000,
                    "NewRecovered": 1,
                    "TotalRecovered": 140000,
                    "Date": "2021-03-05T00:00:00Z"
                },
                {
                    "Country": "Albania",
                    "CountryCode": "AL",
                    "Slug": "albania",
                    "NewConfirmed": 0,
                    "TotalConfirmed": 50000,
                    "NewDeaths": 0,
                    "TotalDeaths": 900,
                    "NewRecovered": 0,
                    "TotalRecovered": 45000,
                    "Date": "2021-03-05T00:00:00Z"
                }
            ]
        }"#;

        let parsed: SummaryPayload = serde_json::from_str(json).expect("valid payload");
        assert_eq!(parsed.global.total_confirmed, 1_000_000);
        assert_eq!(parsed.global.total_deaths, 20_000);
        assert_eq!(parsed.global.total_recovered, 900_000);
        assert_eq!(parsed.countries.len(), 2);
        assert_eq!(parsed.countries[0].country, "Afghanistan");
        assert_eq!(parsed.countries[1].total_confirmed, 50_000);
    }

    #[test]
    fn time_series_point_deserializes_with_extra_fields() {
        let json = r#"[
            {
                "Country": "Canada",
                "CountryCode": "CA",
                "Province": "",
                "City": "",
                "CityCode": "",
                "Lat": "0",
                "Lon": "0",
                "Confirmed": 10,
                "Deaths": 1,
                "Recovered": 5,
                "Active": 4,
                "Date": "2020-01-31T00:00:00Z"
            }
        ]"#;

        let series: Vec<TimeSeriesPoint> = serde_json::from_str(json).expect("valid series");
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].date, "2020-01-31T00:00:00Z");
        assert_eq!(series[0].confirmed, 10);
    }

    #[test]
    fn province_record_tolerates_missing_province_and_city() {
        let json = r#"[
            {
                "Country": "Iceland",
                "Cases": 7,
                "Status": "confirmed",
                "Date": "2020-03-01T00:00:00Z"
            }
        ]"#;

        let records: Vec<ProvinceRecord> = serde_json::from_str(json).expect("valid records");
        assert_eq!(records[0].province, "");
        assert_eq!(records[0].city, "");
        assert_eq!(records[0].cases, 7);
    }

    #[test]
    fn truncate_body_passes_short_bodies_through() {
        assert_eq!(truncate_body("Not Found"), "Not Found");
    }

    #[test]
    fn truncate_body_respects_char_boundaries() {
        // A multibyte character straddling the 200-byte cutoff must not
        // split mid-character.
        let body = format!("{}état d'erreur", "a".repeat(199));
        let truncated = truncate_body(&body);

        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 203);
        assert!(truncated.starts_with(&"a".repeat(199)));
        // The 'é' at bytes 199..201 is dropped whole.
        assert_eq!(&truncated[..truncated.len() - 3], "a".repeat(199));
    }

    #[test]
    fn truncate_body_shortens_long_ascii_bodies() {
        let body = "x".repeat(500);
        let truncated = truncate_body(&body);
        assert_eq!(truncated, format!("{}...", "x".repeat(200)));
    }

    #[test]
    fn error_body_is_not_a_series() {
        // Unknown country ids come back as an object, not an array.
        let json = r#"{"message": "Not Found"}"#;
        let res: Result<Vec<TimeSeriesPoint>, _> = serde_json::from_str(json);
        assert!(res.is_err());
    }
}
