use serde::Deserialize;

/// Confirmed/deaths/recovered counts for one scope (worldwide totals,
/// new-today, or one country). Built fresh per report, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseTriple {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
}

/// All-time totals for a single country, from the summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CountryRecord {
    pub country: String,
    pub total_confirmed: u64,
    pub total_deaths: u64,
    pub total_recovered: u64,
}

/// One reporting day for one province/city. The day-one endpoint yields many
/// of these per location; shaping keeps only the most recent one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvinceRecord {
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub city: String,
    pub cases: u64,
    pub date: String,
}

/// One day in a country's cumulative series. `date` is the raw ISO-8601
/// timestamp from the API until shaping truncates it to the calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TimeSeriesPoint {
    pub date: String,
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
}

impl TimeSeriesPoint {
    pub fn triple(&self) -> CaseTriple {
        CaseTriple {
            confirmed: self.confirmed,
            deaths: self.deaths,
            recovered: self.recovered,
        }
    }
}

/// Worldwide snapshot: new and all-time triples plus per-country totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalSummary {
    pub new: CaseTriple,
    pub total: CaseTriple,
    pub countries: Vec<CountryRecord>,
}
