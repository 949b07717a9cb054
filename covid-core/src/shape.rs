//! Pure transformations from raw API records to display-ready tables.
//!
//! Each function is a pure function of its input list: no hidden state, no
//! carry-over between countries or invocations, and empty input always yields
//! empty output.

use std::collections::HashMap;

use crate::model::{CountryRecord, ProvinceRecord, TimeSeriesPoint};

/// Countries whose confirmed total exceeds 100 000 make the summary table.
pub const HIGH_CASE_THRESHOLD: u64 = 100_000;

/// Keep only countries with `total_confirmed` strictly above `threshold`,
/// preserving input order. The boundary value itself is excluded.
pub fn filter_high_case_countries(
    records: &[CountryRecord],
    threshold: u64,
) -> Vec<CountryRecord> {
    records
        .iter()
        .filter(|r| r.total_confirmed > threshold)
        .cloned()
        .collect()
}

/// Collapse a chronological province series to one record per distinct
/// (province, city) pair, keeping the last-seen record for each. Input is
/// chronological, so last-seen is the most recent day's figure. Output keeps
/// the records in order of each key's last occurrence.
pub fn latest_per_province_city(records: &[ProvinceRecord]) -> Vec<ProvinceRecord> {
    let mut last_index: HashMap<(&str, &str), usize> = HashMap::new();
    for (i, r) in records.iter().enumerate() {
        last_index.insert((r.province.as_str(), r.city.as_str()), i);
    }

    records
        .iter()
        .enumerate()
        .filter(|(i, r)| last_index[&(r.province.as_str(), r.city.as_str())] == *i)
        .map(|(_, r)| r.clone())
        .collect()
}

/// Take every 7th point starting at index 0 (positions 0, 7, 14, ...) and
/// truncate each kept point's date to its first 10 characters, dropping the
/// time-of-day of the source's ISO-8601 timestamp. Sampling is positional,
/// not calendar-aligned; a series shorter than 7 points yields one sample.
pub fn weekly_sample(series: &[TimeSeriesPoint]) -> Vec<TimeSeriesPoint> {
    series
        .iter()
        .step_by(7)
        .map(|p| TimeSeriesPoint {
            date: truncate_to_day(&p.date),
            confirmed: p.confirmed,
            deaths: p.deaths,
            recovered: p.recovered,
        })
        .collect()
}

fn truncate_to_day(date: &str) -> String {
    date.chars().take(10).collect()
}
