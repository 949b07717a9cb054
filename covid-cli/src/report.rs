//! The two report flows: worldwide summary and per-country details. Each
//! flow fetches, shapes, prints, and optionally charts, then returns; fetch
//! failures bubble up to `main` as user-facing errors.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use colored::Colorize;
use covid_core::{CovidApiClient, ProvinceRecord, TimeSeriesPoint, shape};
use indicatif::ProgressBar;

use crate::{chart, render};

const CHART_HINT: &str =
    "add -c or --chart to view a graphical representation of the data";

/// Worldwide totals, new cases, and the high-case country table.
pub async fn global_summary(chart_enabled: bool) -> Result<()> {
    let client = CovidApiClient::new()?;

    let pb = spinner("Loading summary...");
    let summary = client.fetch_global_summary().await;
    pb.finish_and_clear();
    let summary = summary.context("could not retrieve the global summary")?;

    let today = Local::now().date_naive();
    render::banner(&format!("Covid-19 Summary for {today}"));
    println!("Covid-19 summary for worldwide cases, deaths, and recoveries; {CHART_HINT}");

    render::triple("Totals", &summary.total);
    render::triple("New Cases/Deaths/Recoveries", &summary.new);

    let high_case =
        shape::filter_high_case_countries(&summary.countries, shape::HIGH_CASE_THRESHOLD);

    println!(
        "\n{}:",
        format!(
            "Covid-19 Data For Countries with over {} cases",
            shape::HIGH_CASE_THRESHOLD
        )
        .yellow()
    );
    let rows: Vec<Vec<String>> = high_case
        .iter()
        .map(|r| {
            vec![
                r.country.clone(),
                r.total_confirmed.to_string(),
                r.total_deaths.to_string(),
                r.total_recovered.to_string(),
            ]
        })
        .collect();
    render::table(&["Country", "TotalConfirmed", "TotalDeaths", "TotalRecovered"], &rows);

    if chart_enabled {
        chart::country_bars(&high_case);
        chart::new_cases_pie(&summary.new);
    }

    Ok(())
}

/// Totals, province breakdown, and weekly series for one country.
pub async fn country_details(country_id: &str, chart_enabled: bool) -> Result<()> {
    let client = CovidApiClient::new()?;

    let pb = spinner("Loading country data...");
    let series = client.fetch_country_time_series(country_id).await;
    pb.finish_and_clear();
    let series = series
        .with_context(|| format!("could not retrieve data for country '{country_id}'"))?;

    let latest = series
        .last()
        .ok_or_else(|| anyhow!("no data returned for country '{country_id}'"))?;

    let today = Local::now().date_naive();
    render::banner(&format!("Covid-19 Summary for {country_id} on {today}"));
    println!("Covid-19 details for country specific cases, deaths, and recoveries; {CHART_HINT}");

    render::triple("Totals", &latest.triple());

    println!("\n{}:", "Covid-19 Data For Provinces/States/Cities".yellow());

    let pb = spinner("Loading province data...");
    let provinces = client.fetch_country_province_series(country_id).await;
    pb.finish_and_clear();
    let provinces = provinces
        .with_context(|| format!("could not retrieve province data for '{country_id}'"))?;

    render::table(
        &["Province", "City", "Cases"],
        &province_rows(&shape::latest_per_province_city(&provinces)),
    );

    let weekly = shape::weekly_sample(&series);
    let display_name = title_case(country_id);

    println!("\n{}:", format!("Covid-19 Data over time for {display_name}").yellow());
    render::table(&["Date", "Confirmed", "Deaths", "Recovered"], &weekly_rows(&weekly));

    if chart_enabled {
        chart::time_series(&weekly, &display_name);
    }

    Ok(())
}

fn province_rows(records: &[ProvinceRecord]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|r| vec![r.province.clone(), r.city.clone(), r.cases.to_string()])
        .collect()
}

fn weekly_rows(series: &[TimeSeriesPoint]) -> Vec<Vec<String>> {
    series
        .iter()
        .map(|p| {
            vec![
                p.date.clone(),
                p.confirmed.to_string(),
                p.deaths.to_string(),
                p.recovered.to_string(),
            ]
        })
        .collect()
}

/// Upper-case the first letter of each alphabetic run, so "south-africa"
/// displays as "South-Africa".
fn title_case(id: &str) -> String {
    let mut out = String::with_capacity(id.len());
    let mut at_word_start = true;
    for c in id.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.push(c);
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(msg.to_string());
    pb
}
