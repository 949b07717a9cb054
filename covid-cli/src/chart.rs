//! Terminal charts, drawn with scaled unicode-block bars. Rendered only when
//! the `--chart` flag is given; pure presentation over already-shaped data.

use colored::Colorize;
use covid_core::{CaseTriple, CountryRecord, TimeSeriesPoint};

const BAR_WIDTH: usize = 50;

/// Horizontal bar chart of confirmed/deaths/recovered per country, scaled to
/// the largest confirmed total in the set.
pub fn country_bars(records: &[CountryRecord]) {
    let max = records.iter().map(|r| r.total_confirmed).max().unwrap_or(0);
    if max == 0 {
        return;
    }

    println!("\n{}:", "Total Cases By Country".yellow());
    for r in records {
        println!("{}", r.country);
        println!("  {}", bar(r.total_confirmed, max).cyan());
        println!("  {}", bar(r.total_deaths, max).red());
        println!("  {}", bar(r.total_recovered, max).green());
    }
}

/// Pie-style breakdown of the new cases/deaths/recoveries triple: one line
/// per slice with its share of the whole and the raw count.
pub fn new_cases_pie(new: &CaseTriple) {
    let total = new.confirmed + new.deaths + new.recovered;
    if total == 0 {
        return;
    }

    println!("\n{}:", "New Reported Cases, Deaths, and Recovered".yellow());
    for (label, value, swatch) in [
        ("Cases", new.confirmed, "■".cyan()),
        ("Deaths", new.deaths, "■".red()),
        ("Recovered", new.recovered, "■".green()),
    ] {
        let pct = value as f64 / total as f64 * 100.0;
        println!("{swatch} {label:<9} {pct:>3.0}% ({value})");
    }
}

/// Line chart over time: scaled bars of confirmed, deaths, and recovered
/// per sampled day, sharing one scale so the series are comparable.
pub fn time_series(series: &[TimeSeriesPoint], country: &str) {
    for line in time_series_lines(series, country) {
        println!("{line}");
    }
}

fn time_series_lines(series: &[TimeSeriesPoint], country: &str) -> Vec<String> {
    let max = series.iter().map(|p| p.confirmed).max().unwrap_or(0);
    if max == 0 {
        return Vec::new();
    }

    let mut lines =
        vec![format!("\n{}:", format!("Change in Cases over Time for {country}").yellow())];
    for p in series {
        lines.push(p.date.clone());
        lines.push(format!("  {} {}", bar(p.confirmed, max).cyan(), p.confirmed));
        lines.push(format!("  {} {}", bar(p.deaths, max).red(), p.deaths));
        lines.push(format!("  {} {}", bar(p.recovered, max).green(), p.recovered));
    }
    lines
}

fn bar(value: u64, max: u64) -> String {
    let len = ((value as f64 / max as f64) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(len.min(BAR_WIDTH))
}
