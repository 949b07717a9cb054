//! Console presentation: banner, colored case triples, plain-text tables.
//!
//! Formatting only; all numbers arrive pre-shaped. Colors degrade to plain
//! text on terminals without ANSI support.

use colored::Colorize;
use covid_core::CaseTriple;

pub const BANNER_WIDTH: usize = 70;

/// One centered line of fixed width, title framed by a `-` fill. Width is
/// counted in characters, not bytes, so non-ASCII country ids line up.
pub fn banner_line(title: &str) -> String {
    let inner = format!(" {title} ");
    let inner_len = inner.chars().count();
    if inner_len >= BANNER_WIDTH {
        return inner;
    }

    let fill = BANNER_WIDTH - inner_len;
    let left = fill / 2;
    let right = fill - left;
    format!("{}{}{}", "-".repeat(left), inner, "-".repeat(right))
}

pub fn banner(title: &str) {
    println!("{}", banner_line(title).black().on_white().bold());
}

/// Section title plus the three fixed-label case lines.
pub fn triple(title: &str, cases: &CaseTriple) {
    println!("\n{}:", title.yellow());
    println!("{} {}", "Total Confirmed:".white().on_cyan().bold(), cases.confirmed);
    println!("{} {}", "Total Deaths   :".on_red().bold(), cases.deaths);
    println!("{} {}", "Total Recovered:".on_green().bold(), cases.recovered);
}

/// Plain-text table: each column padded to its widest cell, values
/// right-aligned under right-aligned headers, no row indices.
pub fn format_table(columns: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(|c| c.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(c, &w)| format!("{c:>w$}"))
        .collect();
    out.push_str(header.join("  ").trim_end());
    out.push('\n');

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    }

    out
}

pub fn table(columns: &[&str], rows: &[Vec<String>]) {
    print!("{}", format_table(columns, rows));
}
