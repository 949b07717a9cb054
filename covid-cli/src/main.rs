//! Binary crate for the `covidstats` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Human-friendly output formatting (banners, colored triples, tables)
//! - Optional terminal charts

use std::process::ExitCode;

use clap::Parser;

mod chart;
mod cli;
mod render;
mod report;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
