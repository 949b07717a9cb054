use clap::{CommandFactory, Parser};

use crate::report;

const ABOUT: &str =
    "covidstats allows you to view Covid-19 statistics retrieved from https://covid19api.com/";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "covidstats", version, about = ABOUT)]
pub struct Cli {
    /// Get a summary of worldwide Covid-19 data.
    #[arg(short, long)]
    pub summary: bool,

    /// Render charts alongside whichever report runs.
    #[arg(short, long)]
    pub chart: bool,

    /// Get Covid-19 details for a specific country. Enter country names in
    /// all lower case with a '-' for spaces; use a short form if available
    /// (ex: usa instead of United States of America).
    #[arg(short, long, value_name = "COUNTRY_ID", conflicts_with = "summary")]
    pub details: Option<String>,
}

/// The one report this invocation runs. Resolved once from the parsed flags;
/// `--summary` and `--details` cannot both be set (rejected by the parser),
/// so there is no precedence to decide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Summary { chart: bool },
    Details { country_id: String, chart: bool },
    Help,
}

impl Cli {
    pub fn action(&self) -> Action {
        if self.summary {
            Action::Summary { chart: self.chart }
        } else if let Some(country_id) = &self.details {
            Action::Details { country_id: country_id.clone(), chart: self.chart }
        } else {
            Action::Help
        }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        match self.action() {
            Action::Summary { chart } => report::global_summary(chart).await,
            Action::Details { country_id, chart } => {
                report::country_details(&country_id, chart).await
            }
            Action::Help => {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}
