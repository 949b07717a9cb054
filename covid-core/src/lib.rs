//! Core library for the `covidstats` CLI.
//!
//! This crate defines:
//! - The covid19api.com REST client
//! - Shared domain models (summaries, series, records)
//! - Table shaping (filtering, dedup, weekly sampling)
//!
//! It is used by `covid-cli`, but can also be reused by other binaries or services.

pub mod api;
pub mod error;
pub mod model;
pub mod shape;

pub use api::CovidApiClient;
pub use error::FetchError;
pub use model::{CaseTriple, CountryRecord, GlobalSummary, ProvinceRecord, TimeSeriesPoint};
