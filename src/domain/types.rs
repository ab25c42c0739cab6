//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - passed between ingest, transform and the output sinks
//! - exported to JSON/CSV

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A named region and its population (the per-100k denominator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub population: i64,
}

/// One day of the input series: cumulative confirmed cases through `date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub cumulative_cases: u64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, cumulative_cases: u64) -> Self {
        Self {
            date,
            cumulative_cases,
        }
    }
}

/// One output row, parallel to the input `DailyRecord` at the same position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRecord {
    pub date: NaiveDate,
    pub cumulative_cases: u64,
    /// New cases over the trailing 14 rows, per 100,000.
    pub window14_rate: f64,
    /// New cases over the trailing 7 rows, per 100,000.
    pub window7_rate: f64,
    /// Largest `window7_rate` seen up to and including this row.
    pub window7_running_max: f64,
    /// Filled units of `bar` (0..=40).
    pub bar_units: usize,
    pub bar: String,
}

/// Where the population figure for a run came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopulationOrigin {
    Registry,
    Override,
}

/// Export encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Where the cumulative-case feed is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceSpec {
    File(PathBuf),
    Url(String),
}

impl SourceSpec {
    /// `http://` and `https://` locations are fetched over the network,
    /// anything else is treated as a local path.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SourceSpec::Url(trimmed.to_string())
        } else {
            SourceSpec::File(PathBuf::from(trimmed))
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SourceSpec::File(path) => path.display().to_string(),
            SourceSpec::Url(url) => url.clone(),
        }
    }
}

/// Header names of the three columns the feed reader needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedColumns {
    pub date: String,
    pub region: String,
    pub cases: String,
}

impl Default for FeedColumns {
    fn default() -> Self {
        Self {
            date: "date".to_string(),
            region: "region".to_string(),
            cases: "cases".to_string(),
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus prompts and defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub region: String,
    /// Explicit population; bypasses the registry when set.
    pub population_override: Option<i64>,
    /// Extra `region,population` CSV layered over the built-in registry.
    pub population_file: Option<PathBuf>,
    /// Display ceiling for the bar (and the plot's y axis).
    pub max_display_value: f64,
    /// First date shown by the table and plot. Does not affect the transform.
    pub start_date: Option<NaiveDate>,
    pub source: SourceSpec,
    pub columns: FeedColumns,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
}
