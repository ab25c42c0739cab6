//! Command-line parsing for the case-rate tool.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the transform code.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::domain::ExportFormat;

pub mod picker;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "incidence",
    version,
    about = "7-day and 14-day case rates per 100k from a cumulative case feed"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the run summary and the per-day table (default).
    Table(RunArgs),
    /// Print the run summary and a date-axis plot of the window rates.
    Plot(RunArgs),
    /// Write the derived rows to a CSV or JSON file.
    Export(ExportArgs),
    /// List the regions in the population registry.
    Regions(RegionsArgs),
}

/// Options shared by every command that runs the transform.
#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Region name, exactly as spelled in the feed (prompted if omitted).
    #[arg(short = 'r', long)]
    pub region: Option<String>,

    /// Population to normalize by; bypasses the registry.
    #[arg(long)]
    pub population: Option<i64>,

    /// Extra `region,population` CSV layered over the built-in registry.
    #[arg(long, value_name = "CSV")]
    pub population_file: Option<PathBuf>,

    /// Display maximum per 100k for bars and the plot axis (prompted if omitted).
    #[arg(short = 'm', long = "max", value_name = "PER_100K")]
    pub max: Option<f64>,

    /// First date to display (YYYY-MM-DD). Does not change the computed rates.
    #[arg(long, value_name = "DATE", value_parser = parse_start_date)]
    pub start_date: Option<NaiveDate>,

    /// Feed file path or http(s) URL. Defaults to $CASES_FEED_URL.
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// Feed column holding the calendar day.
    #[arg(long, default_value = "date")]
    pub date_column: String,

    /// Feed column holding the region name.
    #[arg(long, default_value = "region")]
    pub region_column: String,

    /// Feed column holding the cumulative case count.
    #[arg(long, default_value = "cases")]
    pub cases_column: String,

    /// Also render the plot below the table.
    #[arg(long)]
    pub plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 20)]
    pub height: usize,
}

/// Options for `export`.
#[derive(Debug, Args, Clone)]
pub struct ExportArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Output encoding.
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Destination file.
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: PathBuf,
}

/// Options for `regions`.
#[derive(Debug, Args, Clone)]
pub struct RegionsArgs {
    /// Only list names containing this text (case-insensitive).
    #[arg(long)]
    pub filter: Option<String>,

    /// Extra `region,population` CSV layered over the built-in registry.
    #[arg(long, value_name = "CSV")]
    pub population_file: Option<PathBuf>,
}

fn parse_start_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}
