//! Reporting utilities: run summary and per-day table.

pub mod format;

pub use format::{format_run_summary, format_table};
