//! CSV ingest and normalization.
//!
//! This module turns a multi-region case feed into the ordered
//! `(date, cumulative_cases)` series of a single region.
//!
//! Design goals:
//! - **Strict schema** for required columns (clear errors + exit code 2)
//! - **Row-level validation** (skip bad rows, but report what happened)
//! - **No reordering**: rows must already be ascending by date
//! - **Separation of concerns**: no rate logic here

use std::collections::HashMap;
use std::io::Read;

use chrono::NaiveDate;
use csv::StringRecord;

use crate::domain::{DailyRecord, FeedColumns};
use crate::error::AppError;

/// A row-level validation error (row was skipped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowError {
    /// 1-based CSV line number (header is line 1).
    pub line: usize,
    pub message: String,
}

/// Ingest output: the region's series + row errors + counters.
#[derive(Debug, Clone)]
pub struct IngestedSeries {
    pub region: String,
    pub records: Vec<DailyRecord>,
    pub row_errors: Vec<RowError>,
    /// All data rows in the feed, any region.
    pub rows_read: usize,
    /// Rows belonging to the selected region (accepted or not).
    pub rows_matched: usize,
}

/// Read the feed and keep the rows of `region`, in feed order.
///
/// Dates must be strictly ascending among accepted rows. The feed is not
/// sorted or deduplicated here; an out-of-order row is an input error.
pub fn read_region_series<R: Read>(
    reader: R,
    columns: &FeedColumns,
    region: &str,
) -> Result<IngestedSeries, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .clone();

    let header_map = build_header_map(&headers);
    let date_idx = require_column(&header_map, &columns.date)?;
    let region_idx = require_column(&header_map, &columns.region)?;
    let cases_idx = require_column(&header_map, &columns.cases)?;

    let mut records: Vec<DailyRecord> = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;
    let mut rows_matched = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        if record.get(region_idx) != Some(region) {
            continue;
        }
        rows_matched += 1;

        let parsed = parse_row(&record, date_idx, cases_idx);
        let row = match parsed {
            Ok(row) => row,
            Err(message) => {
                row_errors.push(RowError { line, message });
                continue;
            }
        };

        if let Some(prev) = records.last() {
            if row.date <= prev.date {
                return Err(AppError::input(format!(
                    "Feed line {line}: date {} for '{region}' is not after the previous date {}; the feed must be sorted ascending by date without duplicates.",
                    row.date, prev.date
                )));
            }
        }
        records.push(row);
    }

    Ok(IngestedSeries {
        region: region.to_string(),
        records,
        row_errors,
        rows_read,
        rows_matched,
    })
}

pub(crate) fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header. If we don't strip it, schema validation will incorrectly
    // report missing columns.
    let name = name.trim().trim_start_matches('\u{feff}');
    name.to_ascii_lowercase()
}

fn require_column(header_map: &HashMap<String, usize>, name: &str) -> Result<usize, AppError> {
    header_map
        .get(&normalize_header_name(name))
        .copied()
        .ok_or_else(|| AppError::input(format!("Missing required column: `{name}`")))
}

fn parse_row(record: &StringRecord, date_idx: usize, cases_idx: usize) -> Result<DailyRecord, String> {
    let date = parse_date(record.get(date_idx).unwrap_or(""))?;
    let cumulative_cases = parse_cases(record.get(cases_idx).unwrap_or(""))?;
    Ok(DailyRecord::new(date, cumulative_cases))
}

/// Parse an ISO-8601 calendar day, dropping any time-of-day suffix.
pub fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    let s = raw.trim();
    let day = s.split(['T', ' ']).next().unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| format!("Invalid date '{s}' (expected YYYY-MM-DD)."))
}

/// Parse a non-negative whole case count (`12` or `12.0`).
fn parse_cases(raw: &str) -> Result<u64, String> {
    let s = raw.trim();
    if s.is_empty() {
        return Err("Missing case count.".to_string());
    }
    if let Ok(v) = s.parse::<u64>() {
        return Ok(v);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 && v.fract() == 0.0 && v <= u64::MAX as f64 => Ok(v as u64),
        _ => Err(format!("Invalid case count '{s}' (expected a non-negative integer).")),
    }
}
