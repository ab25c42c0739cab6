//! Rolling-window transform.
//!
//! Turns an ordered cumulative-case series into per-100k 7-day and 14-day
//! window rates, a running maximum of the 7-day rate, and a bounded text bar.
//! Everything here is pure: no I/O, no retained state, one pass per call.

pub mod bar;
pub mod window;

use chrono::NaiveDate;

use crate::domain::{DailyRecord, DerivedRecord};
use crate::error::AppError;

pub use bar::{BAR_WIDTH, bar_units, render_bar};
pub use window::{LONG_SPAN, PER_CAPITA_BASE, SHORT_SPAN, per_capita_scale, window_rate};

/// Derive one `DerivedRecord` per input row.
///
/// An empty series yields an empty output. Decreasing cumulative counts are
/// propagated as (possibly negative) rates.
pub fn derive_records(
    series: &[DailyRecord],
    population: i64,
    max_display_value: f64,
) -> Result<Vec<DerivedRecord>, AppError> {
    if population <= 0 {
        return Err(AppError::invalid_parameter(format!(
            "Population must be > 0 (got {population})."
        )));
    }
    if !(max_display_value.is_finite() && max_display_value > 0.0) {
        return Err(AppError::invalid_parameter(format!(
            "Display maximum must be a finite number > 0 (got {max_display_value})."
        )));
    }

    let scale = per_capita_scale(population);
    let cumulative: Vec<u64> = series.iter().map(|r| r.cumulative_cases).collect();

    let mut out = Vec::with_capacity(series.len());
    let mut running_max = f64::NEG_INFINITY;

    for (idx, record) in series.iter().enumerate() {
        let window14_rate = window_rate(&cumulative, idx, LONG_SPAN, scale);
        let window7_rate = window_rate(&cumulative, idx, SHORT_SPAN, scale);
        running_max = running_max.max(window7_rate);

        let units = bar_units(window7_rate, max_display_value);
        out.push(DerivedRecord {
            date: record.date,
            cumulative_cases: record.cumulative_cases,
            window14_rate,
            window7_rate,
            window7_running_max: running_max,
            bar_units: units,
            bar: render_bar(units),
        });
    }

    Ok(out)
}

/// A row whose cumulative count is below the previous row's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decrease {
    /// 1-based row number in the series.
    pub row: usize,
    pub date: NaiveDate,
    pub previous: u64,
    pub current: u64,
}

/// Report decreasing cumulative counts. These are not corrected anywhere.
pub fn find_decreases(series: &[DailyRecord]) -> Vec<Decrease> {
    series
        .windows(2)
        .enumerate()
        .filter(|(_, pair)| pair[1].cumulative_cases < pair[0].cumulative_cases)
        .map(|(idx, pair)| Decrease {
            row: idx + 2,
            date: pair[1].date,
            previous: pair[0].cumulative_cases,
            current: pair[1].cumulative_cases,
        })
        .collect()
}

/// Headline numbers for a derived series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSummary {
    pub rows: usize,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub latest_window7: f64,
    pub latest_window14: f64,
    pub peak_window7: f64,
    /// Earliest date at which `peak_window7` was reached.
    pub peak_date: NaiveDate,
}

pub fn summarize(rows: &[DerivedRecord]) -> Option<SeriesSummary> {
    let first = rows.first()?;
    let last = rows.last()?;

    let mut peak = first;
    for row in rows {
        if row.window7_rate > peak.window7_rate {
            peak = row;
        }
    }

    Some(SeriesSummary {
        rows: rows.len(),
        first_date: first.date,
        last_date: last.date,
        latest_window7: last.window7_rate,
        latest_window14: last.window14_rate,
        peak_window7: peak.window7_rate,
        peak_date: peak.date,
    })
}
