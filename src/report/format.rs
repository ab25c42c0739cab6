//! Formatted terminal output: run summary and the per-day table.
//!
//! We keep formatting code in one place so:
//! - the transform stays pure and testable
//! - output changes are localized

use chrono::NaiveDate;

use crate::app::pipeline::RunOutput;
use crate::domain::{DerivedRecord, PopulationOrigin};

/// Format the run summary (region, population, feed counters, headline rates).
pub fn format_run_summary(run: &RunOutput) -> String {
    let mut out = String::new();

    out.push_str("=== incidence - case rates per 100k ===\n");
    let origin = match run.population_origin {
        PopulationOrigin::Registry => "registry",
        PopulationOrigin::Override => "override",
    };
    out.push_str(&format!(
        "Region: {} (population {}, {origin})\n",
        run.region.name,
        fmt_thousands(run.region.population),
    ));
    out.push_str(&format!("Display max: {:.2} per 100k\n", run.max_display_value));
    out.push_str(&format!(
        "Feed: rows={} | matched={} | skipped={}\n",
        run.ingest.rows_read,
        run.ingest.rows_matched,
        run.ingest.row_errors.len()
    ));

    match &run.summary {
        Some(s) => {
            out.push_str(&format!("Series: n={} | {} .. {}\n", s.rows, s.first_date, s.last_date));
            out.push_str(&format!(
                "Latest ({}): 7d={:.2} | 14d={:.2}\n",
                s.last_date, s.latest_window7, s.latest_window14
            ));
            out.push_str(&format!("Peak 7d: {:.2} on {}\n", s.peak_window7, s.peak_date));
        }
        None => out.push_str("Series: empty\n"),
    }

    if !run.decreases.is_empty() {
        out.push_str(&format!(
            "Warning: cumulative cases decrease on {} row(s); rates are shown as computed.\n",
            run.decreases.len()
        ));
    }

    out
}

/// Format derived rows as a fixed-width table.
///
/// Rows dated before `start_date` are omitted from the display only.
pub fn format_table(rows: &[DerivedRecord], start_date: Option<NaiveDate>) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<10} {:>12} {:>10} {:>10} {:>10} {}\n",
            "date", "cumulative", "14d/100k", "7d/100k", "max 7d", "bar"
        )
        .trim_end(),
    );
    out.push('\n');

    out.push_str(
        format!(
            "{:-<10} {:-<12} {:-<10} {:-<10} {:-<10} {:-<5}\n",
            "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for r in rows.iter().filter(|r| start_date.is_none_or(|start| r.date >= start)) {
        out.push_str(&format!(
            "{:<10} {:>12} {:>10.2} {:>10.2} {:>10.2} |{}|\n",
            r.date.to_string(),
            r.cumulative_cases,
            r.window14_rate,
            r.window7_rate,
            r.window7_running_max,
            r.bar
        ));
    }

    out
}

fn fmt_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}
