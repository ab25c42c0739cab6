//! Export derived rows to CSV or JSON.
//!
//! The export is meant to be easy to consume in spreadsheets, charting tools or
//! downstream scripts. CSV carries the rows only; JSON wraps them with run
//! metadata.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DerivedRecord, ExportFormat, PopulationOrigin};
use crate::error::{AppError, ErrorKind};

/// JSON export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportFile {
    pub tool: String,
    pub region: String,
    pub population: i64,
    pub population_origin: PopulationOrigin,
    pub max_display_value: f64,
    pub start_date: Option<NaiveDate>,
    pub rows: Vec<DerivedRecord>,
}

/// Write `file` to `path` in the requested format.
pub fn write_export(path: &Path, format: ExportFormat, file: &ExportFile) -> Result<(), AppError> {
    let out = File::create(path).map_err(|e| {
        AppError::new(
            ErrorKind::Output,
            format!("Failed to create export '{}': {e}", path.display()),
        )
    })?;
    let mut out = BufWriter::new(out);

    match format {
        ExportFormat::Csv => write_rows_csv(&mut out, &file.rows)?,
        ExportFormat::Json => write_export_json(&mut out, file)?,
    }

    out.flush().map_err(|e| {
        AppError::new(
            ErrorKind::Output,
            format!("Failed to write export '{}': {e}", path.display()),
        )
    })
}

/// One CSV row per derived record, with a header.
pub fn write_rows_csv<W: Write>(out: W, rows: &[DerivedRecord]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(out);
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| AppError::new(ErrorKind::Output, format!("Failed to write export CSV row: {e}")))?;
    }
    writer
        .flush()
        .map_err(|e| AppError::new(ErrorKind::Output, format!("Failed to write export CSV: {e}")))
}

pub fn write_export_json<W: Write>(mut out: W, file: &ExportFile) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut out, file)
        .map_err(|e| AppError::new(ErrorKind::Output, format!("Failed to write export JSON: {e}")))?;
    writeln!(out).map_err(|e| AppError::new(ErrorKind::Output, format!("Failed to write export JSON: {e}")))
}
