//! Case-feed access: local CSV files or CSV over HTTP(S).

use std::fs::File;
use std::io::Cursor;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::domain::{FeedColumns, SourceSpec};
use crate::error::{AppError, ErrorKind};
use crate::io::ingest::{IngestedSeries, read_region_series};

/// Environment variable naming the default feed location.
pub const FEED_ENV_VAR: &str = "CASES_FEED_URL";

const HTTP_TIMEOUT: Duration = Duration::from_secs(60);

/// Resolve the feed location from an explicit flag, falling back to
/// `CASES_FEED_URL`. `main` loads `.env` into the environment beforehand.
pub fn resolve_source(explicit: Option<&str>) -> Result<SourceSpec, AppError> {
    if let Some(raw) = explicit {
        return Ok(SourceSpec::parse(raw));
    }

    let raw = std::env::var(FEED_ENV_VAR).map_err(|_| {
        AppError::input(format!(
            "No case feed given. Pass `--source <file-or-url>` or set {FEED_ENV_VAR} in the environment (.env)."
        ))
    })?;
    Ok(SourceSpec::parse(&raw))
}

/// Read the feed and return the series of `region`.
pub fn load_region_series(
    source: &SourceSpec,
    columns: &FeedColumns,
    region: &str,
) -> Result<IngestedSeries, AppError> {
    match source {
        SourceSpec::File(path) => {
            let file = File::open(path).map_err(|e| {
                AppError::input(format!("Failed to open feed '{}': {e}", path.display()))
            })?;
            read_region_series(file, columns, region)
        }
        SourceSpec::Url(url) => {
            let body = fetch(url)?;
            read_region_series(Cursor::new(body), columns, region)
        }
    }
}

fn fetch(url: &str) -> Result<Vec<u8>, AppError> {
    let client = Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(|e| AppError::new(ErrorKind::Source, format!("Failed to build HTTP client: {e}")))?;

    log::info!("fetching case feed from {url}");
    let resp = client
        .get(url)
        .send()
        .map_err(|e| AppError::new(ErrorKind::Source, format!("Feed request failed: {e}")))?;

    if !resp.status().is_success() {
        return Err(AppError::new(
            ErrorKind::Source,
            format!("Feed request failed with status {}.", resp.status()),
        ));
    }

    let body = resp
        .bytes()
        .map_err(|e| AppError::new(ErrorKind::Source, format!("Failed to read feed body: {e}")))?;
    log::debug!("received {} bytes", body.len());
    Ok(body.to_vec())
}
