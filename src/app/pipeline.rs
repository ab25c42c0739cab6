//! Shared pipeline logic used by every subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! population lookup -> feed ingest -> data-quality scan -> transform -> summary
//!
//! The subcommands can then focus on presentation (table, plot, export).

use chrono::NaiveDate;

use crate::data::load_region_series;
use crate::domain::{DerivedRecord, PopulationOrigin, Region, RunConfig};
use crate::error::AppError;
use crate::io::export::ExportFile;
use crate::io::ingest::IngestedSeries;
use crate::registry::PopulationRegistry;
use crate::transform::{Decrease, SeriesSummary, derive_records, find_decreases, summarize};

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub region: Region,
    pub population_origin: PopulationOrigin,
    pub max_display_value: f64,
    pub start_date: Option<NaiveDate>,
    pub ingest: IngestedSeries,
    pub rows: Vec<DerivedRecord>,
    pub decreases: Vec<Decrease>,
    pub summary: Option<SeriesSummary>,
}

impl RunOutput {
    pub fn to_export(&self) -> ExportFile {
        ExportFile {
            tool: "incidence".to_string(),
            region: self.region.name.clone(),
            population: self.region.population,
            population_origin: self.population_origin,
            max_display_value: self.max_display_value,
            start_date: self.start_date,
            rows: self.rows.clone(),
        }
    }
}

/// Resolve the population for `config.region`.
///
/// An explicit override wins and skips the registry entirely, so regions that
/// are absent from the table still work when a figure is supplied.
pub fn resolve_region(config: &RunConfig) -> Result<(Region, PopulationOrigin), AppError> {
    if let Some(population) = config.population_override {
        return Ok((
            Region {
                name: config.region.clone(),
                population,
            },
            PopulationOrigin::Override,
        ));
    }

    let population = match &config.population_file {
        Some(path) => PopulationRegistry::builtin()
            .with_overrides_from_csv(path)?
            .lookup(&config.region)?,
        None => PopulationRegistry::builtin().lookup(&config.region)?,
    };

    Ok((
        Region {
            name: config.region.clone(),
            population,
        },
        PopulationOrigin::Registry,
    ))
}

/// Execute the full pipeline and return the computed outputs.
pub fn run(config: &RunConfig) -> Result<RunOutput, AppError> {
    // Resolve the population first so a bad region fails before any fetch.
    let resolved = resolve_region(config)?;
    log::info!("reading case feed {}", config.source.describe());
    let ingest = load_region_series(&config.source, &config.columns, &config.region)?;
    run_resolved(config, resolved, ingest)
}

/// Execute the pipeline over an already-ingested series.
pub fn run_with_series(config: &RunConfig, ingest: IngestedSeries) -> Result<RunOutput, AppError> {
    let resolved = resolve_region(config)?;
    run_resolved(config, resolved, ingest)
}

fn run_resolved(
    config: &RunConfig,
    (region, population_origin): (Region, PopulationOrigin),
    ingest: IngestedSeries,
) -> Result<RunOutput, AppError> {
    log::info!(
        "region '{}' population {} ({:?}); {} of {} feed rows matched",
        region.name,
        region.population,
        population_origin,
        ingest.rows_matched,
        ingest.rows_read
    );
    for err in &ingest.row_errors {
        log::warn!("skipped feed line {}: {}", err.line, err.message);
    }
    if ingest.records.is_empty() {
        log::warn!("no usable rows for region '{}' in the feed", region.name);
    }

    let decreases = find_decreases(&ingest.records);
    for d in &decreases {
        log::warn!(
            "cumulative cases decrease at row {} ({}): {} -> {}",
            d.row,
            d.date,
            d.previous,
            d.current
        );
    }

    let rows = derive_records(&ingest.records, region.population, config.max_display_value)?;
    let summary = summarize(&rows);

    Ok(RunOutput {
        region,
        population_origin,
        max_display_value: config.max_display_value,
        start_date: config.start_date,
        ingest,
        rows,
        decreases,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DailyRecord, FeedColumns, SourceSpec};
    use crate::error::ErrorKind;
    use std::path::PathBuf;

    fn config(region: &str, population_override: Option<i64>) -> RunConfig {
        RunConfig {
            region: region.to_string(),
            population_override,
            population_file: None,
            max_display_value: 100.0,
            start_date: None,
            source: SourceSpec::File(PathBuf::from("unused.csv")),
            columns: FeedColumns::default(),
            plot: false,
            plot_width: 60,
            plot_height: 12,
        }
    }

    fn ingest(values: &[u64]) -> IngestedSeries {
        let start = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        IngestedSeries {
            region: "Bremen".to_string(),
            records: values
                .iter()
                .enumerate()
                .map(|(i, &v)| DailyRecord::new(start + chrono::Duration::days(i as i64), v))
                .collect(),
            row_errors: Vec::new(),
            rows_read: values.len(),
            rows_matched: values.len(),
        }
    }

    #[test]
    fn registry_population_is_used_by_default() {
        let (region, origin) = resolve_region(&config("Bremen", None)).unwrap();
        assert_eq!(region.population, 681_202);
        assert_eq!(origin, PopulationOrigin::Registry);
    }

    #[test]
    fn override_bypasses_registry() {
        let (region, origin) = resolve_region(&config("Nowhere", Some(1_000_000))).unwrap();
        assert_eq!(region.population, 1_000_000);
        assert_eq!(origin, PopulationOrigin::Override);
    }

    #[test]
    fn unknown_region_is_not_found() {
        let err = resolve_region(&config("Nowhere", None)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn non_positive_override_is_invalid() {
        let err = run_with_series(&config("Bremen", Some(0)), ingest(&[1, 2])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn run_with_series_derives_and_flags_decreases() {
        let out = run_with_series(
            &config("Bremen", Some(1_000_000)),
            ingest(&[100, 150, 200, 250, 300, 350, 400, 500, 560, 555]),
        )
        .unwrap();

        assert_eq!(out.rows.len(), 10);
        assert!((out.rows[7].window7_rate - 50.0).abs() < 1e-9);
        assert_eq!(out.decreases.len(), 1);
        assert_eq!(out.decreases[0].row, 10);

        let summary = out.summary.as_ref().unwrap();
        assert!((summary.peak_window7 - 50.0).abs() < 1e-9);

        let export = out.to_export();
        assert_eq!(export.rows.len(), 10);
        assert_eq!(export.population_origin, PopulationOrigin::Override);
    }

    #[test]
    fn empty_series_runs_cleanly() {
        let out = run_with_series(&config("Bremen", None), ingest(&[])).unwrap();
        assert!(out.rows.is_empty());
        assert!(out.summary.is_none());
    }
}
