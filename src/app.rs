//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - prompts for missing region / display maximum
//! - runs the pipeline (feed -> transform)
//! - prints tables/plots or writes exports

use clap::Parser;

use crate::cli::picker::{prompt_for_max, prompt_for_region};
use crate::cli::{Command, ExportArgs, RegionsArgs, RunArgs};
use crate::data::resolve_source;
use crate::domain::{FeedColumns, RunConfig};
use crate::error::AppError;
use crate::registry::PopulationRegistry;

pub mod pipeline;

/// Entry point for the `incidence` binary.
pub fn run() -> Result<(), AppError> {
    // We want `incidence` and `incidence -r Bayern` to behave like
    // `incidence table ...`. Clap requires a subcommand name, so we rewrite
    // argv before parsing.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Table(args) => handle_table(args),
        Command::Plot(args) => handle_plot(args),
        Command::Export(args) => handle_export(args),
        Command::Regions(args) => handle_regions(args),
    }
}

fn handle_table(args: RunArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args)?;
    let run = pipeline::run(&config)?;

    println!("{}", crate::report::format_run_summary(&run));
    println!("{}", crate::report::format_table(&run.rows, config.start_date));

    if config.plot {
        let plot = crate::plot::render_rate_plot(
            &run.rows,
            config.start_date,
            config.max_display_value,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }
    Ok(())
}

fn handle_plot(args: RunArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args)?;
    let run = pipeline::run(&config)?;

    println!("{}", crate::report::format_run_summary(&run));
    let plot = crate::plot::render_rate_plot(
        &run.rows,
        config.start_date,
        config.max_display_value,
        config.plot_width,
        config.plot_height,
    );
    println!("{plot}");
    Ok(())
}

fn handle_export(args: ExportArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args.run)?;
    let run = pipeline::run(&config)?;

    crate::io::export::write_export(&args.output, args.format, &run.to_export())?;
    log::info!("wrote {} rows to {}", run.rows.len(), args.output.display());
    Ok(())
}

fn handle_regions(args: RegionsArgs) -> Result<(), AppError> {
    let registry = load_registry(args.population_file.as_deref())?;
    let filter = args.filter.map(|f| f.to_lowercase());

    for name in registry.regions() {
        if filter.as_ref().is_some_and(|f| !name.to_lowercase().contains(f.as_str())) {
            continue;
        }
        // Names come from the registry, so the lookup cannot miss.
        let population = registry.lookup(name)?;
        println!("{name}\t{population}");
    }
    Ok(())
}

fn load_registry(population_file: Option<&std::path::Path>) -> Result<PopulationRegistry, AppError> {
    match population_file {
        Some(path) => PopulationRegistry::builtin().with_overrides_from_csv(path),
        None => Ok(PopulationRegistry::builtin().clone()),
    }
}

/// Build a `RunConfig`, prompting for region and display maximum when the
/// flags are absent.
pub fn run_config_from_args(args: &RunArgs) -> Result<RunConfig, AppError> {
    let region = match &args.region {
        Some(region) => region.clone(),
        None => prompt_for_region(&load_registry(args.population_file.as_deref())?)?,
    };
    let max_display_value = match args.max {
        Some(max) => max,
        None => prompt_for_max()?,
    };
    let source = resolve_source(args.source.as_deref())?;

    Ok(RunConfig {
        region,
        population_override: args.population,
        population_file: args.population_file.clone(),
        max_display_value,
        start_date: args.start_date,
        source,
        columns: FeedColumns {
            date: args.date_column.clone(),
            region: args.region_column.clone(),
            cases: args.cases_column.clone(),
        },
        plot: args.plot,
        plot_width: args.width,
        plot_height: args.height,
    })
}

/// Rewrite argv so `incidence` defaults to `incidence table`.
///
/// Rules:
/// - `incidence`                      -> `incidence table`
/// - `incidence -r Bayern ...`        -> `incidence table -r Bayern ...`
/// - `incidence --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("table".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "table" | "plot" | "export" | "regions");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "table flags".
    if arg1.starts_with('-') {
        argv.insert(1, "table".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_invocation_defaults_to_table() {
        assert_eq!(rewrite_args(argv(&["incidence"])), argv(&["incidence", "table"]));
        assert_eq!(
            rewrite_args(argv(&["incidence", "-r", "Bayern"])),
            argv(&["incidence", "table", "-r", "Bayern"])
        );
    }

    #[test]
    fn subcommands_and_help_pass_through() {
        for first in ["plot", "export", "regions", "table", "--help", "-V", "help"] {
            let input = argv(&["incidence", first]);
            assert_eq!(rewrite_args(input.clone()), input);
        }
    }

    #[test]
    fn config_from_flags_needs_no_prompt() {
        let cli = crate::cli::Cli::try_parse_from(argv(&[
            "incidence", "table", "-r", "Hamburg", "-m", "50", "--population", "1000", "-s", "feed.csv",
            "--cases-column", "AnzahlFall",
        ]))
        .unwrap();
        let Command::Table(args) = cli.command else {
            panic!("expected table");
        };

        let config = run_config_from_args(&args).unwrap();
        assert_eq!(config.region, "Hamburg");
        assert_eq!(config.max_display_value, 50.0);
        assert_eq!(config.population_override, Some(1000));
        assert_eq!(config.columns.cases, "AnzahlFall");
        assert_eq!(config.columns.date, "date");
    }
}
