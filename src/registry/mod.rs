//! Population registry: region name -> population.
//!
//! The built-in table is parsed once on first use and never mutated. Lookups
//! are exact (case- and punctuation-sensitive) so a misspelt region surfaces
//! as `NotFound` instead of silently picking a neighbour.

use std::collections::HashMap;
use std::fs::File;
use std::path::Path;
use std::sync::LazyLock;

use crate::error::AppError;
use crate::io::ingest::build_header_map;

mod table;

static BUILTIN: LazyLock<PopulationRegistry> = LazyLock::new(|| PopulationRegistry {
    entries: table::POPULATION_TABLE
        .iter()
        .map(|&(name, population)| (name.to_string(), population))
        .collect(),
});

#[derive(Debug, Clone)]
pub struct PopulationRegistry {
    entries: HashMap<String, i64>,
}

impl PopulationRegistry {
    /// The process-wide built-in registry.
    pub fn builtin() -> &'static PopulationRegistry {
        &BUILTIN
    }

    /// Build a registry from arbitrary pairs.
    ///
    /// Rejects non-positive populations and duplicate names.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let mut map = HashMap::new();
        for (name, population) in entries {
            let name = name.into();
            check_population(&name, population)?;
            if map.insert(name.clone(), population).is_some() {
                return Err(AppError::invalid_parameter(format!(
                    "Duplicate region '{name}' in population table."
                )));
            }
        }
        Ok(Self { entries: map })
    }

    /// Return a copy of this registry with entries added or replaced from a
    /// `region,population` CSV file.
    pub fn with_overrides_from_csv(&self, path: &Path) -> Result<Self, AppError> {
        let file = File::open(path).map_err(|e| {
            AppError::input(format!(
                "Failed to open population file '{}': {e}",
                path.display()
            ))
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| AppError::input(format!("Failed to read population file headers: {e}")))?
            .clone();
        let header_map = build_header_map(&headers);

        let (Some(&name_idx), Some(&pop_idx)) =
            (header_map.get("region"), header_map.get("population"))
        else {
            return Err(AppError::input(
                "Population file needs `region` and `population` columns.",
            ));
        };

        let mut merged = self.clone();
        for (idx, result) in reader.records().enumerate() {
            let line = idx + 2;
            let record = result
                .map_err(|e| AppError::input(format!("Population file line {line}: {e}")))?;

            let name = record.get(name_idx).unwrap_or("").to_string();
            if name.is_empty() {
                return Err(AppError::input(format!(
                    "Population file line {line}: empty region name."
                )));
            }
            let raw = record.get(pop_idx).unwrap_or("");
            let population: i64 = raw.parse().map_err(|_| {
                AppError::input(format!(
                    "Population file line {line}: invalid population '{raw}'."
                ))
            })?;
            check_population(&name, population)?;

            if merged.entries.insert(name.clone(), population).is_some() {
                log::debug!("population override for '{name}': {population}");
            }
        }

        Ok(merged)
    }

    /// Exact-match lookup.
    pub fn lookup(&self, name: &str) -> Result<i64, AppError> {
        if let Some(&population) = self.entries.get(name) {
            return Ok(population);
        }

        let message = match self.suggest(name) {
            Some(candidate) => format!(
                "Region '{name}' not found in population registry. Did you mean '{candidate}'?"
            ),
            None => format!(
                "Region '{name}' not found in population registry. Use `incidence regions` to list known names or pass `--population`."
            ),
        };
        Err(AppError::not_found(message))
    }

    /// Known region names, sorted.
    pub fn regions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A registry name equal to `name` ignoring case and surrounding
    /// whitespace. Only used to improve the `NotFound` message.
    fn suggest(&self, name: &str) -> Option<&str> {
        let wanted = name.trim().to_lowercase();
        self.regions()
            .into_iter()
            .find(|candidate| candidate.to_lowercase() == wanted)
    }
}

fn check_population(name: &str, population: i64) -> Result<(), AppError> {
    if population <= 0 {
        return Err(AppError::invalid_parameter(format!(
            "Population for '{name}' must be > 0 (got {population})."
        )));
    }
    Ok(())
}
