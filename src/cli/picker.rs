//! Interactive prompts for values not given on the command line.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles structured flags/subcommands
//! - the picker provides the "run `incidence` and answer two questions" UX
//!
//! Prompts are generic over reader/writer so they can be driven in tests.

use std::io::{self, BufRead, Write};

use crate::error::AppError;
use crate::registry::PopulationRegistry;

/// Prompt the user to choose a region from the registry.
///
/// Behavior:
/// - list known regions
/// - accept either a number (from the list) or an exact region name
/// - `q` cancels
pub fn prompt_for_region(registry: &PopulationRegistry) -> Result<String, AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    pick_region(&registry.regions(), &mut input, &mut output)
}

/// Prompt the user for the display maximum (per 100k).
pub fn prompt_for_max() -> Result<f64, AppError> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    pick_max(&mut input, &mut output)
}

fn pick_region<R: BufRead, W: Write>(names: &[&str], input: &mut R, output: &mut W) -> Result<String, AppError> {
    if names.is_empty() {
        return Err(AppError::input("No regions available. Provide one with `--region`."));
    }

    say(output, &format!("Known regions ({}):\n", names.len()))?;
    for (idx, name) in names.iter().enumerate() {
        say(output, &format!("{:>3}) {name}\n", idx + 1))?;
    }

    loop {
        say(
            output,
            &format!("Select a region by number (1-{}) or name (q to quit): ", names.len()),
        )?;
        let answer = read_answer(input, "Provide a region with `--region`.")?;

        if let Ok(choice) = answer.parse::<usize>() {
            if (1..=names.len()).contains(&choice) {
                return Ok(names[choice - 1].to_string());
            }
            say(output, &format!("Out of range: {choice}\n"))?;
            continue;
        }

        if let Some(name) = names.iter().find(|&&n| n == answer) {
            return Ok(name.to_string());
        }
        say(output, &format!("Unknown region: {answer}\n"))?;
    }
}

fn pick_max<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64, AppError> {
    loop {
        say(output, "Display maximum per 100k (e.g. 200, q to quit): ")?;
        let answer = read_answer(input, "Provide the display maximum with `--max`.")?;

        match answer.parse::<f64>() {
            Ok(v) if v.is_finite() && v > 0.0 => return Ok(v),
            _ => say(output, &format!("Not a positive number: {answer}\n"))?,
        }
    }
}

/// Read one trimmed, non-empty line. EOF and `q` are errors.
fn read_answer<R: BufRead>(input: &mut R, hint: &str) -> Result<String, AppError> {
    loop {
        let mut line = String::new();
        let bytes = input
            .read_line(&mut line)
            .map_err(|e| AppError::input(format!("Failed to read input: {e}")))?;

        if bytes == 0 {
            return Err(AppError::input(format!("No input received. {hint}")));
        }

        let answer = line.trim();
        if answer.is_empty() {
            continue;
        }
        if answer.eq_ignore_ascii_case("q") {
            return Err(AppError::input("Canceled."));
        }
        return Ok(answer.to_string());
    }
}

fn say<W: Write>(output: &mut W, text: &str) -> Result<(), AppError> {
    output
        .write_all(text.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|e| AppError::input(format!("Failed to write prompt: {e}")))
}
