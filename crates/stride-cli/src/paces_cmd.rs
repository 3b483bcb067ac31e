//! `stride paces` command: print target training paces for a fitness score.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::Serialize;

use stride_core::{Intensity, TrainingPaces, format_pace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PacesFormat {
    /// Aligned table
    #[default]
    Text,
    /// JSON array of paces
    Json,
}

/// One row of the pace table.
#[derive(Debug, Serialize)]
struct PaceRow {
    intensity: Intensity,
    reference_distance: String,
    seconds: f64,
    formatted: String,
}

/// Run the paces command.
pub fn run_paces(
    fitness_score: f64,
    only: Option<Intensity>,
    format: PacesFormat,
) -> Result<()> {
    let stdout = std::io::stdout();
    write_paces(&mut stdout.lock(), fitness_score, only, format)
}

/// Write the pace table for `fitness_score` to `out`.
///
/// `only` restricts output to a single intensity.
pub fn write_paces(
    out: &mut impl Write,
    fitness_score: f64,
    only: Option<Intensity>,
    format: PacesFormat,
) -> Result<()> {
    let paces = TrainingPaces::for_fitness_score(fitness_score);
    let rows: Vec<PaceRow> = Intensity::ALL
        .into_iter()
        .filter(|intensity| only.is_none_or(|o| o == *intensity))
        .map(|intensity| {
            let seconds = paces.get(intensity);
            PaceRow {
                intensity,
                reference_distance: intensity.reference_distance().to_string(),
                seconds,
                formatted: format_pace(seconds),
            }
        })
        .collect();

    match format {
        PacesFormat::Text => {
            writeln!(out, "Training paces for fitness score {fitness_score}:")?;
            for row in &rows {
                writeln!(
                    out,
                    "  {:<2} {:<11} {:>6} /{:<5} ({:.1} s)",
                    row.intensity.code(),
                    row.intensity.to_string(),
                    row.formatted,
                    row.reference_distance,
                    row.seconds
                )?;
            }
        }
        PacesFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).context("failed to serialize paces")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}
