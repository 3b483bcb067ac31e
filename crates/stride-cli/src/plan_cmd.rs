//! `stride plan` command: generate a plan and print one of its projections.

use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use tracing::info;

use stride_core::{Plan, generate_plan, render};

/// Output projection for `stride plan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PlanFormat {
    /// Plan outline listing non-empty phases
    #[default]
    Summary,
    /// Indented tree of phases, weeks, days and workouts
    Pretty,
    /// Single-line nested rendering
    Compact,
    /// JSON serialization of the plan
    Json,
}

/// Run the plan command.
pub fn run_plan(weeks: i64, format: PlanFormat) -> Result<()> {
    info!(weeks, ?format, "generating plan");
    let plan = generate_plan(weeks);
    let stdout = std::io::stdout();
    write_plan(&mut stdout.lock(), &plan, format)
}

/// Write `plan` to `out` in the requested format.
pub fn write_plan(out: &mut impl Write, plan: &Plan, format: PlanFormat) -> Result<()> {
    let text = match format {
        PlanFormat::Summary => render::summary(plan),
        PlanFormat::Pretty => render::pretty(plan),
        PlanFormat::Compact => render::compact(plan),
        PlanFormat::Json => {
            serde_json::to_string_pretty(plan).context("failed to serialize plan")?
        }
    };
    writeln!(out, "{text}").context("failed to write plan")?;
    Ok(())
}
