mod config;
mod estimate_cmd;
mod paces_cmd;
mod plan_cmd;
#[cfg(test)]
mod test_util;

use anyhow::bail;
use clap::{CommandFactory, Parser, Subcommand};

use stride_core::{Intensity, RaceDistance};

use config::StrideConfig;
use paces_cmd::PacesFormat;
use plan_cmd::PlanFormat;

#[derive(Parser)]
#[command(
    name = "stride",
    about = "Periodized running plans and fitness-based training paces"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a stride config file
    Init {
        /// Default plan length in weeks
        #[arg(long)]
        weeks: Option<i64>,
        /// Current fitness score (VDOT)
        #[arg(long)]
        fitness_score: Option<f64>,
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
    /// Generate a training plan (at most 24 weeks)
    Plan {
        /// Plan length in weeks (overrides STRIDE_WEEKS and the config file)
        #[arg(allow_negative_numbers = true)]
        weeks: Option<i64>,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: PlanFormat,
    },
    /// Show target training paces for a fitness score
    Paces {
        /// Fitness score (overrides STRIDE_FITNESS_SCORE and the config file)
        fitness_score: Option<f64>,
        /// Show a single intensity: E, M, T, I or R
        #[arg(long)]
        only: Option<Intensity>,
        /// Output format
        #[arg(long, value_enum, default_value_t)]
        format: PacesFormat,
    },
    /// Estimate a fitness score from a race result
    Estimate {
        /// Race distance: half, 5k or mile
        #[arg(long)]
        distance: RaceDistance,
        /// Finishing time as seconds, m:ss or h:mm:ss
        #[arg(long)]
        time: String,
    },
    /// Print shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

/// Execute the `stride init` command: write config file.
fn cmd_init(weeks: Option<i64>, fitness_score: Option<f64>, force: bool) -> anyhow::Result<()> {
    let path = config::config_path();

    if path.exists() && !force {
        bail!(
            "config file already exists at {}\nUse --force to overwrite.",
            path.display()
        );
    }

    let cfg = config::ConfigFile {
        plan: config::PlanSection {
            weeks: weeks.unwrap_or(config::DEFAULT_WEEKS),
        },
        athlete: config::AthleteSection { fitness_score },
    };

    config::save_config(&cfg)?;

    println!("Config written to {}", path.display());
    println!("  plan.weeks = {}", cfg.plan.weeks);
    match cfg.athlete.fitness_score {
        Some(score) => println!("  athlete.fitness_score = {score}"),
        None => println!("  athlete.fitness_score is unset; `stride paces` will need one"),
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init {
            weeks,
            fitness_score,
            force,
        } => {
            cmd_init(weeks, fitness_score, force)?;
        }
        Commands::Plan { weeks, format } => {
            let resolved = StrideConfig::resolve(weeks, None)?;
            plan_cmd::run_plan(resolved.weeks, format)?;
        }
        Commands::Paces {
            fitness_score,
            only,
            format,
        } => {
            let resolved = StrideConfig::resolve(None, fitness_score)?;
            paces_cmd::run_paces(resolved.require_fitness_score()?, only, format)?;
        }
        Commands::Estimate { distance, time } => {
            estimate_cmd::run_estimate(distance, &time)?;
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "stride", &mut std::io::stdout());
        }
    }

    Ok(())
}
