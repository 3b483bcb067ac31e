//! Configuration file management for stride.
//!
//! Provides a TOML-based config file at `~/.config/stride/config.toml` and a
//! resolution chain: CLI argument > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Plan length used when nothing else is configured.
pub const DEFAULT_WEEKS: i64 = 24;

pub const WEEKS_ENV: &str = "STRIDE_WEEKS";
pub const FITNESS_SCORE_ENV: &str = "STRIDE_FITNESS_SCORE";

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub plan: PlanSection,
    #[serde(default)]
    pub athlete: AthleteSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlanSection {
    /// Default plan length in weeks.
    #[serde(default = "default_weeks")]
    pub weeks: i64,
}

impl Default for PlanSection {
    fn default() -> Self {
        Self {
            weeks: DEFAULT_WEEKS,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AthleteSection {
    /// Current fitness score (VDOT), used for pace tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_score: Option<f64>,
}

fn default_weeks() -> i64 {
    DEFAULT_WEEKS
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the stride config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/stride` or `~/.config/stride`,
/// including on macOS.
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("stride");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("stride")
}

/// Return the path to the stride config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix.
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct StrideConfig {
    pub weeks: i64,
    pub fitness_score: Option<f64>,
}

impl StrideConfig {
    /// Resolve configuration using the chain: CLI argument > env var > config file > default.
    ///
    /// - Weeks: `cli_weeks` > `STRIDE_WEEKS` > `plan.weeks` > [`DEFAULT_WEEKS`]
    /// - Fitness score: `cli_fitness_score` > `STRIDE_FITNESS_SCORE` > `athlete.fitness_score` > unset
    pub fn resolve(cli_weeks: Option<i64>, cli_fitness_score: Option<f64>) -> Result<Self> {
        let file_config = match load_config() {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                if config_path().exists() {
                    warn!(error = %format!("{e:#}"), "ignoring unreadable config file");
                }
                None
            }
        };

        let weeks = if let Some(weeks) = cli_weeks {
            weeks
        } else if let Ok(raw) = std::env::var(WEEKS_ENV) {
            raw.trim()
                .parse()
                .with_context(|| format!("{WEEKS_ENV} is not an integer: {raw:?}"))?
        } else if let Some(ref cfg) = file_config {
            cfg.plan.weeks
        } else {
            DEFAULT_WEEKS
        };

        let fitness_score = if let Some(score) = cli_fitness_score {
            Some(score)
        } else if let Ok(raw) = std::env::var(FITNESS_SCORE_ENV) {
            let score = raw
                .trim()
                .parse()
                .with_context(|| format!("{FITNESS_SCORE_ENV} is not a number: {raw:?}"))?;
            Some(score)
        } else {
            file_config.and_then(|cfg| cfg.athlete.fitness_score)
        };

        Ok(Self {
            weeks,
            fitness_score,
        })
    }

    /// The resolved fitness score, or an error explaining how to provide one.
    pub fn require_fitness_score(&self) -> Result<f64> {
        match self.fitness_score {
            Some(score) => Ok(score),
            None => bail!(
                "fitness score not found; pass one, set {FITNESS_SCORE_ENV}, or run `stride init --fitness-score <score>`"
            ),
        }
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
