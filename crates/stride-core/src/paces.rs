//! Target training paces derived from a fitness score (VDOT).
//!
//! Each intensity has a closed-form polynomial fit, accurate to within a few
//! seconds for fitness scores of roughly 34 to 74. Inputs are not range
//! checked; scores outside that band extrapolate and lose accuracy.
//!
//! Easy, marathon and threshold paces are seconds per mile. Interval and
//! repetition paces are seconds per 400 m.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Easy pace, seconds per mile.
pub fn easy_pace(fitness_score: f64) -> f64 {
    let v = fitness_score;
    -(v.powi(5) - 400.0 * v.powi(4) + 65_500.0 * v.powi(3) - 5_640_000.0 * v.powi(2)
        + 273_040_000.0 * v
        - 7_528_000_000.0)
        / 4_000_000.0
}

/// Marathon pace, seconds per mile.
pub fn marathon_pace(fitness_score: f64) -> f64 {
    let v = fitness_score;
    -(v.powi(5) - 310.0 * v.powi(4) + 39_500.0 * v.powi(3) - 2_675_000.0 * v.powi(2)
        + 103_860_000.0 * v
        - 2_342_400_000.0)
        / 1_200_000.0
}

/// Threshold pace, seconds per mile.
pub fn threshold_pace(fitness_score: f64) -> f64 {
    let v = fitness_score;
    -(6.0 * v.powi(5) - 1_825.0 * v.powi(4) + 226_500.0 * v.powi(3)
        - 14_787_500.0 * v.powi(2)
        + 545_190_000.0 * v
        - 11_538_000_000.0)
        / 6_000_000.0
}

/// Interval pace, seconds per 400 m.
pub fn interval_pace(fitness_score: f64) -> f64 {
    sextic_400m(fitness_score, 814_080_000_000.0)
}

/// Repetition pace, seconds per 400 m.
pub fn repetition_pace(fitness_score: f64) -> f64 {
    sextic_400m(fitness_score, 815_880_000_000.0)
}

/// Shared sextic for the 400 m paces; I and R differ only in the constant term.
fn sextic_400m(v: f64, constant: f64) -> f64 {
    -(43.0 * v.powi(6) - 14_365.0 * v.powi(5) + 1_958_500.0 * v.powi(4)
        - 139_117_500.0 * v.powi(3)
        + 5_406_220_000.0 * v.powi(2)
        - 107_825_600_000.0 * v
        + constant)
        / 300_000_000.0
}

/// Format a pace in seconds as `m:ss`, rounded to the nearest second.
pub fn format_pace(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "--:--".to_string();
    }
    let total = seconds.round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!("{sign}{}:{:02}", total / 60, total % 60)
}

// ---------------------------------------------------------------------------
// Intensity
// ---------------------------------------------------------------------------

/// Distance a pace is quoted over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceDistance {
    Mile,
    #[serde(rename = "400m")]
    FourHundredMeters,
}

impl fmt::Display for ReferenceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Mile => "mile",
            Self::FourHundredMeters => "400m",
        };
        f.write_str(s)
    }
}

/// Training intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Intensity {
    #[serde(rename = "E")]
    Easy,
    #[serde(rename = "M")]
    Marathon,
    #[serde(rename = "T")]
    Threshold,
    #[serde(rename = "I")]
    Interval,
    #[serde(rename = "R")]
    Repetition,
}

impl Intensity {
    pub const ALL: [Intensity; 5] = [
        Self::Easy,
        Self::Marathon,
        Self::Threshold,
        Self::Interval,
        Self::Repetition,
    ];

    /// Single-letter code (E, M, T, I, R).
    pub fn code(self) -> &'static str {
        match self {
            Self::Easy => "E",
            Self::Marathon => "M",
            Self::Threshold => "T",
            Self::Interval => "I",
            Self::Repetition => "R",
        }
    }

    pub fn reference_distance(self) -> ReferenceDistance {
        match self {
            Self::Easy | Self::Marathon | Self::Threshold => ReferenceDistance::Mile,
            Self::Interval | Self::Repetition => ReferenceDistance::FourHundredMeters,
        }
    }

    /// Target pace in seconds per [`Self::reference_distance`].
    pub fn pace(self, fitness_score: f64) -> f64 {
        match self {
            Self::Easy => easy_pace(fitness_score),
            Self::Marathon => marathon_pace(fitness_score),
            Self::Threshold => threshold_pace(fitness_score),
            Self::Interval => interval_pace(fitness_score),
            Self::Repetition => repetition_pace(fitness_score),
        }
    }

    /// Target pace in seconds per mile. 400 m paces are scaled by four laps.
    pub fn pace_per_mile(self, fitness_score: f64) -> f64 {
        match self.reference_distance() {
            ReferenceDistance::Mile => self.pace(fitness_score),
            ReferenceDistance::FourHundredMeters => self.pace(fitness_score) * 4.0,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Easy => "easy",
            Self::Marathon => "marathon",
            Self::Threshold => "threshold",
            Self::Interval => "interval",
            Self::Repetition => "repetition",
        };
        f.write_str(s)
    }
}

/// Error returned when parsing an invalid [`Intensity`] string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid intensity {0:?} (expected E, M, T, I or R)")]
pub struct IntensityParseError(pub String);

impl FromStr for Intensity {
    type Err = IntensityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "e" | "easy" => Ok(Self::Easy),
            "m" | "mp" | "marathon" => Ok(Self::Marathon),
            "t" | "threshold" => Ok(Self::Threshold),
            "i" | "interval" => Ok(Self::Interval),
            "r" | "repetition" => Ok(Self::Repetition),
            _ => Err(IntensityParseError(s.to_owned())),
        }
    }
}

// ---------------------------------------------------------------------------
// TrainingPaces
// ---------------------------------------------------------------------------

/// All five target paces for one fitness score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingPaces {
    pub fitness_score: f64,
    /// Seconds per mile.
    pub easy: f64,
    /// Seconds per mile.
    pub marathon: f64,
    /// Seconds per mile.
    pub threshold: f64,
    /// Seconds per 400 m.
    pub interval: f64,
    /// Seconds per 400 m.
    pub repetition: f64,
}

impl TrainingPaces {
    pub fn for_fitness_score(fitness_score: f64) -> Self {
        let paces = Self {
            fitness_score,
            easy: easy_pace(fitness_score),
            marathon: marathon_pace(fitness_score),
            threshold: threshold_pace(fitness_score),
            interval: interval_pace(fitness_score),
            repetition: repetition_pace(fitness_score),
        };
        debug!(?paces, "derived training paces");
        paces
    }

    /// Pace for one intensity.
    pub fn get(&self, intensity: Intensity) -> f64 {
        match intensity {
            Intensity::Easy => self.easy,
            Intensity::Marathon => self.marathon,
            Intensity::Threshold => self.threshold,
            Intensity::Interval => self.interval,
            Intensity::Repetition => self.repetition,
        }
    }
}
