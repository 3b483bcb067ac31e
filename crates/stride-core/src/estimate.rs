//! Fitness-score estimation from a race result.
//!
//! The interpolation table that maps a race time to a fitness score has not
//! been sourced yet, so [`estimate_fitness_score`] always fails with
//! [`EstimateError::NotImplemented`] instead of guessing.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

/// Race distances a fitness score can be estimated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RaceDistance {
    Half,
    FiveK,
    Mile,
}

impl fmt::Display for RaceDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Half => "half",
            Self::FiveK => "5k",
            Self::Mile => "mile",
        };
        f.write_str(s)
    }
}

/// Error returned when parsing an invalid [`RaceDistance`] string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid race distance {0:?} (expected half, 5k, or mile)")]
pub struct RaceDistanceParseError(pub String);

impl FromStr for RaceDistance {
    type Err = RaceDistanceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "half" => Ok(Self::Half),
            "5k" => Ok(Self::FiveK),
            "mile" => Ok(Self::Mile),
            _ => Err(RaceDistanceParseError(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    #[error("fitness-score estimation from a {distance} result is not implemented")]
    NotImplemented { distance: RaceDistance },
}

/// Estimate a fitness score from a race distance and finishing time.
///
/// Not implemented for any distance; always returns
/// [`EstimateError::NotImplemented`].
pub fn estimate_fitness_score(
    distance: RaceDistance,
    elapsed: Duration,
) -> Result<f64, EstimateError> {
    warn!(
        %distance,
        elapsed_secs = elapsed.as_secs(),
        "fitness-score estimation requested but not implemented"
    );
    Err(EstimateError::NotImplemented { distance })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_distance_reports_not_implemented() {
        for distance in [RaceDistance::Half, RaceDistance::FiveK, RaceDistance::Mile] {
            let err = estimate_fitness_score(distance, Duration::from_secs(1200)).unwrap_err();
            assert_eq!(err, EstimateError::NotImplemented { distance });
        }
    }

    #[test]
    fn not_implemented_message_names_distance() {
        let err = estimate_fitness_score(RaceDistance::FiveK, Duration::from_secs(1200))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "fitness-score estimation from a 5k result is not implemented"
        );
    }

    #[test]
    fn race_distance_parses_case_insensitively() {
        assert_eq!("HALF".parse::<RaceDistance>().unwrap(), RaceDistance::Half);
        assert_eq!("5K".parse::<RaceDistance>().unwrap(), RaceDistance::FiveK);
        assert_eq!("mile".parse::<RaceDistance>().unwrap(), RaceDistance::Mile);
        let err = "10k".parse::<RaceDistance>().unwrap_err();
        assert_eq!(err, RaceDistanceParseError("10k".to_owned()));
    }
}
