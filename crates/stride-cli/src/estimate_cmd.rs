//! `stride estimate` command: estimate a fitness score from a race result.

use std::time::Duration;

use anyhow::{Context, Result};
use thiserror::Error;

use stride_core::{RaceDistance, estimate_fitness_score};

/// Errors parsing a race time argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ElapsedParseError {
    #[error("empty race time")]
    Empty,

    #[error("invalid race time {0:?} (expected seconds, m:ss, or h:mm:ss)")]
    Malformed(String),

    #[error("race time {0:?} has a minutes or seconds field of 60 or more")]
    FieldOutOfRange(String),

    #[error("race time {0:?} is too large")]
    TooLarge(String),
}

/// Parse `ss`, `m:ss`, or `h:mm:ss` into a duration.
pub fn parse_elapsed(raw: &str) -> Result<Duration, ElapsedParseError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ElapsedParseError::Empty);
    }

    let fields = raw
        .split(':')
        .map(|f| f.parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| ElapsedParseError::Malformed(raw.to_owned()))?;

    let (hours, minutes, seconds) = match fields.as_slice() {
        [s] => (0, 0, *s),
        [m, s] => (0, *m, *s),
        [h, m, s] => {
            if *m >= 60 {
                return Err(ElapsedParseError::FieldOutOfRange(raw.to_owned()));
            }
            (*h, *m, *s)
        }
        _ => return Err(ElapsedParseError::Malformed(raw.to_owned())),
    };
    if fields.len() > 1 && seconds >= 60 {
        return Err(ElapsedParseError::FieldOutOfRange(raw.to_owned()));
    }

    hours
        .checked_mul(3600)
        .and_then(|total| total.checked_add(minutes.checked_mul(60)?))
        .and_then(|total| total.checked_add(seconds))
        .map(Duration::from_secs)
        .ok_or_else(|| ElapsedParseError::TooLarge(raw.to_owned()))
}

/// Run the estimate command.
pub fn run_estimate(distance: RaceDistance, time: &str) -> Result<()> {
    let elapsed =
        parse_elapsed(time).with_context(|| format!("invalid --time value: {time}"))?;
    let score = estimate_fitness_score(distance, elapsed)?;
    println!("Estimated fitness score: {score:.1}");
    Ok(())
}
