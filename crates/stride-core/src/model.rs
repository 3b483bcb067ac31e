//! Plan container model: Plan → Phase → Week → Day → Workout.
//!
//! Every level exclusively owns the level below it. Accessors hand out
//! references into the owning container; nothing is copied on read.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors raised when a container is constructed with an out-of-range identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid phase number {0} (training plans have phases 1 through 4)")]
    InvalidPhaseNumber(i64),

    #[error("invalid day of week {0} (must be an integer 1 through 7)")]
    InvalidDayOfWeek(i64),
}

// ---------------------------------------------------------------------------
// PhaseKind
// ---------------------------------------------------------------------------

/// The four stages of a periodized plan, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    Foundation,
    EarlyQuality,
    TransitionQuality,
    FinalQuality,
}

impl PhaseKind {
    /// All phases, ordered by phase number.
    pub const ALL: [PhaseKind; 4] = [
        Self::Foundation,
        Self::EarlyQuality,
        Self::TransitionQuality,
        Self::FinalQuality,
    ];

    /// One-based phase number.
    pub fn number(self) -> u8 {
        match self {
            Self::Foundation => 1,
            Self::EarlyQuality => 2,
            Self::TransitionQuality => 3,
            Self::FinalQuality => 4,
        }
    }

    /// Zero-based position of this phase within a [`Plan`].
    pub fn index(self) -> usize {
        usize::from(self.number() - 1)
    }

    /// Descriptive label fixed by the phase number.
    pub fn label(self) -> &'static str {
        match self {
            Self::Foundation => "Foundation",
            Self::EarlyQuality => "Early Quality",
            Self::TransitionQuality => "Transition Quality",
            Self::FinalQuality => "Final Quality",
        }
    }
}

impl TryFrom<i64> for PhaseKind {
    type Error = ModelError;

    fn try_from(number: i64) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Self::Foundation),
            2 => Ok(Self::EarlyQuality),
            3 => Ok(Self::TransitionQuality),
            4 => Ok(Self::FinalQuality),
            other => Err(ModelError::InvalidPhaseNumber(other)),
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// A training plan: exactly four phases, created empty and filled with weeks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plan {
    phases: [Phase; 4],
}

impl Plan {
    /// Create a plan with all four phases present and empty.
    pub fn new() -> Self {
        Self {
            phases: PhaseKind::ALL.map(Phase::from_kind),
        }
    }

    /// The phases in order.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Phase at a zero-based index, or `None` when out of range.
    pub fn phase(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    /// Mutable access to the phase of the given kind.
    ///
    /// Weeks added through here bypass [`crate::allocate`] and its
    /// [`crate::MAX_WEEKS`] cap.
    pub fn phase_mut(&mut self, kind: PhaseKind) -> &mut Phase {
        &mut self.phases[kind.index()]
    }

    /// Week at a zero-based index counted across all phases in phase order.
    pub fn week(&self, index: usize) -> Option<&Week> {
        let mut remaining = index;
        for phase in &self.phases {
            if remaining < phase.len() {
                return phase.week(remaining);
            }
            remaining -= phase.len();
        }
        None
    }

    /// Remove every week while keeping the four phases.
    pub fn clear_weeks(&mut self) {
        for phase in &mut self.phases {
            phase.clear_weeks();
        }
    }

    /// Total number of weeks across all phases.
    pub fn total_weeks(&self) -> usize {
        self.phases.iter().map(Phase::len).sum()
    }

    /// Week count per phase, in phase order.
    pub fn phase_week_counts(&self) -> [usize; 4] {
        [
            self.phases[0].len(),
            self.phases[1].len(),
            self.phases[2].len(),
            self.phases[3].len(),
        ]
    }
}

impl Default for Plan {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// A named stage of training owning its weeks in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Phase {
    kind: PhaseKind,
    weeks: Vec<Week>,
}

impl Phase {
    /// Create an empty phase from its one-based number.
    ///
    /// Fails with [`ModelError::InvalidPhaseNumber`] outside `1..=4`.
    pub fn new(number: i64) -> Result<Self, ModelError> {
        PhaseKind::try_from(number).map(Self::from_kind)
    }

    /// Create an empty phase of the given kind.
    pub fn from_kind(kind: PhaseKind) -> Self {
        Self {
            kind,
            weeks: Vec::new(),
        }
    }

    pub fn kind(&self) -> PhaseKind {
        self.kind
    }

    pub fn number(&self) -> u8 {
        self.kind.number()
    }

    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Week at a zero-based index within this phase.
    pub fn week(&self, index: usize) -> Option<&Week> {
        self.weeks.get(index)
    }

    pub fn week_mut(&mut self, index: usize) -> Option<&mut Week> {
        self.weeks.get_mut(index)
    }

    /// Number of weeks in this phase.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn add_week(&mut self, week: Week) {
        self.weeks.push(week);
    }

    pub fn extend_weeks(&mut self, weeks: impl IntoIterator<Item = Week>) {
        self.weeks.extend(weeks);
    }

    pub fn clear_weeks(&mut self) {
        self.weeks.clear();
    }
}

// ---------------------------------------------------------------------------
// Week
// ---------------------------------------------------------------------------

/// One week of training, numbered from the start of the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Week {
    number: u32,
    days: Vec<Day>,
}

impl Week {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            days: Vec::new(),
        }
    }

    /// One-based week number; week 1 is the first week chronologically.
    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn days(&self) -> &[Day] {
        &self.days
    }

    pub fn day(&self, index: usize) -> Option<&Day> {
        self.days.get(index)
    }

    pub fn day_mut(&mut self, index: usize) -> Option<&mut Day> {
        self.days.get_mut(index)
    }

    pub fn add_day(&mut self, day: Day) {
        self.days.push(day);
    }
}

// ---------------------------------------------------------------------------
// Day
// ---------------------------------------------------------------------------

/// A single training day holding zero or more workouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Day {
    day_of_week: u8,
    workouts: Vec<Workout>,
}

impl Day {
    /// Create a day for `day_of_week` in `1..=7`.
    pub fn new(day_of_week: i64) -> Result<Self, ModelError> {
        Ok(Self {
            day_of_week: validate_day_of_week(day_of_week)?,
            workouts: Vec::new(),
        })
    }

    pub fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// Change the day of week. The day is left untouched on error.
    pub fn set_day_of_week(&mut self, day_of_week: i64) -> Result<(), ModelError> {
        self.day_of_week = validate_day_of_week(day_of_week)?;
        Ok(())
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn workout(&self, index: usize) -> Option<&Workout> {
        self.workouts.get(index)
    }

    pub fn add_workout(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }
}

impl Default for Day {
    fn default() -> Self {
        Self {
            day_of_week: 1,
            workouts: Vec::new(),
        }
    }
}

fn validate_day_of_week(day_of_week: i64) -> Result<u8, ModelError> {
    match u8::try_from(day_of_week) {
        Ok(d @ 1..=7) => Ok(d),
        _ => Err(ModelError::InvalidDayOfWeek(day_of_week)),
    }
}

// ---------------------------------------------------------------------------
// Workout
// ---------------------------------------------------------------------------

/// An opaque, human-readable workout description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Workout {
    description: String,
}

impl Workout {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
