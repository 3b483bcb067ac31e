//! Core library for periodized endurance-training plans.
//!
//! - [`model`]: the Plan → Phase → Week → Day → Workout containers.
//! - [`allocation`]: assigns week numbers to the four training phases.
//! - [`generator`]: the [`generator::PlanGenerator`] seam and its default implementation.
//! - [`paces`]: target training paces derived from a fitness score.
//! - [`estimate`]: fitness-score estimation from a race result (not yet implemented).
//! - [`render`]: read-only text projections of a plan.

pub mod allocation;
pub mod estimate;
pub mod generator;
pub mod model;
pub mod paces;
pub mod render;

pub use allocation::{MAX_WEEKS, allocate, phase_for_week};
pub use estimate::{EstimateError, RaceDistance, estimate_fitness_score};
pub use generator::{DanielsGenerator, PlanGenerator, generate_plan};
pub use model::{Day, ModelError, Phase, PhaseKind, Plan, Week, Workout};
pub use paces::{
    Intensity, ReferenceDistance, TrainingPaces, easy_pace, format_pace, interval_pace,
    marathon_pace, repetition_pace, threshold_pace,
};
