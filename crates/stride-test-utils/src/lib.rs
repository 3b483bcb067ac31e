//! Shared fixtures for stride integration tests.
//!
//! Builds plans with days and workouts filled in, so tests of the renderers
//! and the CLI don't have to repeat the container plumbing.

use stride_core::{Day, Phase, Plan, Week, Workout, generate_plan};

/// Workouts used by [`sample_day`], in insertion order.
pub const SAMPLE_WORKOUTS: [&str; 2] = ["E", "2 x 5 min @ T"];

/// A day with the [`SAMPLE_WORKOUTS`].
///
/// # Panics
///
/// Panics if `day_of_week` is outside `1..=7`.
pub fn sample_day(day_of_week: i64) -> Day {
    let mut day = Day::new(day_of_week).expect("fixture day_of_week must be 1..=7");
    for description in SAMPLE_WORKOUTS {
        day.add_workout(Workout::new(description));
    }
    day
}

/// A week with one sample day on each of `days`.
pub fn sample_week(number: u32, days: &[i64]) -> Week {
    let mut week = Week::new(number);
    for &day_of_week in days {
        week.add_day(sample_day(day_of_week));
    }
    week
}

/// A generated plan whose every week has sample workouts on days 1, 3 and 5.
pub fn plan_with_workouts(total_weeks: i64) -> Plan {
    let skeleton = generate_plan(total_weeks);
    let mut plan = Plan::new();
    for phase in skeleton.phases() {
        let target = plan.phase_mut(phase.kind());
        for week in phase.weeks() {
            target.add_week(sample_week(week.number(), &[1, 3, 5]));
        }
    }
    plan
}

/// Week numbers of a phase, in stored order.
pub fn week_numbers(phase: &Phase) -> Vec<u32> {
    phase.weeks().iter().map(Week::number).collect()
}

/// Every week number in the plan, phase by phase.
pub fn all_week_numbers(plan: &Plan) -> Vec<u32> {
    plan.phases().iter().flat_map(week_numbers).collect()
}
