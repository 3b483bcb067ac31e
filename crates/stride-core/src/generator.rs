//! The `PlanGenerator` trait -- the interface for training methodologies.
//!
//! A methodology turns a requested plan length into a populated [`Plan`].
//! [`DanielsGenerator`] is the four-phase methodology used by the CLI.

use crate::allocation::allocate;
use crate::model::Plan;

/// Builds a training plan of a requested length.
///
/// The trait is object-safe so generators can be stored as
/// `Box<dyn PlanGenerator>`.
pub trait PlanGenerator {
    /// Human-readable methodology name.
    fn name(&self) -> &str;

    /// Build a plan with up to `total_weeks` weeks.
    fn generate(&self, total_weeks: i64) -> Plan;
}

const _: () = {
    fn _assert_object_safe(_: &dyn PlanGenerator) {}
};

/// Four-phase periodization: Foundation, Early Quality, Transition Quality,
/// Final Quality.
#[derive(Debug, Clone, Copy, Default)]
pub struct DanielsGenerator;

impl PlanGenerator for DanielsGenerator {
    fn name(&self) -> &str {
        "daniels"
    }

    fn generate(&self, total_weeks: i64) -> Plan {
        let mut plan = Plan::new();
        allocate(&mut plan, total_weeks);
        plan
    }
}

/// Generate a four-phase plan of `total_weeks` weeks (at most 24).
pub fn generate_plan(total_weeks: i64) -> Plan {
    DanielsGenerator.generate(total_weeks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generator_is_usable_as_trait_object() {
        let generator: Box<dyn PlanGenerator> = Box::new(DanielsGenerator);
        assert_eq!(generator.name(), "daniels");
        let plan = generator.generate(9);
        assert_eq!(plan.phase_week_counts(), [3, 0, 3, 3]);
    }

    #[test]
    fn generate_plan_always_has_four_phases() {
        for weeks in [-3, 0, 1, 3, 6, 12, 24, 40] {
            assert_eq!(generate_plan(weeks).phases().len(), 4);
        }
    }

    #[test]
    fn generate_plan_matches_direct_allocation() {
        let mut plan = Plan::new();
        allocate(&mut plan, 17);
        assert_eq!(generate_plan(17), plan);
    }
}
