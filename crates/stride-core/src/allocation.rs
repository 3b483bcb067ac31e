//! Week-to-phase allocation.
//!
//! Each week number is assigned to exactly one phase by an ordered table of
//! week ranges. Which weeks of a plan land in a phase depends on how long the
//! plan is: a 3-week plan only touches the foundation phase, a 6-week plan
//! adds final-quality weeks, and the other phases fill in as the plan grows
//! toward [`MAX_WEEKS`].

use std::ops::RangeInclusive;

use tracing::{debug, info, warn};

use crate::model::{PhaseKind, Plan, Week};

/// Longest plan that can be generated. Longer requests are truncated.
pub const MAX_WEEKS: u32 = 24;

/// One entry of the allocation table: the weeks that belong to `phase`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseRule {
    pub phase: PhaseKind,
    pub weeks: &'static [RangeInclusive<u32>],
}

impl PhaseRule {
    /// Whether `week` falls inside any of this rule's ranges.
    pub fn matches(&self, week: u32) -> bool {
        self.weeks.iter().any(|range| range.contains(&week))
    }
}

/// Allocation table, in evaluation order. The first matching rule wins.
///
/// The ranges are disjoint and together cover `1..=MAX_WEEKS`.
pub static PHASE_RULES: [PhaseRule; 4] = [
    PhaseRule {
        phase: PhaseKind::FinalQuality,
        weeks: &[24..=24, 22..=22, 17..=17, 4..=6],
    },
    PhaseRule {
        phase: PhaseKind::TransitionQuality,
        weeks: &[14..=16, 7..=9],
    },
    PhaseRule {
        phase: PhaseKind::EarlyQuality,
        weeks: &[18..=20, 10..=12],
    },
    PhaseRule {
        phase: PhaseKind::Foundation,
        weeks: &[23..=23, 21..=21, 13..=13, 1..=3],
    },
];

/// Phase that week number `week` belongs to, or `None` outside the table.
pub fn phase_for_week(week: u32) -> Option<PhaseKind> {
    PHASE_RULES
        .iter()
        .find(|rule| rule.matches(week))
        .map(|rule| rule.phase)
}

/// Fill `plan` with weeks `1..=min(requested, MAX_WEEKS)`.
///
/// Any weeks already in `plan` are discarded first. Weeks are then created in
/// ascending order and appended to their phase, so every phase ends up sorted
/// by week number. Non-positive requests leave all four phases empty. Returns
/// the number of weeks created.
pub fn allocate(plan: &mut Plan, requested: i64) -> usize {
    if plan.total_weeks() > 0 {
        debug!(existing = plan.total_weeks(), "discarding previously allocated weeks");
        plan.clear_weeks();
    }

    if requested <= 0 {
        warn!(requested, "non-positive plan length; no weeks allocated");
        return 0;
    }

    let last = match u32::try_from(requested) {
        Ok(n) if n <= MAX_WEEKS => n,
        _ => {
            warn!(
                requested,
                max = MAX_WEEKS,
                "plan length exceeds maximum; truncating"
            );
            MAX_WEEKS
        }
    };

    let mut created = 0;
    for number in 1..=last {
        let Some(kind) = phase_for_week(number) else {
            continue;
        };
        debug!(week = number, phase = %kind, "allocating week");
        plan.phase_mut(kind).add_week(Week::new(number));
        created += 1;
    }

    info!(
        requested,
        weeks = created,
        counts = ?plan.phase_week_counts(),
        "allocated plan weeks"
    );
    created
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_for(requested: i64) -> [usize; 4] {
        let mut plan = Plan::new();
        allocate(&mut plan, requested);
        plan.phase_week_counts()
    }

    #[test]
    fn table_covers_every_week_exactly_once() {
        for week in 1..=MAX_WEEKS {
            let hits = PHASE_RULES.iter().filter(|r| r.matches(week)).count();
            assert_eq!(hits, 1, "week {week} matched {hits} rules");
        }
        assert!(phase_for_week(0).is_none());
        assert!(phase_for_week(MAX_WEEKS + 1).is_none());
    }

    #[test]
    fn final_quality_rule() {
        let rule = &PHASE_RULES[0];
        assert_eq!(rule.phase, PhaseKind::FinalQuality);
        let weeks: Vec<u32> = (1..=MAX_WEEKS).filter(|w| rule.matches(*w)).collect();
        assert_eq!(weeks, vec![4, 5, 6, 17, 22, 24]);
    }

    #[test]
    fn transition_quality_rule() {
        let rule = &PHASE_RULES[1];
        assert_eq!(rule.phase, PhaseKind::TransitionQuality);
        let weeks: Vec<u32> = (1..=MAX_WEEKS).filter(|w| rule.matches(*w)).collect();
        assert_eq!(weeks, vec![7, 8, 9, 14, 15, 16]);
    }

    #[test]
    fn early_quality_rule() {
        let rule = &PHASE_RULES[2];
        assert_eq!(rule.phase, PhaseKind::EarlyQuality);
        let weeks: Vec<u32> = (1..=MAX_WEEKS).filter(|w| rule.matches(*w)).collect();
        assert_eq!(weeks, vec![10, 11, 12, 18, 19, 20]);
    }

    #[test]
    fn foundation_rule() {
        let rule = &PHASE_RULES[3];
        assert_eq!(rule.phase, PhaseKind::Foundation);
        let weeks: Vec<u32> = (1..=MAX_WEEKS).filter(|w| rule.matches(*w)).collect();
        assert_eq!(weeks, vec![1, 2, 3, 13, 21, 23]);
    }

    #[test]
    fn reference_plan_lengths() {
        assert_eq!(counts_for(3), [3, 0, 0, 0]);
        assert_eq!(counts_for(6), [3, 0, 0, 3]);
        assert_eq!(counts_for(9), [3, 0, 3, 3]);
        assert_eq!(counts_for(12), [3, 3, 3, 3]);
        assert_eq!(counts_for(24), [6, 6, 6, 6]);
    }

    #[test]
    fn long_requests_are_truncated() {
        assert_eq!(counts_for(26), [6, 6, 6, 6]);
        assert_eq!(counts_for(i64::MAX), [6, 6, 6, 6]);

        let mut capped = Plan::new();
        assert_eq!(allocate(&mut capped, 100), 24);
        let mut exact = Plan::new();
        allocate(&mut exact, 24);
        assert_eq!(capped, exact);
    }

    #[test]
    fn non_positive_requests_leave_phases_empty() {
        for requested in [0, -1, i64::MIN] {
            let mut plan = Plan::new();
            assert_eq!(allocate(&mut plan, requested), 0);
            assert_eq!(plan.phases().len(), 4);
            assert_eq!(plan.total_weeks(), 0);
        }
    }

    #[test]
    fn created_count_matches_plan_length() {
        for requested in 1..=MAX_WEEKS {
            let mut plan = Plan::new();
            let created = allocate(&mut plan, i64::from(requested));
            assert_eq!(created, requested as usize);
            assert_eq!(plan.total_weeks(), requested as usize);
        }
    }

    #[test]
    fn weeks_are_appended_in_ascending_order() {
        let mut plan = Plan::new();
        allocate(&mut plan, 24);
        for phase in plan.phases() {
            let numbers: Vec<u32> = phase.weeks().iter().map(Week::number).collect();
            assert!(
                numbers.windows(2).all(|w| w[0] < w[1]),
                "phase {} not ascending: {numbers:?}",
                phase.number()
            );
        }
        let foundation: Vec<u32> = plan.phases()[0].weeks().iter().map(Week::number).collect();
        assert_eq!(foundation, vec![1, 2, 3, 13, 21, 23]);
    }

    #[test]
    fn reallocating_replaces_existing_weeks() {
        let mut plan = Plan::new();
        allocate(&mut plan, 24);
        assert_eq!(allocate(&mut plan, 24), 24);
        assert_eq!(plan.total_weeks(), 24);
        for phase in plan.phases() {
            let numbers: Vec<u32> = phase.weeks().iter().map(Week::number).collect();
            assert!(
                numbers.windows(2).all(|w| w[0] < w[1]),
                "phase {} not ascending: {numbers:?}",
                phase.number()
            );
        }

        allocate(&mut plan, 6);
        assert_eq!(plan.phase_week_counts(), [3, 0, 0, 3]);

        allocate(&mut plan, -1);
        assert_eq!(plan.total_weeks(), 0);
    }

    #[test]
    fn twelve_week_plan_places_last_weeks_in_early_quality() {
        let mut plan = Plan::new();
        allocate(&mut plan, 12);
        let early: Vec<u32> = plan.phases()[1].weeks().iter().map(Week::number).collect();
        assert_eq!(early, vec![10, 11, 12]);
        let last: Vec<u32> = plan.phases()[3].weeks().iter().map(Week::number).collect();
        assert_eq!(last, vec![4, 5, 6]);
    }
}
