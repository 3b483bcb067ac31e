//! Read-only text projections of a [`Plan`].
//!
//! - [`pretty`]: indented multi-line tree for people. [`pretty_phase`],
//!   [`pretty_week`] and [`pretty_day`] render a single level.
//! - [`compact`]: one line, nested groups, for logs and debugging.
//! - [`summary`]: plan outline listing the non-empty phases.

use crate::model::{Day, Phase, Plan, Week, Workout};

/// Indented tree of the whole plan, one node per line, tab-indented by depth.
pub fn pretty(plan: &Plan) -> String {
    let mut lines = vec![format!("{} week plan:", plan.total_weeks())];
    for phase in plan.phases() {
        push_phase(phase, 1, &mut lines);
    }
    lines.join("\n")
}

/// Indented tree of one phase, its header at `depth` tabs.
pub fn pretty_phase(phase: &Phase, depth: usize) -> String {
    let mut lines = Vec::new();
    push_phase(phase, depth, &mut lines);
    lines.join("\n")
}

/// Indented tree of one week, its header at `depth` tabs.
pub fn pretty_week(week: &Week, depth: usize) -> String {
    let mut lines = Vec::new();
    push_week(week, depth, &mut lines);
    lines.join("\n")
}

/// One day and its workouts, the header at `depth` tabs.
pub fn pretty_day(day: &Day, depth: usize) -> String {
    let mut lines = Vec::new();
    push_day(day, depth, &mut lines);
    lines.join("\n")
}

fn push_phase(phase: &Phase, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}Phase {} ({}):",
        indent(depth),
        phase.number(),
        phase.label()
    ));
    for week in phase.weeks() {
        push_week(week, depth + 1, lines);
    }
}

fn push_week(week: &Week, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!("{}Week {}:", indent(depth), week.number()));
    for day in week.days() {
        push_day(day, depth + 1, lines);
    }
}

fn push_day(day: &Day, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}Day {} workouts:",
        indent(depth),
        day.day_of_week()
    ));
    for workout in day.workouts() {
        lines.push(format!("{}{}", indent(depth + 1), workout.description()));
    }
}

fn indent(depth: usize) -> String {
    "\t".repeat(depth)
}

/// Single-line nested rendering of the whole plan.
///
/// `Plan[3 weeks] ( Phase 1 ( Week 1 ( Day 1: (E) ), Week 2 ( ), ... ), Phase 2 ( ), ... )`
///
/// A day lists its workouts in one pair of parentheses. This form is meant
/// for reading and is not compatible with tuple-style output that wraps the
/// workouts in a second pair (`Day 1: ((E,))`).
pub fn compact(plan: &Plan) -> String {
    group(
        &format!("Plan[{} weeks]", plan.total_weeks()),
        plan.phases().iter().map(compact_phase),
    )
}

fn compact_phase(phase: &Phase) -> String {
    group(
        &format!("Phase {}", phase.number()),
        phase.weeks().iter().map(compact_week),
    )
}

fn compact_week(week: &Week) -> String {
    group(
        &format!("Week {}", week.number()),
        week.days().iter().map(compact_day),
    )
}

fn compact_day(day: &Day) -> String {
    let workouts: Vec<&str> = day.workouts().iter().map(Workout::description).collect();
    format!("Day {}: ({})", day.day_of_week(), workouts.join(", "))
}

fn group(head: &str, items: impl Iterator<Item = String>) -> String {
    let items: Vec<String> = items.collect();
    if items.is_empty() {
        format!("{head} ( )")
    } else {
        format!("{head} ( {} )", items.join(", "))
    }
}

/// Plan outline: the week total followed by each non-empty phase.
///
/// Phases are numbered consecutively among the non-empty ones, so a 6-week
/// plan lists its Final Quality weeks as phase 2.
pub fn summary(plan: &Plan) -> String {
    let mut lines = vec![format!("{} week plan:", plan.total_weeks())];
    let active = plan.phases().iter().filter(|phase| !phase.is_empty());
    for (position, phase) in active.enumerate() {
        lines.push(format!(
            "\tPhase {} ({}): {} weeks",
            position + 1,
            phase.label(),
            phase.len()
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_plan;
    use crate::model::{PhaseKind, Workout};

    fn plan_with_one_day() -> Plan {
        let mut day = Day::new(1).unwrap();
        day.add_workout(Workout::new("E"));
        day.add_workout(Workout::new("2 x 5 min @ T"));
        let mut week = Week::new(1);
        week.add_day(day);
        let mut plan = Plan::new();
        plan.phase_mut(PhaseKind::Foundation).add_week(week);
        plan.phase_mut(PhaseKind::Foundation).add_week(Week::new(2));
        plan
    }

    #[test]
    fn pretty_indents_each_level() {
        let expected = "2 week plan:\n\
                        \tPhase 1 (Foundation):\n\
                        \t\tWeek 1:\n\
                        \t\t\tDay 1 workouts:\n\
                        \t\t\t\tE\n\
                        \t\t\t\t2 x 5 min @ T\n\
                        \t\tWeek 2:\n\
                        \tPhase 2 (Early Quality):\n\
                        \tPhase 3 (Transition Quality):\n\
                        \tPhase 4 (Final Quality):";
        assert_eq!(pretty(&plan_with_one_day()), expected);
    }

    #[test]
    fn pretty_day_renders_on_its_own() {
        let mut day = Day::default();
        day.add_workout(Workout::new("E"));
        day.add_workout(Workout::new("2 x 5 min @ T"));
        assert_eq!(pretty_day(&day, 0), "Day 1 workouts:\n\tE\n\t2 x 5 min @ T");
        assert_eq!(pretty_day(&Day::new(4).unwrap(), 2), "\t\tDay 4 workouts:");
    }

    #[test]
    fn single_levels_match_whole_plan_rendering() {
        let plan = plan_with_one_day();
        let foundation = &plan.phases()[0];
        let whole = pretty(&plan);
        assert!(whole.contains(&pretty_phase(foundation, 1)));
        assert_eq!(
            pretty_week(&foundation.weeks()[0], 0),
            "Week 1:\n\tDay 1 workouts:\n\t\tE\n\t\t2 x 5 min @ T"
        );
        assert_eq!(pretty_week(&foundation.weeks()[1], 2), "\t\tWeek 2:");
    }

    #[test]
    fn compact_is_single_line() {
        let expected = "Plan[2 weeks] ( Phase 1 ( Week 1 ( Day 1: (E, 2 x 5 min @ T) ), \
                        Week 2 ( ) ), Phase 2 ( ), Phase 3 ( ), Phase 4 ( ) )";
        let rendered = compact(&plan_with_one_day());
        assert_eq!(rendered, expected);
        assert!(!rendered.contains('\n'));
    }

    #[test]
    fn compact_day_without_workouts() {
        let day = Day::new(5).unwrap();
        assert_eq!(compact_day(&day), "Day 5: ()");
    }

    #[test]
    fn summary_renumbers_non_empty_phases() {
        let expected = "6 week plan:\n\
                        \tPhase 1 (Foundation): 3 weeks\n\
                        \tPhase 2 (Final Quality): 3 weeks";
        assert_eq!(summary(&generate_plan(6)), expected);
    }

    #[test]
    fn summary_of_empty_plan_is_header_only() {
        assert_eq!(summary(&generate_plan(0)), "0 week plan:");
    }

    #[test]
    fn rendering_leaves_plan_unchanged() {
        let plan = generate_plan(9);
        let before = plan.clone();
        let _ = summary(&plan);
        let _ = pretty(&plan);
        let _ = compact(&plan);
        assert_eq!(plan, before);
        assert_eq!(plan.phases()[3].number(), 4);
    }
}
