//! Greedy conflict resolution.
//!
//! Turns one combination into a conflict-free schedule: sections are
//! considered in priority order and kept only if they overlap nothing
//! kept so far. Dropped sections are never reconsidered.
//!
//! # Guarantees
//! The result is pairwise non-overlapping and deterministic for a given
//! combination. It is NOT guaranteed maximal: a kept high-priority
//! section can block two disjoint lower-priority ones that would have
//! made a larger schedule. That trade is intentional; priorities are a
//! user statement about which sections matter most, not a sizing hint.
//!
//! # Reference
//! Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4.1. The classic
//! earliest-finish rule maximizes the number of kept intervals; this
//! resolver orders by user priority instead and accepts smaller results.

use crate::models::{ResolvedSchedule, Section};

/// Sort key placing integer priorities ascending and unprioritized
/// sections after every prioritized one.
fn priority_key(section: &Section) -> (bool, i32) {
    match section.priority {
        Some(p) => (false, p),
        None => (true, 0),
    }
}

/// Resolves one combination into a conflict-free schedule.
///
/// # Algorithm
/// 1. Stable-sort the combination by priority (lower value first,
///    unprioritized last); ties keep combination order.
/// 2. Walk the sorted sections, keeping each one iff it overlaps
///    nothing already kept.
///
/// A non-empty combination always keeps at least its top-priority
/// section, so only the empty combination resolves to an empty
/// schedule.
pub fn resolve(combination: &[&Section]) -> ResolvedSchedule {
    let mut order: Vec<usize> = (0..combination.len()).collect();
    order.sort_by(|&a, &b| priority_key(combination[a]).cmp(&priority_key(combination[b])));

    let mut schedule = ResolvedSchedule::new();
    for &i in &order {
        let section = combination[i];
        if !schedule.conflicts_with(section) {
            schedule.add_section(section.clone());
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;
    use chrono::NaiveTime;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn make_section(
        code: &str,
        day: Weekday,
        start: (u32, u32),
        end: (u32, u32),
        priority: Option<i32>,
    ) -> Section {
        let mut s = Section::new(code, "1", day, time(start.0, start.1), time(end.0, end.1));
        s.priority = priority;
        s
    }

    fn codes(schedule: &ResolvedSchedule) -> Vec<&str> {
        schedule.iter().map(|s| s.course_code.as_str()).collect()
    }

    #[test]
    fn test_disjoint_sections_all_kept() {
        let a = make_section("A", Weekday::Monday, (9, 0), (10, 0), Some(2));
        let b = make_section("B", Weekday::Monday, (10, 0), (11, 0), Some(1));
        let c = make_section("C", Weekday::Tuesday, (9, 0), (10, 0), Some(3));

        let schedule = resolve(&[&a, &b, &c]);
        assert_eq!(schedule.len(), 3);
        assert_eq!(codes(&schedule), vec!["B", "A", "C"]); // acceptance = priority order
    }

    #[test]
    fn test_priority_wins_conflict() {
        let low = make_section("LOW", Weekday::Monday, (9, 0), (10, 0), Some(2));
        let high = make_section("HIGH", Weekday::Monday, (9, 30), (10, 30), Some(1));

        let schedule = resolve(&[&low, &high]);
        assert_eq!(codes(&schedule), vec!["HIGH"]);
    }

    #[test]
    fn test_equal_priority_tie_keeps_combination_order() {
        let first = make_section("FIRST", Weekday::Monday, (9, 0), (10, 0), Some(1));
        let second = make_section("SECOND", Weekday::Monday, (9, 30), (10, 30), Some(1));

        let schedule = resolve(&[&first, &second]);
        assert_eq!(codes(&schedule), vec!["FIRST"]); // earlier in the combination
    }

    #[test]
    fn test_unprioritized_considered_last() {
        let unprioritized = make_section("NONE", Weekday::Monday, (9, 0), (10, 0), None);
        let prioritized = make_section("P9", Weekday::Monday, (9, 30), (10, 30), Some(9));

        // Even a large priority value beats an absent one
        let schedule = resolve(&[&unprioritized, &prioritized]);
        assert_eq!(codes(&schedule), vec!["P9"]);
    }

    #[test]
    fn test_unprioritized_tie_keeps_combination_order() {
        let a = make_section("A", Weekday::Monday, (9, 0), (10, 0), None);
        let b = make_section("B", Weekday::Monday, (9, 0), (10, 0), None);

        let schedule = resolve(&[&a, &b]);
        assert_eq!(codes(&schedule), vec!["A"]);
    }

    #[test]
    fn test_result_is_pairwise_non_overlapping() {
        let sections = [
            make_section("A", Weekday::Monday, (9, 0), (12, 0), Some(1)),
            make_section("B", Weekday::Monday, (10, 0), (11, 0), Some(2)),
            make_section("C", Weekday::Monday, (12, 0), (13, 0), Some(3)),
            make_section("D", Weekday::Tuesday, (9, 0), (10, 0), None),
            make_section("E", Weekday::Tuesday, (9, 30), (10, 30), Some(4)),
        ];
        let combination: Vec<&Section> = sections.iter().collect();

        let schedule = resolve(&combination);
        for (i, x) in schedule.sections.iter().enumerate() {
            for y in &schedule.sections[i + 1..] {
                assert!(!x.overlaps(y), "{} overlaps {}", x.course_code, y.course_code);
            }
        }
    }

    #[test]
    fn test_greedy_is_not_maximal() {
        // A blocks both B and C; B and C are disjoint, so {B, C} would
        // be the larger schedule. Greedy keeps the priority winner only.
        let a = make_section("A", Weekday::Monday, (9, 0), (11, 0), Some(1));
        let b = make_section("B", Weekday::Monday, (9, 0), (10, 0), Some(2));
        let c = make_section("C", Weekday::Monday, (10, 0), (11, 0), Some(3));

        let schedule = resolve(&[&a, &b, &c]);
        assert_eq!(codes(&schedule), vec!["A"]);
    }

    #[test]
    fn test_single_section_always_kept() {
        let a = make_section("A", Weekday::Friday, (8, 0), (9, 0), None);
        let schedule = resolve(&[&a]);
        assert_eq!(schedule.len(), 1);
    }

    #[test]
    fn test_empty_combination() {
        let schedule = resolve(&[]);
        assert!(schedule.is_empty());
    }
}
