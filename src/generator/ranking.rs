//! Schedule ranking.
//!
//! Orders resolved schedules for presentation: the more courses a
//! schedule kept through conflict resolution, the earlier it appears.
//! Empty schedules (possible only from an empty combination, i.e. zero
//! courses) are dropped.

use crate::models::ResolvedSchedule;

/// Ranks schedules by descending section count.
///
/// The sort is stable, so schedules of equal size keep their
/// enumeration order; together with deterministic enumeration this
/// makes the final output reproducible run to run.
pub fn rank(schedules: Vec<ResolvedSchedule>) -> Vec<ResolvedSchedule> {
    let mut ranked: Vec<ResolvedSchedule> = schedules
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    ranked.sort_by(|a, b| b.len().cmp(&a.len()));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, Weekday};
    use chrono::NaiveTime;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    /// Schedule of `size` disjoint sections, all under one course code
    /// so tests can tell schedules apart.
    fn make_schedule(code: &str, size: usize) -> ResolvedSchedule {
        let mut s = ResolvedSchedule::new();
        for i in 0..size {
            s.add_section(Section::new(
                code,
                format!("{i}"),
                Weekday::Monday,
                time(8 + i as u32, 0),
                time(9 + i as u32, 0),
            ));
        }
        s
    }

    fn code_of(schedule: &ResolvedSchedule) -> &str {
        schedule.sections[0].course_code.as_str()
    }

    #[test]
    fn test_rank_descending_by_size() {
        let ranked = rank(vec![
            make_schedule("ONE", 1),
            make_schedule("THREE", 3),
            make_schedule("TWO", 2),
        ]);

        let sizes: Vec<usize> = ranked.iter().map(|s| s.len()).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
    }

    #[test]
    fn test_rank_is_stable_for_equal_sizes() {
        let ranked = rank(vec![
            make_schedule("A", 2),
            make_schedule("B", 2),
            make_schedule("C", 3),
            make_schedule("D", 2),
        ]);

        let codes: Vec<&str> = ranked.iter().map(code_of).collect();
        assert_eq!(codes, vec!["C", "A", "B", "D"]); // A, B, D keep input order
    }

    #[test]
    fn test_rank_drops_empty_schedules() {
        let ranked = rank(vec![
            ResolvedSchedule::new(),
            make_schedule("A", 1),
            ResolvedSchedule::new(),
        ]);

        assert_eq!(ranked.len(), 1);
        assert_eq!(code_of(&ranked[0]), "A");
    }

    #[test]
    fn test_rank_empty_input() {
        assert!(rank(Vec::new()).is_empty());
    }
}
