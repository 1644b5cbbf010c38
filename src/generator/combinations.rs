//! Lazy cross-product enumeration.
//!
//! Every timetable candidate picks exactly one section per course
//! group, so the candidate space is the cross-product of the groups.
//! That space grows multiplicatively; the enumerator is therefore a
//! lazy iterator, and callers that want early termination just stop
//! pulling from it.
//!
//! # Algorithm
//! Odometer iteration over per-group indices: each step advances the
//! LAST group's index and carries leftward on wrap, so the last group
//! varies fastest. Group order and within-group order both come from
//! the input, making enumeration order fully deterministic.
//!
//! # Complexity
//! O(product of group sizes) combinations, O(groups) work per step.

use crate::models::{CourseGroup, Section};

/// One candidate selection: exactly one section per course group, in
/// group order. Borrows from the groups; nothing is cloned until
/// conflict resolution keeps a section.
pub type Combination<'a> = Vec<&'a Section>;

/// Number of combinations the groups produce.
///
/// Product of group sizes; the empty product is 1 (selecting from zero
/// groups has exactly one, empty, outcome). Returns `None` when the
/// product overflows `u64`.
pub fn combination_count(groups: &[CourseGroup]) -> Option<u64> {
    groups
        .iter()
        .try_fold(1u64, |acc, g| acc.checked_mul(g.len() as u64))
}

/// Lazy iterator over every one-section-per-group combination.
///
/// Yields combinations with the last group varying fastest. A fresh
/// iterator can be created from the same groups at any time; the
/// traversal order is identical on every pass.
///
/// # Example
/// ```
/// use chrono::NaiveTime;
/// use u_timetable::generator::Combinations;
/// use u_timetable::models::{group_by_course, Section, Weekday};
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
/// let sections = vec![
///     Section::new("MATH101", "1", Weekday::Monday, nine, ten),
///     Section::new("MATH101", "2", Weekday::Tuesday, nine, ten),
///     Section::new("PHYS101", "1", Weekday::Wednesday, nine, ten),
/// ];
///
/// let groups = group_by_course(&sections);
/// assert_eq!(Combinations::new(&groups).count(), 2);
/// ```
#[derive(Debug)]
pub struct Combinations<'a> {
    groups: &'a [CourseGroup],
    cursor: Vec<usize>,
    /// Exact remaining count, `None` once it cannot fit in `usize`.
    remaining: Option<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    /// Creates an iterator over the cross-product of `groups`.
    ///
    /// Any empty group empties the whole product; zero groups yield the
    /// single empty combination.
    pub fn new(groups: &'a [CourseGroup]) -> Self {
        let remaining = groups
            .iter()
            .try_fold(1usize, |acc, g| acc.checked_mul(g.len()));

        Self {
            groups,
            cursor: vec![0; groups.len()],
            remaining,
            done: groups.iter().any(|g| g.is_empty()),
        }
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Combination<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combination: Combination<'a> = self
            .groups
            .iter()
            .zip(&self.cursor)
            .map(|(group, &i)| &group.sections[i])
            .collect();

        // Advance the odometer: last position fastest, carry leftward.
        // With zero groups the loop never runs and the iterator stays
        // exhausted after yielding the single empty combination.
        self.done = true;
        for pos in (0..self.cursor.len()).rev() {
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.groups[pos].len() {
                self.done = false;
                break;
            }
            self.cursor[pos] = 0;
        }

        self.remaining = self.remaining.map(|r| r.saturating_sub(1));
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.remaining {
            Some(r) => (r, Some(r)),
            None => (0, None),
        }
    }
}
