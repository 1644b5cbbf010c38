//! Resolved schedule (solution) model.
//!
//! A resolved schedule is the conflict-free subset of one combination
//! that survived greedy conflict resolution: pairwise non-overlapping
//! sections, at most one per course, in acceptance order.
//!
//! The type itself is a plain collection; the non-overlap invariant is
//! maintained by the resolver, which checks [`conflicts_with`] before
//! every insertion.
//!
//! [`conflicts_with`]: ResolvedSchedule::conflicts_with

use serde::{Deserialize, Serialize};

use super::{Section, Weekday};

/// A conflict-free weekly schedule.
///
/// Sections are pairwise non-overlapping and stored in the order the
/// resolver accepted them (priority order of the source combination).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSchedule {
    /// Kept sections, in acceptance order.
    pub sections: Vec<Section>,
}

impl ResolvedSchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a section.
    ///
    /// The caller is responsible for checking [`conflicts_with`] first;
    /// the collection itself does not reject overlaps.
    ///
    /// [`conflicts_with`]: ResolvedSchedule::conflicts_with
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Whether a candidate section overlaps anything already kept.
    pub fn conflicts_with(&self, candidate: &Section) -> bool {
        self.sections.iter().any(|s| s.overlaps(candidate))
    }

    /// Kept sections meeting on a given day, in acceptance order.
    pub fn sections_on(&self, weekday: Weekday) -> Vec<&Section> {
        self.sections
            .iter()
            .filter(|s| s.weekday == weekday)
            .collect()
    }

    /// Iterates over kept sections in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Number of kept sections.
    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the schedule has no sections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
