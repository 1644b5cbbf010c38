//! Course grouping.
//!
//! Partitions a flat section list into per-course alternative sets. A
//! finished timetable picks exactly one section from every group.
//!
//! # Ordering
//! Grouping is order-preserving on both axes: groups appear in
//! first-appearance order of their course code, and each group keeps
//! its sections in source order. Downstream enumeration inherits this
//! order, which is what makes the whole pipeline deterministic; a plain
//! map keyed by course code would not give that guarantee.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Section;

/// All sections offered under one course code.
///
/// Exactly one of these sections may appear in a timetable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGroup {
    /// Course identifier shared by every section in the group.
    pub course_code: String,
    /// Alternative sections, in source order.
    pub sections: Vec<Section>,
}

impl CourseGroup {
    /// Creates an empty group for a course code.
    pub fn new(course_code: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            sections: Vec::new(),
        }
    }

    /// Adds a section to this group.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Number of alternative sections.
    #[inline]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the group has no sections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Partitions sections into course groups.
///
/// Groups come out in first-appearance order of `course_code`; within a
/// group, sections keep their input order. Assumes validated input
/// (every section carries a non-empty course code).
pub fn group_by_course(sections: &[Section]) -> Vec<CourseGroup> {
    let mut groups: Vec<CourseGroup> = Vec::new();
    let mut position: HashMap<String, usize> = HashMap::new();

    for section in sections {
        match position.get(&section.course_code) {
            Some(&i) => groups[i].add_section(section.clone()),
            None => {
                position.insert(section.course_code.clone(), groups.len());
                let mut group = CourseGroup::new(section.course_code.clone());
                group.add_section(section.clone());
                groups.push(group);
            }
        }
    }

    groups
}
