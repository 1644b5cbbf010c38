//! Course section model.
//!
//! Defines the candidate unit of timetable generation: a [`Section`] is
//! one offered instance of a course (a specific weekly meeting time),
//! and a finished timetable picks exactly one section per course.
//!
//! # Time Model
//! Meeting times are naive times-of-day on a five-day week ([`Weekday`]).
//! Intervals are half-open `[start_time, end_time)`: a section that ends
//! exactly when another starts does not conflict with it.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A working day of the week (Monday through Friday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    /// All weekdays in display order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    /// Column index of this weekday (Monday = 0 .. Friday = 4).
    #[inline]
    pub fn to_index(self) -> usize {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
        }
    }

    /// Weekday for a column index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// English display name.
    pub fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }

    /// Parses an English day name, case-insensitive.
    ///
    /// Accepts the full name ("Monday") and the three-letter
    /// abbreviation ("Mon"). Returns `None` for anything else;
    /// localized names are handled by the caller's alias table.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "monday" | "mon" => Some(Weekday::Monday),
            "tuesday" | "tue" => Some(Weekday::Tuesday),
            "wednesday" | "wed" => Some(Weekday::Wednesday),
            "thursday" | "thu" => Some(Weekday::Thursday),
            "friday" | "fri" => Some(Weekday::Friday),
            _ => None,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One offered instance of a course.
///
/// Sections sharing a `course_code` are interchangeable alternatives;
/// a timetable contains at most one of them. The meeting interval is
/// half-open, so back-to-back sections do not overlap.
///
/// Invariant `start_time < end_time` is checked by
/// [`validate_sections`](crate::validation::validate_sections), not by
/// this type; sections are immutable once ingested.
///
/// # Example
/// ```
/// use chrono::NaiveTime;
/// use u_timetable::models::{Section, Weekday};
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
/// let eleven = NaiveTime::from_hms_opt(11, 0, 0).unwrap();
///
/// let a = Section::new("MATH101", "1", Weekday::Monday, nine, ten);
/// let b = Section::new("PHYS101", "1", Weekday::Monday, ten, eleven);
/// assert!(!a.overlaps(&b)); // touching but not overlapping
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Course identifier (e.g. "MATH101"). Groups alternatives.
    pub course_code: String,
    /// Human-readable course name.
    pub course_name: String,
    /// Section label within the course (e.g. "1", "A").
    pub label: String,
    /// Meeting day.
    pub weekday: Weekday,
    /// Meeting start (inclusive).
    pub start_time: NaiveTime,
    /// Meeting end (exclusive).
    pub end_time: NaiveTime,
    /// Conflict-resolution priority; lower wins. `None` = unprioritized,
    /// considered after every prioritized section.
    pub priority: Option<i32>,
}

impl Section {
    /// Creates a section with no course name and no priority.
    pub fn new(
        course_code: impl Into<String>,
        label: impl Into<String>,
        weekday: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            course_name: String::new(),
            label: label.into(),
            weekday,
            start_time,
            end_time,
            priority: None,
        }
    }

    /// Sets the human-readable course name.
    pub fn with_course_name(mut self, name: impl Into<String>) -> Self {
        self.course_name = name.into();
        self
    }

    /// Sets the conflict-resolution priority (lower wins).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Meeting length in minutes.
    #[inline]
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }

    /// Whether two sections meet at the same time on the same day.
    ///
    /// Half-open interval intersection: touching boundaries (one ends
    /// exactly when the other starts) do NOT overlap. Symmetric.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.weekday == other.weekday
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }
}
