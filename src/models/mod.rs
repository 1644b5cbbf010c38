//! Timetabling domain models.
//!
//! Provides the core data types for representing timetable generation
//! problems and solutions. The vocabulary is academic (courses,
//! sections, weekdays) but nothing here assumes a particular
//! institution's calendar.
//!
//! # Pipeline Roles
//!
//! | Type | Role |
//! |------|------|
//! | [`Section`] | candidate meeting time for a course |
//! | [`CourseGroup`] | interchangeable alternatives for one course |
//! | [`ResolvedSchedule`] | conflict-free selection, one section per course at most |

mod group;
mod schedule;
mod section;

pub use group::{group_by_course, CourseGroup};
pub use schedule::ResolvedSchedule;
pub use section::{Section, Weekday};
