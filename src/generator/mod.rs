//! Timetable generation pipeline.
//!
//! Wires the three stages that turn validated sections into ranked,
//! conflict-free weekly schedules:
//!
//! 1. group sections by course ([`group_by_course`](crate::models::group_by_course))
//! 2. enumerate one-section-per-course combinations ([`Combinations`])
//! 3. resolve each combination greedily by priority ([`resolve`])
//! 4. rank survivors by descending size ([`rank`])
//!
//! # Determinism
//!
//! Every stage is order-preserving or stably sorted, so the same input
//! always produces the same ranked output. Greedy resolution trades
//! maximality for predictability; see [`resolve`] for the exact
//! guarantee.
//!
//! # Scale
//!
//! The combination space is the product of group sizes and can be
//! large. [`generate_schedules`] walks all of it; callers that need a
//! cap should drive [`Combinations`] themselves and stop pulling, e.g.
//! `Combinations::new(&groups).take(n).map(|c| resolve(&c))`.

mod combinations;
mod ranking;
mod resolver;

pub use combinations::{combination_count, Combination, Combinations};
pub use ranking::rank;
pub use resolver::resolve;

use log::debug;

use crate::models::{group_by_course, ResolvedSchedule, Section};

/// Generates every ranked, conflict-free schedule for the sections.
///
/// Pure and infallible for validated input: zero sections simply yield
/// an empty list. Acceptance order within a schedule is priority order;
/// list order is descending size with ties in enumeration order.
///
/// # Example
/// ```
/// use chrono::NaiveTime;
/// use u_timetable::generator::generate_schedules;
/// use u_timetable::models::{Section, Weekday};
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let ten = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
///
/// let sections = vec![
///     Section::new("MATH101", "1", Weekday::Monday, nine, ten).with_priority(1),
///     Section::new("PHYS101", "1", Weekday::Monday, nine, ten).with_priority(2),
/// ];
///
/// // The two courses clash, so each schedule keeps a single section.
/// let schedules = generate_schedules(&sections);
/// assert_eq!(schedules.len(), 1);
/// assert_eq!(schedules[0].len(), 1);
/// assert_eq!(schedules[0].sections[0].course_code, "MATH101");
/// ```
pub fn generate_schedules(sections: &[Section]) -> Vec<ResolvedSchedule> {
    let groups = group_by_course(sections);
    debug!(
        "Generating schedules: {} sections in {} course groups, {} combinations",
        sections.len(),
        groups.len(),
        combination_count(&groups)
            .map(|n| n.to_string())
            .unwrap_or_else(|| "> u64::MAX".to_string())
    );

    let resolved: Vec<ResolvedSchedule> = Combinations::new(&groups)
        .map(|combination| resolve(&combination))
        .collect();

    let ranked = rank(resolved);
    debug!("Ranked {} non-empty schedules", ranked.len());
    ranked
}
