//! Weekly course timetable generation.
//!
//! Builds every conflict-free weekly schedule from a flat list of
//! candidate course sections: group interchangeable sections per course,
//! enumerate one-section-per-course combinations lazily, resolve time
//! conflicts greedily in priority order, and rank the surviving
//! schedules by how many courses they kept.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Section`, `Weekday`, `CourseGroup`,
//!   `ResolvedSchedule`
//! - **`ingest`**: Tab-delimited input parsing, strict or lenient
//! - **`validation`**: Input integrity checks (course codes, time ranges)
//! - **`generator`**: Combination enumeration, conflict resolution, ranking
//! - **`render`**: Day-by-slot grids, text tables, summary lines
//!
//! # Pipeline
//!
//! ```
//! use u_timetable::generator::generate_schedules;
//! use u_timetable::ingest::{parse_sections, ParseOptions};
//! use u_timetable::render::{render_grid, GridOptions, TimetableGrid};
//!
//! let input = "1\nMATH101\tCalculus I\t1\tMonday\t09:00\t10:00\n";
//! let outcome = parse_sections(input, &ParseOptions::new())?;
//! let schedules = generate_schedules(&outcome.sections);
//! assert_eq!(schedules.len(), 1);
//!
//! for schedule in &schedules {
//!     let grid = TimetableGrid::build(schedule, &GridOptions::new());
//!     print!("{}", render_grid(&grid));
//! }
//! # Ok::<(), u_timetable::ingest::ParseError>(())
//! ```
//!
//! # Determinism
//!
//! The same input always produces the same ranked output: grouping and
//! enumeration preserve input order, and every sort in the pipeline is
//! stable. Conflict resolution is greedy by priority and deliberately
//! not size-maximal.
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Kleinberg & Tardos (2006), "Algorithm Design", Ch. 4 (interval scheduling)

pub mod generator;
pub mod ingest;
pub mod models;
pub mod render;
pub mod validation;
