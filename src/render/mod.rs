//! Schedule rendering.
//!
//! Turns ranked schedules into presentation artifacts: a day-by-slot
//! [`TimetableGrid`] built over a configurable display window, its
//! bordered text-table form, and per-section summary lines. Rendering
//! is read-only over the models; display rounding never feeds back into
//! conflict resolution.

mod grid;
mod text;

pub use grid::{CellEntry, GridOptions, TimetableGrid};
pub use text::{render_grid, render_summary};
