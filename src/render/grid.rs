//! Day-by-slot grid model.
//!
//! Projects a resolved schedule onto a weekly grid: columns are the
//! five weekdays, rows are fixed-width time slots across a display
//! window. The grid is a pure data structure; text formatting lives in
//! the sibling module.
//!
//! # Display Rounding
//! For visual alignment a section's end time is rounded UP before
//! filling: minutes `0..=30` become `:30` of the same hour, `31..=59`
//! become `:00` of the next hour (so a 10:00 end displays through the
//! 10:30 boundary). Rounding affects rendering only; conflict
//! resolution always uses the real interval. Because of it, two
//! sections that do not conflict can still share a grid cell, which is
//! why cells hold a list of entries.

use chrono::{NaiveTime, Timelike};

use crate::models::{ResolvedSchedule, Weekday};

/// Clock time from literal hour/minute; out-of-range input becomes
/// midnight.
fn hm(hours: u32, minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hours, minutes, 0).unwrap_or(NaiveTime::MIN)
}

/// Minutes since midnight.
#[inline]
fn minutes_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Section end rounded up for display, in minutes since midnight.
fn rounded_end_minutes(end: NaiveTime) -> u32 {
    if end.minute() <= 30 {
        end.hour() * 60 + 30
    } else {
        (end.hour() + 1) * 60
    }
}

/// Display window and slot width for grid building.
///
/// Defaults to the teaching day 08:30–19:30 in 60-minute slots. The
/// window end is inclusive: a slot row starts AT `window_end` as well.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOptions {
    /// First slot start.
    pub window_start: NaiveTime,
    /// Last slot start (inclusive).
    pub window_end: NaiveTime,
    /// Slot width in minutes; zero is treated as one.
    pub slot_minutes: u32,
}

impl GridOptions {
    /// Creates the default 08:30–19:30 window with 60-minute slots.
    pub fn new() -> Self {
        Self {
            window_start: hm(8, 30),
            window_end: hm(19, 30),
            slot_minutes: 60,
        }
    }

    /// Sets the display window.
    pub fn with_window(mut self, start: NaiveTime, end: NaiveTime) -> Self {
        self.window_start = start;
        self.window_end = end;
        self
    }

    /// Sets the slot width in minutes.
    pub fn with_slot_minutes(mut self, minutes: u32) -> Self {
        self.slot_minutes = minutes;
        self
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One section's appearance in a grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEntry {
    /// Course identifier.
    pub course_code: String,
    /// Section label.
    pub label: String,
    /// Human-readable course name.
    pub course_name: String,
}

impl CellEntry {
    /// First display line: `CODE (LABEL)`.
    pub fn heading(&self) -> String {
        format!("{} ({})", self.course_code, self.label)
    }
}

/// A resolved schedule projected onto day columns and time-slot rows.
///
/// `cells[row][day]` lists the sections whose display interval overlaps
/// slot `row` on that day, in schedule (acceptance) order.
#[derive(Debug, Clone, PartialEq)]
pub struct TimetableGrid {
    /// Slot start times, one per row.
    pub slot_starts: Vec<NaiveTime>,
    /// Cell entries indexed by `[row][weekday index]`.
    pub cells: Vec<Vec<Vec<CellEntry>>>,
}

impl TimetableGrid {
    /// Builds the grid for a schedule.
    ///
    /// A section fills every row its display interval
    /// `[start_time, rounded end)` overlaps; rows cover
    /// `[slot_start, slot_start + slot_minutes)`. Sections entirely
    /// outside the window are simply not shown.
    pub fn build(schedule: &ResolvedSchedule, options: &GridOptions) -> Self {
        let step = options.slot_minutes.max(1);
        let window_start = minutes_of_day(options.window_start);
        let window_end = minutes_of_day(options.window_end);

        let slot_starts: Vec<NaiveTime> = (window_start..=window_end)
            .step_by(step as usize)
            .filter_map(|m| NaiveTime::from_hms_opt(m / 60, m % 60, 0))
            .collect();

        let mut cells: Vec<Vec<Vec<CellEntry>>> =
            vec![vec![Vec::new(); Weekday::ALL.len()]; slot_starts.len()];

        for section in schedule.iter() {
            let day = section.weekday.to_index();
            let begin = minutes_of_day(section.start_time);
            let end = rounded_end_minutes(section.end_time);

            for (row, slot) in slot_starts.iter().enumerate() {
                let slot_start = minutes_of_day(*slot);
                let slot_end = slot_start + step;
                if begin < slot_end && slot_start < end {
                    cells[row][day].push(CellEntry {
                        course_code: section.course_code.clone(),
                        label: section.label.clone(),
                        course_name: section.course_name.clone(),
                    });
                }
            }
        }

        Self { slot_starts, cells }
    }

    /// Number of slot rows.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slot_starts.len()
    }

    /// Entries in one cell; empty for out-of-range rows.
    pub fn cell(&self, row: usize, day: Weekday) -> &[CellEntry] {
        self.cells
            .get(row)
            .map(|r| r[day.to_index()].as_slice())
            .unwrap_or(&[])
    }
}
