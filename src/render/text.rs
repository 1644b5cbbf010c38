//! Plain-text formatting.
//!
//! Renders a [`TimetableGrid`] as a bordered ASCII table and a
//! [`ResolvedSchedule`] as one-line-per-section summary text.
//!
//! # Table Layout
//! The first column holds the slot start times; the remaining five are
//! the weekdays. Cells are one space padded, left-aligned, sized to the
//! widest line in their column. Each section in a cell contributes two
//! lines, `CODE (LABEL)` over the course name; the separator under the
//! header row uses `=`, all others `-`.

use crate::models::{ResolvedSchedule, Weekday};

use super::grid::TimetableGrid;

/// Renders the grid as a bordered text table.
///
/// The output ends with a newline; an empty grid still renders its
/// header row.
pub fn render_grid(grid: &TimetableGrid) -> String {
    let mut headers: Vec<Vec<String>> = vec![vec![String::new()]];
    headers.extend(
        Weekday::ALL
            .iter()
            .map(|day| vec![day.name().to_string()]),
    );

    // row → column → display lines
    let mut rows: Vec<Vec<Vec<String>>> = Vec::new();
    for (i, slot) in grid.slot_starts.iter().enumerate() {
        let mut row: Vec<Vec<String>> = vec![vec![slot.format("%H:%M").to_string()]];
        for day in Weekday::ALL {
            let mut lines = Vec::new();
            for entry in grid.cell(i, day) {
                lines.push(entry.heading());
                lines.push(entry.course_name.clone());
            }
            row.push(lines);
        }
        rows.push(row);
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| display_width(&h[0])).collect();
    for row in &rows {
        for (c, cell) in row.iter().enumerate() {
            for line in cell {
                widths[c] = widths[c].max(display_width(line));
            }
        }
    }

    let mut out = String::new();
    push_border(&mut out, &widths, '-');
    push_row(&mut out, &widths, &headers);
    push_border(&mut out, &widths, '=');
    for row in &rows {
        push_row(&mut out, &widths, row);
        push_border(&mut out, &widths, '-');
    }
    out
}

/// Summary lines for a schedule, one section per line:
/// `CODE - NAME (Weekday, HH:MM to HH:MM)`.
pub fn render_summary(schedule: &ResolvedSchedule) -> String {
    let mut out = String::new();
    for section in schedule.iter() {
        out.push_str(&format!(
            "{} - {} ({}, {} to {})\n",
            section.course_code,
            section.course_name,
            section.weekday,
            section.start_time.format("%H:%M"),
            section.end_time.format("%H:%M"),
        ));
    }
    out
}

#[inline]
fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn push_border(out: &mut String, widths: &[usize], fill: char) {
    out.push('+');
    for &w in widths {
        for _ in 0..w + 2 {
            out.push(fill);
        }
        out.push('+');
    }
    out.push('\n');
}

/// Writes one logical row, spreading multi-line cells over as many
/// physical lines as the tallest cell needs.
fn push_row(out: &mut String, widths: &[usize], cells: &[Vec<String>]) {
    let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for line_idx in 0..height {
        out.push('|');
        for (c, cell) in cells.iter().enumerate() {
            let text = cell.get(line_idx).map(String::as_str).unwrap_or("");
            out.push(' ');
            out.push_str(text);
            let pad = widths[c].saturating_sub(display_width(text)) + 1;
            for _ in 0..pad {
                out.push(' ');
            }
            out.push('|');
        }
        out.push('\n');
    }
}
