//! Delimited-text ingestion.
//!
//! Reads the line-oriented input format for candidate sections:
//! - A line consisting of ASCII digits is a **priority marker**: it sets
//!   the priority applied to every following section line until the next
//!   marker. Sections before any marker are unprioritized.
//! - Any other non-blank line is a **section record** with exactly six
//!   tab-separated fields:
//!   `course_code  course_name  label  weekday  start  end`
//!   with times in 24-hour `HH:MM`. Fields are trimmed.
//! - Blank lines are ignored.
//!
//! # Error Policy
//! [`IngestMode::Lenient`] (the default) skips malformed lines, records
//! each skip as a [`SkippedLine`] diagnostic, and logs a warning.
//! [`IngestMode::Strict`] fails on the first malformed line. In both
//! modes the reported line numbers are 1-based positions in the input
//! text, counting blank and marker lines.

use chrono::NaiveTime;
use log::warn;
use std::collections::HashMap;
use thiserror::Error;

use crate::models::{Section, Weekday};

/// A malformed input line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A record line did not split into exactly six tab-separated fields.
    #[error("line {line_no}: expected 6 tab-separated fields, found {found}")]
    WrongFieldCount { line_no: usize, found: usize },
    /// The weekday field matched neither a built-in name nor an alias.
    #[error("line {line_no}: unknown weekday '{name}'")]
    UnknownWeekday { line_no: usize, name: String },
    /// A time field was not a valid 24-hour `HH:MM` value.
    #[error("line {line_no}: invalid time '{value}' (expected HH:MM)")]
    InvalidTime { line_no: usize, value: String },
    /// A priority marker did not fit the priority type.
    #[error("line {line_no}: priority marker '{value}' is out of range")]
    PriorityOutOfRange { line_no: usize, value: String },
}

impl ParseError {
    /// Input line the error refers to (1-based).
    pub fn line_no(&self) -> usize {
        match self {
            ParseError::WrongFieldCount { line_no, .. }
            | ParseError::UnknownWeekday { line_no, .. }
            | ParseError::InvalidTime { line_no, .. }
            | ParseError::PriorityOutOfRange { line_no, .. } => *line_no,
        }
    }
}

/// How to treat malformed input lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestMode {
    /// Fail on the first malformed line.
    Strict,
    /// Skip malformed lines, collecting a diagnostic per skip.
    Lenient,
}

impl Default for IngestMode {
    fn default() -> Self {
        IngestMode::Lenient
    }
}

/// A line skipped during lenient parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// Input line number (1-based).
    pub line_no: usize,
    /// The offending line, trimmed.
    pub line: String,
    /// Why it was skipped.
    pub error: ParseError,
}

/// Result of parsing an input text.
#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    /// Successfully parsed sections, in input order.
    pub sections: Vec<Section>,
    /// Diagnostics for skipped lines (empty in strict mode).
    pub skipped: Vec<SkippedLine>,
}

impl ParseOutcome {
    /// Whether every line parsed cleanly.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Parsing configuration.
///
/// Built-in weekday names are English (full and three-letter,
/// case-insensitive); localized inputs register their names through
/// [`with_day_alias`](ParseOptions::with_day_alias).
///
/// # Example
/// ```
/// use u_timetable::ingest::{parse_sections, ParseOptions};
/// use u_timetable::models::Weekday;
///
/// let options = ParseOptions::new().with_day_alias("Pazartesi", Weekday::Monday);
/// let outcome = parse_sections("CS101\tIntro\t1\tPazartesi\t09:00\t11:00", &options).unwrap();
/// assert_eq!(outcome.sections[0].weekday, Weekday::Monday);
/// ```
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Malformed-line policy.
    pub mode: IngestMode,
    day_aliases: HashMap<String, Weekday>,
}

impl ParseOptions {
    /// Creates lenient options with no extra day aliases.
    pub fn new() -> Self {
        Self {
            mode: IngestMode::Lenient,
            day_aliases: HashMap::new(),
        }
    }

    /// Sets the malformed-line policy.
    pub fn with_mode(mut self, mode: IngestMode) -> Self {
        self.mode = mode;
        self
    }

    /// Registers an additional weekday name, case-insensitive.
    ///
    /// Aliases extend the built-in English names; registering an alias
    /// that collides with a built-in name shadows it.
    pub fn with_day_alias(mut self, name: impl Into<String>, weekday: Weekday) -> Self {
        self.day_aliases.insert(name.into().to_lowercase(), weekday);
        self
    }

    fn resolve_weekday(&self, name: &str) -> Option<Weekday> {
        self.day_aliases
            .get(&name.to_lowercase())
            .copied()
            .or_else(|| Weekday::from_name(name))
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// One classified input line.
enum ParsedLine {
    /// Priority marker: applies to every following record.
    Marker(i32),
    /// Section record, priority not yet assigned.
    Record(Section),
}

/// Parses an input text into sections.
///
/// Priority markers assign the running priority to the records that
/// follow them; records before the first marker get no priority (they
/// sort after every prioritized section during conflict resolution).
///
/// In lenient mode the returned [`ParseOutcome`] lists every skipped
/// line; in strict mode the first malformed line is returned as the
/// error instead.
pub fn parse_sections(input: &str, options: &ParseOptions) -> Result<ParseOutcome, ParseError> {
    let mut outcome = ParseOutcome::default();
    let mut current_priority: Option<i32> = None;

    for (i, raw) in input.lines().enumerate() {
        let line_no = i + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line, line_no, options) {
            Ok(ParsedLine::Marker(priority)) => current_priority = Some(priority),
            Ok(ParsedLine::Record(mut section)) => {
                section.priority = current_priority;
                outcome.sections.push(section);
            }
            Err(error) => match options.mode {
                IngestMode::Strict => return Err(error),
                IngestMode::Lenient => {
                    warn!("Skipping {error}");
                    outcome.skipped.push(SkippedLine {
                        line_no,
                        line: line.to_string(),
                        error,
                    });
                }
            },
        }
    }

    Ok(outcome)
}

fn parse_line(line: &str, line_no: usize, options: &ParseOptions) -> Result<ParsedLine, ParseError> {
    if line.chars().all(|c| c.is_ascii_digit()) {
        let priority = line.parse::<i32>().map_err(|_| ParseError::PriorityOutOfRange {
            line_no,
            value: line.to_string(),
        })?;
        return Ok(ParsedLine::Marker(priority));
    }

    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() != 6 {
        return Err(ParseError::WrongFieldCount {
            line_no,
            found: fields.len(),
        });
    }

    let weekday = options
        .resolve_weekday(fields[3])
        .ok_or_else(|| ParseError::UnknownWeekday {
            line_no,
            name: fields[3].to_string(),
        })?;
    let start_time = parse_time(fields[4], line_no)?;
    let end_time = parse_time(fields[5], line_no)?;

    Ok(ParsedLine::Record(
        Section::new(fields[0], fields[2], weekday, start_time, end_time)
            .with_course_name(fields[1]),
    ))
}

fn parse_time(value: &str, line_no: usize) -> Result<NaiveTime, ParseError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ParseError::InvalidTime {
        line_no,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    const SAMPLE: &str = "1\n\
        MATH101\tCalculus I\t1\tMonday\t09:00\t10:00\n\
        MATH101\tCalculus I\t2\tMonday\t09:30\t10:30\n\
        2\n\
        PHYS101\tPhysics I\t1\tTue\t13:00\t15:00\n";

    #[test]
    fn test_parse_records_and_markers() {
        let outcome = parse_sections(SAMPLE, &ParseOptions::new()).unwrap();
        assert!(outcome.is_clean());
        assert_eq!(outcome.sections.len(), 3);

        let first = &outcome.sections[0];
        assert_eq!(first.course_code, "MATH101");
        assert_eq!(first.course_name, "Calculus I");
        assert_eq!(first.label, "1");
        assert_eq!(first.weekday, Weekday::Monday);
        assert_eq!(first.start_time, time(9, 0));
        assert_eq!(first.end_time, time(10, 0));
        assert_eq!(first.priority, Some(1));

        // Marker applies until the next marker
        assert_eq!(outcome.sections[1].priority, Some(1));
        assert_eq!(outcome.sections[2].priority, Some(2));
        assert_eq!(outcome.sections[2].weekday, Weekday::Tuesday); // abbreviated name
    }

    #[test]
    fn test_records_before_first_marker_are_unprioritized() {
        let input = "CS101\tIntro\t1\tMonday\t09:00\t11:00\n\
            3\n\
            CS101\tIntro\t2\tTuesday\t09:00\t11:00\n";

        let outcome = parse_sections(input, &ParseOptions::new()).unwrap();
        assert_eq!(outcome.sections[0].priority, None);
        assert_eq!(outcome.sections[1].priority, Some(3));
    }

    #[test]
    fn test_blank_lines_and_field_trim() {
        let input = "\n  \nCS101\t Intro \t 1 \t monday \t 09:00 \t 11:00 \n\n";

        let outcome = parse_sections(input, &ParseOptions::new()).unwrap();
        assert!(outcome.is_clean());
        assert_eq!(outcome.sections.len(), 1);
        assert_eq!(outcome.sections[0].course_name, "Intro");
        assert_eq!(outcome.sections[0].label, "1");
        assert_eq!(outcome.sections[0].weekday, Weekday::Monday);
    }

    #[test]
    fn test_lenient_skips_with_diagnostics() {
        let input = "CS101\tIntro\t1\tMonday\t09:00\t11:00\n\
            CS102\tIntro II\t1\tFunday\t09:00\t11:00\n\
            not a record at all\n\
            CS103\tIntro III\t1\tFriday\t09:00\t11:00\n";

        let outcome = parse_sections(input, &ParseOptions::new()).unwrap();
        assert_eq!(outcome.sections.len(), 2);
        assert_eq!(outcome.skipped.len(), 2);

        assert_eq!(outcome.skipped[0].line_no, 2);
        assert!(matches!(
            outcome.skipped[0].error,
            ParseError::UnknownWeekday { .. }
        ));
        assert_eq!(outcome.skipped[1].line_no, 3);
        assert!(matches!(
            outcome.skipped[1].error,
            ParseError::WrongFieldCount { found: 1, .. }
        ));
    }

    #[test]
    fn test_strict_fails_fast() {
        let input = "CS101\tIntro\t1\tMonday\t09:00\t11:00\n\
            CS102\tIntro II\t1\tFunday\t09:00\t11:00\n";

        let options = ParseOptions::new().with_mode(IngestMode::Strict);
        let err = parse_sections(input, &options).unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownWeekday {
                line_no: 2,
                name: "Funday".to_string()
            }
        );
        assert_eq!(err.line_no(), 2);
    }

    #[test]
    fn test_invalid_time() {
        let input = "CS101\tIntro\t1\tMonday\t9 o'clock\t11:00\n";

        let options = ParseOptions::new().with_mode(IngestMode::Strict);
        let err = parse_sections(input, &options).unwrap_err();
        assert!(matches!(err, ParseError::InvalidTime { line_no: 1, .. }));

        // Same input under lenient mode: one skip, no sections
        let outcome = parse_sections(input, &ParseOptions::new()).unwrap();
        assert!(outcome.sections.is_empty());
        assert_eq!(outcome.skipped.len(), 1);
    }

    #[test]
    fn test_day_alias() {
        let input = "CS101\tGiris\t1\tPazartesi\t09:00\t11:00\n";

        // Without the alias the day name is unknown
        let plain = parse_sections(input, &ParseOptions::new()).unwrap();
        assert!(plain.sections.is_empty());

        let options = ParseOptions::new().with_day_alias("Pazartesi", Weekday::Monday);
        let outcome = parse_sections(input, &options).unwrap();
        assert_eq!(outcome.sections.len(), 1);
        assert_eq!(outcome.sections[0].weekday, Weekday::Monday);
    }

    #[test]
    fn test_priority_marker_overflow() {
        let input = "99999999999999999999\n\
            CS101\tIntro\t1\tMonday\t09:00\t11:00\n";

        let outcome = parse_sections(input, &ParseOptions::new()).unwrap();
        assert_eq!(outcome.skipped.len(), 1);
        assert!(matches!(
            outcome.skipped[0].error,
            ParseError::PriorityOutOfRange { line_no: 1, .. }
        ));
        // The record still parses, with no priority inherited
        assert_eq!(outcome.sections.len(), 1);
        assert_eq!(outcome.sections[0].priority, None);
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::WrongFieldCount {
            line_no: 7,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "line 7: expected 6 tab-separated fields, found 4"
        );
    }
}
