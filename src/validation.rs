//! Input validation for timetable generation.
//!
//! Checks structural integrity of parsed sections before grouping.
//! Detects:
//! - Empty course codes (grouping would merge unrelated sections)
//! - Inverted or zero-length meeting intervals
//!
//! All problems are collected and reported together rather than
//! stopping at the first, so one run of the validator describes
//! everything wrong with an input file.

use thiserror::Error;

use crate::models::Section;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A section has an empty course code.
    MissingCourseCode,
    /// A section's start time is not strictly before its end time.
    InvalidTimeRange,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates parsed sections before they enter the pipeline.
///
/// Checks:
/// 1. Every section has a non-empty course code
/// 2. Every section starts strictly before it ends
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_sections(sections: &[Section]) -> ValidationResult {
    let mut errors = Vec::new();

    for (i, section) in sections.iter().enumerate() {
        if section.course_code.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingCourseCode,
                format!(
                    "Section {} (label '{}') has an empty course code",
                    i + 1,
                    section.label
                ),
            ));
        }

        if section.start_time >= section.end_time {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTimeRange,
                format!(
                    "Section '{} {}' start {} is not before end {}",
                    section.course_code,
                    section.label,
                    section.start_time.format("%H:%M"),
                    section.end_time.format("%H:%M")
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
