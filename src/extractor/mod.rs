//! Heuristic syllabus extraction.
//!
//! The extractor runs four independent passes over the lines of an uploaded
//! document: course name, instructor, schedule section and assignment
//! lines (with the dated subset promoted to deadlines). Every pass degrades
//! to an empty value instead of failing.

pub mod assignments;
pub mod dates;
pub mod metadata;
pub mod schedule;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub use assignments::{collect_assignments, collect_deadlines, is_assignment_line};
pub use dates::{DatePatterns, within_year_window};
pub use metadata::{LineMatch, find_course_name, find_instructor};
pub use schedule::extract_schedule_section;

/// Decoded upload handed to the extractor for a single call.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub filename: String,
    pub text: String,
}

impl RawDocument {
    pub fn new(filename: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInfo {
    pub name: String,
    pub instructor: String,
    pub schedule: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deadline {
    pub task: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSyllabus {
    pub course_info: CourseInfo,
    pub assignments: Vec<String>,
    pub deadlines: Vec<Deadline>,
}

/// Stateless apart from its compiled patterns; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct SyllabusExtractor {
    dates: DatePatterns,
}

impl SyllabusExtractor {
    pub fn new() -> Self {
        Self {
            dates: DatePatterns::new(),
        }
    }

    /// Run every pass over `doc`. `today` drives year inference and the
    /// deadline year window, so callers read the clock once and pass it in.
    pub fn extract(&self, doc: &RawDocument, today: NaiveDate) -> ParsedSyllabus {
        let lines: Vec<&str> = doc.text.lines().collect();

        let name = match find_course_name(&lines) {
            LineMatch::Matched(name) if !name.is_empty() => name,
            _ => doc.filename.clone(),
        };
        let instructor = find_instructor(&lines).into_option().unwrap_or_default();
        let schedule = extract_schedule_section(&lines);
        let assignments = collect_assignments(&lines);
        let deadlines = collect_deadlines(&lines, &self.dates, today);

        debug!(
            "extracted {}: {} lines, {} assignments, {} deadlines, schedule {} chars",
            doc.filename,
            lines.len(),
            assignments.len(),
            deadlines.len(),
            schedule.len()
        );

        ParsedSyllabus {
            course_info: CourseInfo {
                name,
                instructor,
                schedule,
            },
            assignments,
            deadlines,
        }
    }
}

/// One-shot extraction against the local calendar date.
pub fn extract_syllabus(text: &str, filename: &str) -> ParsedSyllabus {
    let today = Local::now().date_naive();
    SyllabusExtractor::new().extract(&RawDocument::new(filename, text), today)
}
