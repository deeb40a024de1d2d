use chrono::NaiveDate;
use tracing::debug;

use super::Deadline;
use super::dates::{DatePatterns, within_year_window};
use super::schedule::contains_any;

pub const MIN_LINE_CHARS: usize = 10;

pub const HEADER_PREFIXES: [&str; 7] = [
    "chapter", "week", "unit", "module", "page", "reading", "lecture",
];

/// Substring keywords; "exam" also matches "examine" and that is kept as-is.
pub const ASSIGNMENT_KEYWORDS: [&str; 10] = [
    "assignment",
    "homework",
    "project",
    "quiz",
    "exam",
    "paper",
    "presentation",
    "due",
    "submit",
    "deadline",
];

pub fn is_assignment_line(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.chars().count() <= MIN_LINE_CHARS {
        return false;
    }
    let lower = trimmed.to_lowercase();
    if HEADER_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return false;
    }
    contains_any(&lower, &ASSIGNMENT_KEYWORDS)
}

/// Every assignment-like line, trimmed, in document order.
pub fn collect_assignments(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| is_assignment_line(line))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Assignment-like lines that carry a usable date, sorted by date.
///
/// Lines whose date cannot be read, or falls outside the current and next
/// calendar year, are dropped individually.
pub fn collect_deadlines(
    lines: &[&str],
    patterns: &DatePatterns,
    today: NaiveDate,
) -> Vec<Deadline> {
    let mut deadlines = Vec::new();

    for line in lines.iter().filter(|line| is_assignment_line(line)) {
        let task = line.trim();
        let Some(date) = patterns.find_date(task, today) else {
            continue;
        };
        if !within_year_window(date, today) {
            debug!("skipping deadline outside year window: {} ({})", task, date);
            continue;
        }
        deadlines.push(Deadline {
            task: task.to_string(),
            date,
        });
    }

    deadlines.sort_by_key(|d| d.date);
    deadlines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 20).unwrap()
    }

    #[test]
    fn test_short_lines_rejected() {
        assert!(!is_assignment_line("Quiz 1"));
        assert!(!is_assignment_line("   Exam due   "));
        assert!(is_assignment_line("Homework 1 posted"));
    }

    #[test]
    fn test_header_prefixes_rejected() {
        assert!(!is_assignment_line("Week 3: readings on recursion"));
        assert!(!is_assignment_line("  Lecture 4 - exam review"));
        assert!(!is_assignment_line("Weekly quiz every Friday"));
        assert!(is_assignment_line("Final exam covers week 3"));
    }

    #[test]
    fn test_keyword_is_substring_match() {
        assert!(is_assignment_line("Students will examine the results"));
        assert!(is_assignment_line("Subdued lighting in the lab"));
        assert!(!is_assignment_line("Office hours are on Tuesday"));
    }

    #[test]
    fn test_assignments_keep_document_order() {
        let lines = [
            "Project proposal",
            "Office hours by appointment",
            "Homework every Monday",
            "Week 2: homework review",
        ];
        assert_eq!(
            collect_assignments(&lines),
            vec!["Project proposal".to_string(), "Homework every Monday".to_string()]
        );
    }

    #[test]
    fn test_deadlines_sorted_and_filtered() {
        let patterns = DatePatterns::new();
        let lines = [
            "Final Project due December 1",
            "Midterm Exam due 10/15/2025",
            "Old quiz was due 03/01/2023",
            "Homework 2 due sometime soon",
            "Paper draft due Oct 3rd",
        ];
        let deadlines = collect_deadlines(&lines, &patterns, today());
        let dates: Vec<String> = deadlines.iter().map(|d| d.date.to_string()).collect();
        assert_eq!(dates, vec!["2025-10-03", "2025-10-15", "2025-12-01"]);
        assert_eq!(deadlines[0].task, "Paper draft due Oct 3rd");
    }

    #[test]
    fn test_equal_dates_keep_document_order() {
        let patterns = DatePatterns::new();
        let lines = ["Quiz A due 11/02/2025", "Quiz B due Nov 2"];
        let deadlines = collect_deadlines(&lines, &patterns, today());
        assert_eq!(deadlines.len(), 2);
        assert_eq!(deadlines[0].task, "Quiz A due 11/02/2025");
        assert_eq!(deadlines[1].task, "Quiz B due Nov 2");
    }
}
