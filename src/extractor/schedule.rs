//! Week-by-week outline capture.

pub const SECTION_HEADERS: [&str; 4] = [
    "schedule",
    "course outline",
    "weekly topics",
    "course calendar",
];

pub const SECTION_TERMINATORS: [&str; 4] = ["grading", "policies", "materials", "requirements"];

/// Capture the single contiguous block between a schedule header and the
/// first terminator line. Neither boundary line is kept, and nothing after
/// the terminator is examined.
pub fn extract_schedule_section(lines: &[&str]) -> String {
    let mut inside = false;
    let mut captured: Vec<&str> = Vec::new();

    for line in lines {
        let lower = line.to_lowercase();
        if !inside {
            if contains_any(&lower, &SECTION_HEADERS) {
                inside = true;
            }
            continue;
        }
        if contains_any(&lower, &SECTION_TERMINATORS) {
            break;
        }
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            captured.push(trimmed);
        }
    }

    captured.join("\n")
}

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_between_header_and_terminator() {
        let lines = [
            "Course: Algorithms",
            "Course Outline:",
            "  Week 1: Sorting  ",
            "",
            "Week 2: Graphs",
            "Grading Policy",
            "Week 3: should not appear",
        ];
        assert_eq!(
            extract_schedule_section(&lines),
            "Week 1: Sorting\nWeek 2: Graphs"
        );
    }

    #[test]
    fn test_no_header_yields_empty() {
        let lines = ["Week 1: Sorting", "Week 2: Graphs"];
        assert_eq!(extract_schedule_section(&lines), "");
    }

    #[test]
    fn test_terminator_before_header_is_ignored() {
        let lines = ["Grading: 50% exams", "Weekly Topics", "Recursion", "Required Materials"];
        assert_eq!(extract_schedule_section(&lines), "Recursion");
    }

    #[test]
    fn test_scan_does_not_resume_after_terminator() {
        let lines = [
            "Schedule",
            "Intro",
            "Course Policies",
            "Course Calendar",
            "Finals week",
        ];
        assert_eq!(extract_schedule_section(&lines), "Intro");
    }

    #[test]
    fn test_header_word_inside_section_is_captured() {
        let lines = ["Schedule", "Schedule subject to change", "Week 1"];
        assert_eq!(
            extract_schedule_section(&lines),
            "Schedule subject to change\nWeek 1"
        );
    }

    #[test]
    fn test_unterminated_section_runs_to_end() {
        let lines = ["Course Calendar", "Sep 1 intro", "Sep 8 lists"];
        assert_eq!(extract_schedule_section(&lines), "Sep 1 intro\nSep 8 lists");
    }
}
