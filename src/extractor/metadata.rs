//! Single-value "Label: value" lookups (course name, instructor).

pub const COURSE_KEYWORDS: [&str; 2] = ["course", "class"];
pub const INSTRUCTOR_KEYWORDS: [&str; 3] = ["instructor", "professor", "taught by"];

/// Outcome of a single-value pass over the document lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch<T> {
    Matched(T),
    Unmatched,
}

impl<T> LineMatch<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            LineMatch::Matched(value) => Some(value),
            LineMatch::Unmatched => None,
        }
    }
}

pub fn find_course_name(lines: &[&str]) -> LineMatch<String> {
    find_labelled_value(lines, &COURSE_KEYWORDS)
}

pub fn find_instructor(lines: &[&str]) -> LineMatch<String> {
    find_labelled_value(lines, &INSTRUCTOR_KEYWORDS)
}

/// First line containing one of `keywords` (case-insensitive) and a colon
/// wins; the value is whatever follows the first colon, trimmed.
fn find_labelled_value(lines: &[&str], keywords: &[&str]) -> LineMatch<String> {
    for line in lines {
        let lower = line.to_lowercase();
        if !keywords.iter().any(|k| lower.contains(k)) {
            continue;
        }
        if let Some((_, value)) = line.split_once(':') {
            return LineMatch::Matched(value.trim().to_string());
        }
    }
    LineMatch::Unmatched
}
