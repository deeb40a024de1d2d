use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex, RegexBuilder};

const MONTH_PREFIXES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Compiled date patterns, tried in order: numeric first, then month name.
#[derive(Debug, Clone)]
pub struct DatePatterns {
    numeric: Regex,
    month_name: Regex,
}

impl DatePatterns {
    pub fn new() -> Self {
        // MM/DD/YYYY or MM-DD-YYYY, year must be 20xx
        let numeric = Regex::new(r"\b(\d{1,2})[/-](\d{1,2})[/-](20\d{2})\b")
            .expect("numeric date pattern is valid");

        // "Dec 1", "December 1st, 2026", "Sept. 9 2026"
        let month_name = RegexBuilder::new(
            r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{1,2})(?:st|nd|rd|th)?\b(?:(?:,\s*|\s+)(\d{4})\b)?",
        )
        .case_insensitive(true)
        .build()
        .expect("month-name date pattern is valid");

        Self { numeric, month_name }
    }

    /// Locate the first date in `line` and turn it into a calendar date.
    ///
    /// Only the first pattern that matches is considered. A match that does
    /// not form a real date (month 13, February 30th) yields `None` rather
    /// than falling through to the next pattern. Missing years are taken
    /// from `today`.
    pub fn find_date(&self, line: &str, today: NaiveDate) -> Option<NaiveDate> {
        if let Some(caps) = self.numeric.captures(line) {
            return parse_numeric(&caps);
        }
        if let Some(caps) = self.month_name.captures(line) {
            return parse_month_name(&caps, today);
        }
        None
    }
}

impl Default for DatePatterns {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_numeric(caps: &Captures<'_>) -> Option<NaiveDate> {
    let month: u32 = caps[1].parse().ok()?;
    let day: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_month_name(caps: &Captures<'_>, today: NaiveDate) -> Option<NaiveDate> {
    let month = month_from_prefix(&caps[1])?;
    let day: u32 = caps[2].parse().ok()?;
    let year = match caps.get(3) {
        Some(y) => y.as_str().parse().ok()?,
        None => today.year(),
    };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_from_prefix(prefix: &str) -> Option<u32> {
    let prefix = prefix.to_ascii_lowercase();
    MONTH_PREFIXES
        .iter()
        .position(|m| *m == prefix)
        .map(|idx| idx as u32 + 1)
}

/// Accept only dates in the current or the following calendar year.
pub fn within_year_window(date: NaiveDate, today: NaiveDate) -> bool {
    let year = today.year();
    (year..=year + 1).contains(&date.year())
}
