use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::extractor::ParsedSyllabus;

pub const HIGH_PRIORITY_DAYS: i64 = 7;
pub const MEDIUM_PRIORITY_DAYS: i64 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    pub task: String,
    pub due_date: NaiveDate,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySchedule {
    pub tasks: Vec<ScheduledTask>,
}

/// Priority by proximity: within a week is high, within two weeks medium.
pub fn classify_priority(due: NaiveDate, today: NaiveDate) -> Priority {
    let days_until_due = (due - today).num_days();
    if days_until_due <= HIGH_PRIORITY_DAYS {
        Priority::High
    } else if days_until_due <= MEDIUM_PRIORITY_DAYS {
        Priority::Medium
    } else {
        Priority::Low
    }
}

/// Upcoming deadlines (today included) in date order with a priority each.
pub fn generate_schedule(parsed: &ParsedSyllabus, today: NaiveDate) -> StudySchedule {
    let mut tasks: Vec<ScheduledTask> = parsed
        .deadlines
        .iter()
        .filter(|d| d.date >= today)
        .map(|d| ScheduledTask {
            task: d.task.clone(),
            due_date: d.date,
            priority: classify_priority(d.date, today),
        })
        .collect();

    // Stored deadlines are already sorted; keep that true for hand-built input.
    tasks.sort_by_key(|t| t.due_date);
    StudySchedule { tasks }
}
