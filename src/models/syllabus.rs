use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::extractor::ParsedSyllabus;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Syllabus {
    pub id: String,
    pub user_id: i64,
    pub filename: String,
    pub content: String,
    pub parsed_content: ParsedSyllabus,
    pub uploaded_at: String,
}

/// Row as stored; `parsed_content` holds the JSON-encoded `ParsedSyllabus`.
#[derive(Debug, Clone, FromRow)]
pub struct SyllabusRow {
    pub id: String,
    pub user_id: i64,
    pub filename: String,
    pub content: String,
    pub parsed_content: String,
    pub uploaded_at: String,
}

impl TryFrom<SyllabusRow> for Syllabus {
    type Error = serde_json::Error;

    fn try_from(row: SyllabusRow) -> Result<Self, Self::Error> {
        Ok(Self {
            parsed_content: serde_json::from_str(&row.parsed_content)?,
            id: row.id,
            user_id: row.user_id,
            filename: row.filename,
            content: row.content,
            uploaded_at: row.uploaded_at,
        })
    }
}
