use std::sync::Arc;

use sqlx::SqlitePool;

use crate::extractor::SyllabusExtractor;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub extractor: Arc<SyllabusExtractor>,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(db: SqlitePool, max_upload_bytes: usize) -> Self {
        Self {
            db,
            extractor: Arc::new(SyllabusExtractor::new()),
            max_upload_bytes,
        }
    }
}
