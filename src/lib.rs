pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod extractor;
pub mod models;
pub mod services;
pub mod state;

pub use extractor::{ParsedSyllabus, RawDocument, SyllabusExtractor, extract_syllabus};
