use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::extract::{DefaultBodyLimit, Multipart, Path};
use axum::routing::{patch, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::Local;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::db::repository;
use crate::error::AppError;
use crate::models::*;
use crate::services::{StudySchedule, decode_upload, generate_schedule};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let upload_limit = state.max_upload_bytes;

    Router::new()
        .route("/health", get(health))
        .route(
            "/api/syllabi",
            get(list_syllabi)
                .post(upload_syllabus)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/syllabi/{id}", get(get_syllabus))
        .route("/api/syllabi/{id}/schedule", get(get_schedule))
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", patch(update_todo))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn upload_syllabus(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Syllabus>, AppError> {
    let limit = state.max_upload_bytes;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, limit))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().map(str::to_string);
        let data = field.bytes().await.map_err(|e| multipart_error(e, limit))?;
        let doc = decode_upload(filename.as_deref(), &data)?;

        let today = Local::now().date_naive();
        let parsed = state.extractor.extract(&doc, today);

        let syllabus = repository::insert_syllabus(
            &state.db,
            DEFAULT_USER_ID,
            &doc.filename,
            &doc.text,
            &parsed,
        )
        .await?;

        info!(
            "stored syllabus {} ({}): {} assignments, {} deadlines",
            syllabus.id,
            syllabus.filename,
            parsed.assignments.len(),
            parsed.deadlines.len()
        );
        return Ok(Json(syllabus));
    }

    Err(AppError::BadRequest("No file uploaded".to_string()))
}

fn multipart_error(e: MultipartError, limit: usize) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(limit)
    } else {
        AppError::BadRequest(format!("Failed to read multipart field: {}", e.body_text()))
    }
}

async fn list_syllabi(State(state): State<AppState>) -> Result<Json<Vec<Syllabus>>, AppError> {
    let syllabi = repository::fetch_syllabi(&state.db, DEFAULT_USER_ID).await?;
    Ok(Json(syllabi))
}

async fn get_syllabus(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Syllabus>, AppError> {
    let syllabus = repository::find_syllabus_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(syllabus))
}

async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudySchedule>, AppError> {
    let syllabus = repository::find_syllabus_by_id(&state.db, &id)
        .await?
        .ok_or(AppError::NotFound)?;
    let today = Local::now().date_naive();
    Ok(Json(generate_schedule(&syllabus.parsed_content, today)))
}

async fn list_todos(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = repository::fetch_todos(&state.db, DEFAULT_USER_ID).await?;
    Ok(Json(todos))
}

async fn create_todo(
    State(state): State<AppState>,
    Json(req): Json<NewTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    if req.task.trim().is_empty() {
        return Err(AppError::BadRequest("task must not be empty".to_string()));
    }
    repository::find_syllabus_by_id(&state.db, &req.syllabus_id)
        .await?
        .ok_or(AppError::NotFound)?;

    let todo = repository::insert_todo(&state.db, DEFAULT_USER_ID, req).await?;
    Ok(Json(todo))
}

async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTodoRequest>,
) -> Result<Json<Todo>, AppError> {
    let todo = repository::set_todo_completed(&state.db, &id, req.completed)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(todo))
}
