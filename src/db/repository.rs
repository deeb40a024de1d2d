use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::AppError;
use crate::extractor::ParsedSyllabus;
use crate::models::{NewTodoRequest, Syllabus, SyllabusRow, Todo};

pub async fn insert_syllabus(
    db: &SqlitePool,
    user_id: i64,
    filename: &str,
    content: &str,
    parsed: &ParsedSyllabus,
) -> Result<Syllabus, AppError> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();
    let parsed_json = serde_json::to_string(parsed)?;

    sqlx::query(
        r#"
        INSERT INTO syllabi
            (id, user_id, filename, content, parsed_content, uploaded_at)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(filename)
    .bind(content)
    .bind(&parsed_json)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Syllabus {
        id,
        user_id,
        filename: filename.to_string(),
        content: content.to_string(),
        parsed_content: parsed.clone(),
        uploaded_at: now,
    })
}

pub async fn fetch_syllabi(db: &SqlitePool, user_id: i64) -> Result<Vec<Syllabus>, AppError> {
    let rows = sqlx::query_as::<_, SyllabusRow>(
        r#"
        SELECT id, user_id, filename, content, parsed_content, uploaded_at
        FROM syllabi
        WHERE user_id = ?1
        ORDER BY uploaded_at, rowid
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await?;

    rows.into_iter()
        .map(|row| Syllabus::try_from(row).map_err(AppError::from))
        .collect()
}

pub async fn find_syllabus_by_id(db: &SqlitePool, id: &str) -> Result<Option<Syllabus>, AppError> {
    let row = sqlx::query_as::<_, SyllabusRow>(
        "SELECT id, user_id, filename, content, parsed_content, uploaded_at FROM syllabi WHERE id = ?"
    )
    .bind(id)
    .fetch_optional(db)
    .await?;

    match row {
        Some(row) => Ok(Some(Syllabus::try_from(row)?)),
        None => Ok(None),
    }
}

pub async fn fetch_todos(db: &SqlitePool, user_id: i64) -> Result<Vec<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        r#"
        SELECT id, user_id, syllabus_id, task, due_date, completed, updated_at
        FROM todos
        WHERE user_id = ?1
        ORDER BY due_date, rowid
        "#,
    )
    .bind(user_id)
    .fetch_all(db)
    .await
}

pub async fn find_todo_by_id(db: &SqlitePool, id: &str) -> Result<Option<Todo>, sqlx::Error> {
    sqlx::query_as::<_, Todo>(
        "SELECT id, user_id, syllabus_id, task, due_date, completed, updated_at FROM todos WHERE id = ?"
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn insert_todo(
    db: &SqlitePool,
    user_id: i64,
    req: NewTodoRequest,
) -> Result<Todo, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let now = Utc::now().to_rfc3339();

    sqlx::query(
        r#"
        INSERT INTO todos
            (id, user_id, syllabus_id, task, due_date, completed, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6)
        "#,
    )
    .bind(&id)
    .bind(user_id)
    .bind(&req.syllabus_id)
    .bind(&req.task)
    .bind(req.due_date)
    .bind(&now)
    .execute(db)
    .await?;

    Ok(Todo {
        id,
        user_id,
        syllabus_id: req.syllabus_id,
        task: req.task,
        due_date: req.due_date,
        completed: false,
        updated_at: now,
    })
}

pub async fn set_todo_completed(
    db: &SqlitePool,
    id: &str,
    completed: bool,
) -> Result<Option<Todo>, sqlx::Error> {
    let now = Utc::now().to_rfc3339();
    let affected = sqlx::query(
        r#"
        UPDATE todos
        SET completed = ?2,
            updated_at = ?3
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .bind(completed)
    .bind(&now)
    .execute(db)
    .await?
    .rows_affected();

    if affected == 0 {
        return Ok(None);
    }
    find_todo_by_id(db, id).await
}
