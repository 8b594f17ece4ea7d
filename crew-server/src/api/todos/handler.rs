//! Todo API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{RepoError, todo};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult};
use shared::models::{Todo, TodoCreate, TodoUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub job_id: Option<i64>,
}

/// GET /api/todos?job_id=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Todo>>> {
    let job_id = query
        .job_id
        .ok_or_else(|| AppError::validation("job_id is required"))?;
    let rows = todo::find_by_job(&state.pool, job_id).await?;
    Ok(Json(rows))
}

/// GET /api/todos/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Todo>> {
    let row = todo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Todo {}", id)))?;
    Ok(Json(row))
}

/// POST /api/todos
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TodoCreate>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let row = todo::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/todos/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TodoUpdate>,
) -> AppResult<Json<Todo>> {
    if let Some(ref title) = payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let row = todo::update(&state.pool, id, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(msg) => AppError::with_message(crate::utils::ErrorCode::NotFound, msg),
            other => other.into(),
        })?;
    Ok(Json(row))
}

/// DELETE /api/todos/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = todo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Todo {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
