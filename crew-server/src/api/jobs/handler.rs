//! Job API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{RepoError, job};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_optional_text, validate_required_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Job, JobCreate, JobUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub business_id: Option<i64>,
    pub client_id: Option<i64>,
}

/// GET /api/jobs?business_id= | ?client_id=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Job>>> {
    let rows = if let Some(client_id) = query.client_id {
        job::find_by_client(&state.pool, client_id).await
    } else if let Some(business_id) = query.business_id {
        job::find_by_business(&state.pool, business_id).await
    } else {
        return Err(AppError::validation("business_id or client_id is required"));
    }?;
    Ok(Json(rows))
}

/// GET /api/jobs/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Job>> {
    let row = job::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::JobNotFound))?;
    Ok(Json(row))
}

/// POST /api/jobs
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<JobCreate>,
) -> AppResult<(StatusCode, Json<Job>)> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let row = job::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/jobs/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<JobUpdate>,
) -> AppResult<Json<Job>> {
    if let Some(ref title) = payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let row = job::update(&state.pool, id, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::JobNotFound),
            other => other.into(),
        })?;
    Ok(Json(row))
}
