//! Job Assignment API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{RepoError, employee, job};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{JobAssignment, JobAssignmentCreate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub job_id: Option<i64>,
    pub employee_id: Option<i64>,
}

/// GET /api/job-assignments?job_id= | ?employee_id=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<JobAssignment>>> {
    let rows = if let Some(job_id) = query.job_id {
        job::find_assignments_by_job(&state.pool, job_id).await
    } else if let Some(employee_id) = query.employee_id {
        job::find_assignments_by_employee(&state.pool, employee_id).await
    } else {
        return Err(AppError::validation("job_id or employee_id is required"));
    }?;
    Ok(Json(rows))
}

/// POST /api/job-assignments
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<JobAssignmentCreate>,
) -> AppResult<(StatusCode, Json<JobAssignment>)> {
    job::find_by_id(&state.pool, payload.job_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::JobNotFound))?;
    employee::find_by_id(&state.pool, payload.employee_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    let row = job::create_assignment(&state.pool, payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            other => other.into(),
        })?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// DELETE /api/job-assignments/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = job::delete_assignment(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("Job assignment {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
