//! Timesheet API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{RepoError, employee, job, timesheet};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text, validate_rate};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{ClockInRequest, ClockOutRequest, Timesheet, TimesheetStatus, TimesheetUpdate};

/// Query params for listing timesheets
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub employee_id: Option<i64>,
    pub job_id: Option<i64>,
}

/// GET /api/timesheets?employee_id= | ?job_id=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Timesheet>>> {
    let rows = if let Some(employee_id) = query.employee_id {
        timesheet::find_by_employee(&state.pool, employee_id).await
    } else if let Some(job_id) = query.job_id {
        timesheet::find_by_job(&state.pool, job_id).await
    } else {
        return Err(AppError::validation("employee_id or job_id is required"));
    }?;
    Ok(Json(rows))
}

/// GET /api/timesheets/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Timesheet>> {
    let ts = timesheet::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::TimesheetNotFound))?;
    Ok(Json(ts))
}

/// GET /api/timesheets/active/{employee_id} — the open shift or null
pub async fn get_active(
    State(state): State<ServerState>,
    Path(employee_id): Path<i64>,
) -> AppResult<Json<Option<Timesheet>>> {
    let active = timesheet::find_active(&state.pool, employee_id).await?;
    Ok(Json(active))
}

/// POST /api/timesheets/clock-in — open a shift
///
/// The billable rate snapshot comes from the request, falling back to
/// the employee's default hourly rate.
pub async fn clock_in(
    State(state): State<ServerState>,
    Json(payload): Json<ClockInRequest>,
) -> AppResult<(StatusCode, Json<Timesheet>)> {
    if let Some(rate) = payload.billable_rate {
        validate_rate(rate, "billable_rate")?;
    }

    let emp = employee::find_by_id(&state.pool, payload.employee_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
    job::find_by_id(&state.pool, payload.job_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::JobNotFound))?;

    let rate = payload.billable_rate.or(emp.hourly_rate);

    let ts = timesheet::clock_in(&state.pool, emp.id, payload.job_id, rate)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(_) => AppError::new(ErrorCode::AlreadyClockedIn),
            other => other.into(),
        })?;

    tracing::info!(
        timesheet_id = ts.id,
        employee_id = ts.employee_id,
        job_id = ts.job_id,
        "Employee clocked in"
    );

    Ok((StatusCode::CREATED, Json(ts)))
}

/// POST /api/timesheets/clock-out — close the open shift
pub async fn clock_out(
    State(state): State<ServerState>,
    Json(payload): Json<ClockOutRequest>,
) -> AppResult<Json<Timesheet>> {
    if let Some(lunch) = payload.lunch_break_minutes
        && lunch < 0
    {
        return Err(AppError::validation(
            "lunch_break_minutes must be non-negative",
        ));
    }

    let ts = timesheet::clock_out(&state.pool, payload.employee_id, payload.lunch_break_minutes)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::NoActiveTimesheet),
            other => other.into(),
        })?;

    tracing::info!(
        timesheet_id = ts.id,
        employee_id = ts.employee_id,
        total_hours = ts.total_hours,
        "Employee clocked out"
    );

    Ok(Json(ts))
}

/// POST /api/timesheets/{id}/approve
pub async fn approve(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Timesheet>> {
    set_status(&state, id, TimesheetStatus::Approved).await
}

/// POST /api/timesheets/{id}/reject
pub async fn reject(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Timesheet>> {
    set_status(&state, id, TimesheetStatus::Rejected).await
}

async fn set_status(
    state: &ServerState,
    id: i64,
    new_status: TimesheetStatus,
) -> AppResult<Json<Timesheet>> {
    let ts = timesheet::set_status(&state.pool, id, new_status)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::TimesheetNotFound),
            RepoError::Duplicate(msg) => {
                AppError::with_message(ErrorCode::InvalidStatusTransition, msg)
            }
            other => other.into(),
        })?;
    Ok(Json(ts))
}

/// PATCH /api/timesheets/{id} — corrections to rate or notes
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<TimesheetUpdate>,
) -> AppResult<Json<Timesheet>> {
    if let Some(rate) = payload.billable_rate {
        validate_rate(rate, "billable_rate")?;
    }
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    let ts = timesheet::update(&state.pool, id, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::TimesheetNotFound),
            other => other.into(),
        })?;
    Ok(Json(ts))
}
