//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::employee;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text, validate_rate,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub business_id: Option<i64>,
}

/// GET /api/employees?business_id=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Employee>>> {
    let business_id = query
        .business_id
        .ok_or_else(|| AppError::validation("business_id is required"))?;
    let rows = employee::find_by_business(&state.pool, business_id).await?;
    Ok(Json(rows))
}

/// GET /api/employees/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let row = employee::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;
    Ok(Json(row))
}

/// POST /api/employees
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_required_text(&payload.role, "role", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    if let Some(rate) = payload.hourly_rate {
        validate_rate(rate, "hourly_rate")?;
    }

    let row = employee::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/employees/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.role, "role", MAX_SHORT_TEXT_LEN)?;
    if let Some(rate) = payload.hourly_rate {
        validate_rate(rate, "hourly_rate")?;
    }

    let row = employee::update(&state.pool, id, payload)
        .await
        .map_err(|e| match e {
            crate::db::repository::RepoError::NotFound(_) => {
                AppError::new(ErrorCode::EmployeeNotFound)
            }
            other => other.into(),
        })?;
    Ok(Json(row))
}

/// DELETE /api/employees/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    let deleted = employee::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::new(ErrorCode::EmployeeNotFound));
    }
    Ok(StatusCode::NO_CONTENT)
}
