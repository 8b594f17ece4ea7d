//! Business API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::repository::business;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Business, BusinessCreate, BusinessUpdate};

/// GET /api/businesses
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Business>>> {
    let rows = business::find_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /api/businesses/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Business>> {
    let row = business::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Business {}", id)))?;
    Ok(Json(row))
}

/// POST /api/businesses
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BusinessCreate>,
) -> AppResult<(StatusCode, Json<Business>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_NOTE_LEN)?;

    let row = business::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/businesses/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BusinessUpdate>,
) -> AppResult<Json<Business>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_NOTE_LEN)?;

    let row = business::update(&state.pool, id, payload).await?;
    Ok(Json(row))
}
