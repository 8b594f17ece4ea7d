//! Location API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::location;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Location, LocationCreate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub business_id: Option<i64>,
}

/// GET /api/locations?business_id=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Location>>> {
    let business_id = query
        .business_id
        .ok_or_else(|| AppError::validation("business_id is required"))?;
    let rows = location::find_by_business(&state.pool, business_id).await?;
    Ok(Json(rows))
}

/// GET /api/locations/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Location>> {
    let row = location::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::LocationNotFound))?;
    Ok(Json(row))
}

/// POST /api/locations
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<LocationCreate>,
) -> AppResult<(StatusCode, Json<Location>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.address, "address", MAX_NOTE_LEN)?;
    validate_optional_text(&payload.contact_person, "contact_person", MAX_NAME_LEN)?;
    validate_optional_text(&payload.contact_phone, "contact_phone", MAX_SHORT_TEXT_LEN)?;

    let row = location::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
