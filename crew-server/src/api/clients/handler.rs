//! Client API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::client;
use crate::utils::validation::{
    MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Client, ClientCreate, ClientUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub business_id: Option<i64>,
}

/// GET /api/clients?business_id=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Client>>> {
    let business_id = query
        .business_id
        .ok_or_else(|| AppError::validation("business_id is required"))?;
    let rows = client::find_by_business(&state.pool, business_id).await?;
    Ok(Json(rows))
}

/// GET /api/clients/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Client>> {
    let row = client::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ClientNotFound))?;
    Ok(Json(row))
}

/// POST /api/clients
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ClientCreate>,
) -> AppResult<(StatusCode, Json<Client>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.company_name, "company_name", MAX_NAME_LEN)?;

    let row = client::create(&state.pool, payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/clients/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<ClientUpdate>,
) -> AppResult<Json<Client>> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.company_name, "company_name", MAX_NAME_LEN)?;

    let row = client::update(&state.pool, id, payload)
        .await
        .map_err(|e| match e {
            crate::db::repository::RepoError::NotFound(_) => {
                AppError::new(ErrorCode::ClientNotFound)
            }
            other => other.into(),
        })?;
    Ok(Json(row))
}
