//! Asset API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{RepoError, asset};
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_text,
    validate_required_text,
};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Asset, AssetCreate, AssetUpdate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub business_id: Option<i64>,
    pub location_id: Option<i64>,
}

/// GET /api/assets?business_id= | ?location_id=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Asset>>> {
    let rows = if let Some(location_id) = query.location_id {
        asset::find_by_location(&state.pool, location_id).await
    } else if let Some(business_id) = query.business_id {
        asset::find_by_business(&state.pool, business_id).await
    } else {
        return Err(AppError::validation(
            "business_id or location_id is required",
        ));
    }?;
    Ok(Json(rows))
}

/// GET /api/assets/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Asset>> {
    let row = asset::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AssetNotFound))?;
    Ok(Json(row))
}

#[derive(Debug, Deserialize)]
pub struct ScanQuery {
    #[serde(rename = "type")]
    pub scan_type: Option<String>,
}

/// GET /api/assets/scan/{code}?type=barcode|qr — plain key lookup for
/// scanner clients
pub async fn scan_lookup(
    State(state): State<ServerState>,
    Path(code): Path<String>,
    Query(query): Query<ScanQuery>,
) -> AppResult<Json<Asset>> {
    let row = match query.scan_type.as_deref() {
        Some("barcode") => asset::find_by_barcode(&state.pool, &code).await?,
        Some("qr") => asset::find_by_qr_code(&state.pool, &code).await?,
        _ => return Err(AppError::new(ErrorCode::InvalidScanType)),
    };

    let asset = row.ok_or_else(|| AppError::new(ErrorCode::AssetNotFound))?;
    Ok(Json(asset))
}

/// POST /api/assets
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AssetCreate>,
) -> AppResult<(StatusCode, Json<Asset>)> {
    validate_required_text(&payload.title, "title", MAX_NAME_LEN)?;
    validate_optional_text(&payload.custom_tag, "custom_tag", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.barcode, "barcode", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.qr_code, "qr_code", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let row = asset::create(&state.pool, payload)
        .await
        .map_err(|e| match e {
            RepoError::Duplicate(msg) => AppError::conflict(msg),
            other => other.into(),
        })?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// PATCH /api/assets/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<AssetUpdate>,
) -> AppResult<Json<Asset>> {
    if let Some(ref title) = payload.title {
        validate_required_text(title, "title", MAX_NAME_LEN)?;
    }
    validate_optional_text(&payload.custom_tag, "custom_tag", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.description, "description", MAX_NOTE_LEN)?;

    let row = asset::update(&state.pool, id, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::AssetNotFound),
            other => other.into(),
        })?;
    Ok(Json(row))
}
