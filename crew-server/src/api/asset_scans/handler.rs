//! Asset Scan API Handlers

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{RepoError, asset, employee};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{AssetScan, AssetScanCreate};

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub asset_id: Option<i64>,
    pub employee_id: Option<i64>,
}

/// GET /api/asset-scans?asset_id= | ?employee_id=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<AssetScan>>> {
    let rows = if let Some(asset_id) = query.asset_id {
        asset::find_scans_by_asset(&state.pool, asset_id).await
    } else if let Some(employee_id) = query.employee_id {
        asset::find_scans_by_employee(&state.pool, employee_id).await
    } else {
        return Err(AppError::validation("asset_id or employee_id is required"));
    }?;
    Ok(Json(rows))
}

/// POST /api/asset-scans — record a scan and move the asset's status
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<AssetScanCreate>,
) -> AppResult<(StatusCode, Json<AssetScan>)> {
    validate_optional_text(&payload.notes, "notes", MAX_NOTE_LEN)?;

    employee::find_by_id(&state.pool, payload.employee_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound))?;

    let scan = asset::record_scan(&state.pool, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::AssetNotFound),
            other => other.into(),
        })?;

    tracing::info!(
        scan_id = scan.id,
        asset_id = scan.asset_id,
        employee_id = scan.employee_id,
        scan_type = ?scan.scan_type,
        "Asset scan recorded"
    );

    Ok((StatusCode::CREATED, Json(scan)))
}
