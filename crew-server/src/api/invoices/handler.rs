//! Invoice API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{RepoError, invoice, job};
use crate::utils::time::{day_end_millis, day_start_millis, parse_date};
use crate::utils::{AppError, AppResult, ErrorCode};
use shared::models::{Invoice, InvoiceGenerate};

/// Query params for listing invoices
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub business_id: Option<i64>,
    pub client_id: Option<i64>,
    pub job_id: Option<i64>,
}

/// GET /api/invoices?business_id= | ?client_id= | ?job_id=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Invoice>>> {
    let rows = if let Some(job_id) = query.job_id {
        invoice::find_by_job(&state.pool, job_id).await
    } else if let Some(client_id) = query.client_id {
        invoice::find_by_client(&state.pool, client_id).await
    } else if let Some(business_id) = query.business_id {
        invoice::find_by_business(&state.pool, business_id).await
    } else {
        return Err(AppError::validation(
            "business_id, client_id, or job_id is required",
        ));
    }?;
    Ok(Json(rows))
}

/// GET /api/invoices/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Invoice>> {
    let inv = invoice::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::InvoiceNotFound))?;
    Ok(Json(inv))
}

/// POST /api/invoices/generate — snapshot a week of shift hours
///
/// Dates are `YYYY-MM-DD`, interpreted in the business timezone; the
/// window covers both days inclusively.
pub async fn generate(
    State(state): State<ServerState>,
    Json(payload): Json<InvoiceGenerate>,
) -> AppResult<(StatusCode, Json<Invoice>)> {
    let start = parse_date(&payload.week_start_date)?;
    let end = parse_date(&payload.week_end_date)?;
    if start > end {
        return Err(AppError::new(ErrorCode::InvalidInvoiceWindow)
            .with_detail("week_start_date", payload.week_start_date.clone())
            .with_detail("week_end_date", payload.week_end_date.clone()));
    }

    let job = job::find_by_id(&state.pool, payload.job_id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::JobNotFound))?;
    if job.client_id.is_none() {
        return Err(AppError::new(ErrorCode::JobHasNoClient));
    }

    let tz = state.config.timezone;
    let week_start = day_start_millis(start, tz);
    let week_end = day_end_millis(end, tz);

    let inv = invoice::generate(&state.pool, &job, week_start, week_end)
        .await
        .map_err(|e| match e {
            RepoError::Validation(_) => AppError::new(ErrorCode::JobHasNoClient),
            other => other.into(),
        })?;

    Ok((StatusCode::CREATED, Json(inv)))
}

/// POST /api/invoices/{id}/send — DRAFT → SENT, one-way
pub async fn send(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Invoice>> {
    let inv = invoice::send(&state.pool, id).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::new(ErrorCode::InvoiceNotFound),
        RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::InvoiceAlreadySent, msg),
        other => other.into(),
    })?;

    tracing::info!(invoice_id = inv.id, invoice_number = %inv.invoice_number, "Invoice sent");

    Ok(Json(inv))
}
