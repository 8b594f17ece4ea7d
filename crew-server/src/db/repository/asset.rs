//! Asset Repository
//!
//! Assets plus their scan history. A scan event updates the owning
//! asset's status in the same transaction.

use super::{RepoError, RepoResult};
use shared::models::{Asset, AssetCreate, AssetScan, AssetScanCreate, AssetUpdate};
use sqlx::SqlitePool;

// ── Asset CRUD ──────────────────────────────────────────────────────

pub async fn find_by_business(pool: &SqlitePool, business_id: i64) -> RepoResult<Vec<Asset>> {
    let rows = sqlx::query_as::<_, Asset>(
        "SELECT id, business_id, location_id, title, custom_tag, barcode, qr_code, description, status, created_at FROM asset WHERE business_id = ? ORDER BY title",
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_location(pool: &SqlitePool, location_id: i64) -> RepoResult<Vec<Asset>> {
    let rows = sqlx::query_as::<_, Asset>(
        "SELECT id, business_id, location_id, title, custom_tag, barcode, qr_code, description, status, created_at FROM asset WHERE location_id = ? ORDER BY title",
    )
    .bind(location_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Asset>> {
    let row = sqlx::query_as::<_, Asset>(
        "SELECT id, business_id, location_id, title, custom_tag, barcode, qr_code, description, status, created_at FROM asset WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Plain key lookup for scanner clients
pub async fn find_by_barcode(pool: &SqlitePool, barcode: &str) -> RepoResult<Option<Asset>> {
    let row = sqlx::query_as::<_, Asset>(
        "SELECT id, business_id, location_id, title, custom_tag, barcode, qr_code, description, status, created_at FROM asset WHERE barcode = ? LIMIT 1",
    )
    .bind(barcode)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Plain key lookup for scanner clients
pub async fn find_by_qr_code(pool: &SqlitePool, qr_code: &str) -> RepoResult<Option<Asset>> {
    let row = sqlx::query_as::<_, Asset>(
        "SELECT id, business_id, location_id, title, custom_tag, barcode, qr_code, description, status, created_at FROM asset WHERE qr_code = ? LIMIT 1",
    )
    .bind(qr_code)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: AssetCreate) -> RepoResult<Asset> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO asset (business_id, location_id, title, custom_tag, barcode, qr_code, description, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 'AVAILABLE', ?8) RETURNING id",
    )
    .bind(data.business_id)
    .bind(data.location_id)
    .bind(data.title)
    .bind(data.custom_tag)
    .bind(data.barcode)
    .bind(data.qr_code)
    .bind(data.description)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepoError::Duplicate("Barcode or QR code is already registered".into())
        }
        _ => RepoError::from(e),
    })?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create asset".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: AssetUpdate) -> RepoResult<Asset> {
    let rows = sqlx::query(
        "UPDATE asset SET location_id = COALESCE(?1, location_id), title = COALESCE(?2, title), custom_tag = COALESCE(?3, custom_tag), description = COALESCE(?4, description), status = COALESCE(?5, status) WHERE id = ?6",
    )
    .bind(data.location_id)
    .bind(data.title)
    .bind(data.custom_tag)
    .bind(data.description)
    .bind(data.status)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Asset {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Asset {id} not found")))
}

// ── Asset scans ─────────────────────────────────────────────────────

pub async fn find_scans_by_asset(pool: &SqlitePool, asset_id: i64) -> RepoResult<Vec<AssetScan>> {
    let rows = sqlx::query_as::<_, AssetScan>(
        "SELECT id, asset_id, employee_id, job_id, scan_type, notes, scanned_at FROM asset_scan WHERE asset_id = ? ORDER BY scanned_at DESC",
    )
    .bind(asset_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_scans_by_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> RepoResult<Vec<AssetScan>> {
    let rows = sqlx::query_as::<_, AssetScan>(
        "SELECT id, asset_id, employee_id, job_id, scan_type, notes, scanned_at FROM asset_scan WHERE employee_id = ? ORDER BY scanned_at DESC",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Record a scan event and move the asset to the implied status
///
/// Scan row and status change commit together or not at all.
pub async fn record_scan(pool: &SqlitePool, data: AssetScanCreate) -> RepoResult<AssetScan> {
    let asset = find_by_id(pool, data.asset_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Asset {} not found", data.asset_id)))?;

    let new_status = data.scan_type.resulting_status();
    let now = shared::util::now_millis();

    let mut tx = pool.begin().await?;

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO asset_scan (asset_id, employee_id, job_id, scan_type, notes, scanned_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
    )
    .bind(data.asset_id)
    .bind(data.employee_id)
    .bind(data.job_id)
    .bind(data.scan_type)
    .bind(data.notes)
    .bind(now)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("UPDATE asset SET status = ?1 WHERE id = ?2")
        .bind(new_status)
        .bind(asset.id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    let row = sqlx::query_as::<_, AssetScan>(
        "SELECT id, asset_id, employee_id, job_id, scan_type, notes, scanned_at FROM asset_scan WHERE id = ?",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}
