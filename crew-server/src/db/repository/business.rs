//! Business Repository

use super::{RepoError, RepoResult};
use shared::models::{Business, BusinessCreate, BusinessUpdate};
use sqlx::SqlitePool;

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Business>> {
    let rows = sqlx::query_as::<_, Business>(
        "SELECT id, name, email, phone, address, created_at FROM business ORDER BY name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Business>> {
    let row = sqlx::query_as::<_, Business>(
        "SELECT id, name, email, phone, address, created_at FROM business WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: BusinessCreate) -> RepoResult<Business> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO business (name, email, phone, address, created_at) VALUES (?1, ?2, ?3, ?4, ?5) RETURNING id",
    )
    .bind(data.name)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.address)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create business".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: BusinessUpdate) -> RepoResult<Business> {
    let rows = sqlx::query(
        "UPDATE business SET name = COALESCE(?1, name), email = COALESCE(?2, email), phone = COALESCE(?3, phone), address = COALESCE(?4, address) WHERE id = ?5",
    )
    .bind(data.name)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.address)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Business {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Business {id} not found")))
}
