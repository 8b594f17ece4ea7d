//! Location Repository

use super::{RepoError, RepoResult};
use shared::models::{Location, LocationCreate};
use sqlx::SqlitePool;

pub async fn find_by_business(pool: &SqlitePool, business_id: i64) -> RepoResult<Vec<Location>> {
    let rows = sqlx::query_as::<_, Location>(
        "SELECT id, business_id, name, address, contact_person, contact_phone, created_at FROM location WHERE business_id = ? ORDER BY name",
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Location>> {
    let row = sqlx::query_as::<_, Location>(
        "SELECT id, business_id, name, address, contact_person, contact_phone, created_at FROM location WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: LocationCreate) -> RepoResult<Location> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO location (business_id, name, address, contact_person, contact_phone, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
    )
    .bind(data.business_id)
    .bind(data.name)
    .bind(data.address)
    .bind(data.contact_person)
    .bind(data.contact_phone)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create location".into()))
}
