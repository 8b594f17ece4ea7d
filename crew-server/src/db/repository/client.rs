//! Client Repository

use super::{RepoError, RepoResult};
use shared::models::{Client, ClientCreate, ClientUpdate};
use sqlx::SqlitePool;

pub async fn find_by_business(pool: &SqlitePool, business_id: i64) -> RepoResult<Vec<Client>> {
    let rows = sqlx::query_as::<_, Client>(
        "SELECT id, business_id, name, email, phone, company_name, created_at FROM client WHERE business_id = ? ORDER BY name",
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Client>> {
    let row = sqlx::query_as::<_, Client>(
        "SELECT id, business_id, name, email, phone, company_name, created_at FROM client WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: ClientCreate) -> RepoResult<Client> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO client (business_id, name, email, phone, company_name, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6) RETURNING id",
    )
    .bind(data.business_id)
    .bind(data.name)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.company_name)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create client".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: ClientUpdate) -> RepoResult<Client> {
    let rows = sqlx::query(
        "UPDATE client SET name = COALESCE(?1, name), email = COALESCE(?2, email), phone = COALESCE(?3, phone), company_name = COALESCE(?4, company_name) WHERE id = ?5",
    )
    .bind(data.name)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.company_name)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Client {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Client {id} not found")))
}
