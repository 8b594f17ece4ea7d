//! Employee Repository

use super::{RepoError, RepoResult};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate};
use sqlx::SqlitePool;

pub async fn find_by_business(pool: &SqlitePool, business_id: i64) -> RepoResult<Vec<Employee>> {
    let rows = sqlx::query_as::<_, Employee>(
        "SELECT id, business_id, name, email, phone, role, hourly_rate, created_at FROM employee WHERE business_id = ? ORDER BY name",
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let row = sqlx::query_as::<_, Employee>(
        "SELECT id, business_id, name, email, phone, role, hourly_rate, created_at FROM employee WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO employee (business_id, name, email, phone, role, hourly_rate, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7) RETURNING id",
    )
    .bind(data.business_id)
    .bind(data.name)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.role)
    .bind(data.hourly_rate)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: EmployeeUpdate) -> RepoResult<Employee> {
    let rows = sqlx::query(
        "UPDATE employee SET name = COALESCE(?1, name), email = COALESCE(?2, email), phone = COALESCE(?3, phone), role = COALESCE(?4, role), hourly_rate = COALESCE(?5, hourly_rate) WHERE id = ?6",
    )
    .bind(data.name)
    .bind(data.email)
    .bind(data.phone)
    .bind(data.role)
    .bind(data.hourly_rate)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Employee {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee {id} not found")))
}

/// Hard delete; an employee with an open shift cannot be removed
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let open: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM timesheet WHERE employee_id = ? AND clock_out IS NULL",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    if open > 0 {
        return Err(RepoError::Validation(
            "Employee has an open timesheet; clock out first".into(),
        ));
    }

    let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
