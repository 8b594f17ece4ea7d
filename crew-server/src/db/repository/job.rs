//! Job Repository
//!
//! Jobs plus the job↔employee assignment table.

use super::{RepoError, RepoResult};
use shared::models::{Job, JobAssignment, JobAssignmentCreate, JobCreate, JobUpdate};
use sqlx::SqlitePool;

// ── Job CRUD ────────────────────────────────────────────────────────

pub async fn find_by_business(pool: &SqlitePool, business_id: i64) -> RepoResult<Vec<Job>> {
    let rows = sqlx::query_as::<_, Job>(
        "SELECT id, business_id, location_id, client_id, title, description, start_date, end_date, status, created_at FROM job WHERE business_id = ? ORDER BY start_date DESC",
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_client(pool: &SqlitePool, client_id: i64) -> RepoResult<Vec<Job>> {
    let rows = sqlx::query_as::<_, Job>(
        "SELECT id, business_id, location_id, client_id, title, description, start_date, end_date, status, created_at FROM job WHERE client_id = ? ORDER BY start_date DESC",
    )
    .bind(client_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Job>> {
    let row = sqlx::query_as::<_, Job>(
        "SELECT id, business_id, location_id, client_id, title, description, start_date, end_date, status, created_at FROM job WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: JobCreate) -> RepoResult<Job> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO job (business_id, location_id, client_id, title, description, start_date, end_date, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 'PENDING', ?8) RETURNING id",
    )
    .bind(data.business_id)
    .bind(data.location_id)
    .bind(data.client_id)
    .bind(data.title)
    .bind(data.description)
    .bind(data.start_date)
    .bind(data.end_date)
    .bind(now)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create job".into()))
}

pub async fn update(pool: &SqlitePool, id: i64, data: JobUpdate) -> RepoResult<Job> {
    let rows = sqlx::query(
        "UPDATE job SET client_id = COALESCE(?1, client_id), title = COALESCE(?2, title), description = COALESCE(?3, description), end_date = COALESCE(?4, end_date), status = COALESCE(?5, status) WHERE id = ?6",
    )
    .bind(data.client_id)
    .bind(data.title)
    .bind(data.description)
    .bind(data.end_date)
    .bind(data.status)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Job {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Job {id} not found")))
}

// ── Job assignments ─────────────────────────────────────────────────

pub async fn find_assignments_by_job(pool: &SqlitePool, job_id: i64) -> RepoResult<Vec<JobAssignment>> {
    let rows = sqlx::query_as::<_, JobAssignment>(
        "SELECT id, job_id, employee_id, assigned_at FROM job_assignment WHERE job_id = ? ORDER BY assigned_at",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_assignments_by_employee(
    pool: &SqlitePool,
    employee_id: i64,
) -> RepoResult<Vec<JobAssignment>> {
    let rows = sqlx::query_as::<_, JobAssignment>(
        "SELECT id, job_id, employee_id, assigned_at FROM job_assignment WHERE employee_id = ? ORDER BY assigned_at",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create_assignment(
    pool: &SqlitePool,
    data: JobAssignmentCreate,
) -> RepoResult<JobAssignment> {
    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO job_assignment (job_id, employee_id, assigned_at) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(data.job_id)
    .bind(data.employee_id)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepoError::Duplicate("Employee is already assigned to this job".into())
        }
        _ => RepoError::from(e),
    })?;

    let row = sqlx::query_as::<_, JobAssignment>(
        "SELECT id, job_id, employee_id, assigned_at FROM job_assignment WHERE id = ?",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn delete_assignment(pool: &SqlitePool, id: i64) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM job_assignment WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
