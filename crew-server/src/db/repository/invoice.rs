//! Invoice Repository
//!
//! Invoices are a frozen weekly snapshot of shift hours for a job.
//! Generation reads the timesheet window, sums with decimal precision
//! and writes one DRAFT row; nothing in the source timesheets is
//! touched, and later timesheet edits never reach an existing invoice.

use super::{RepoError, RepoResult, timesheet};
use crate::billing;
use shared::models::{Invoice, InvoiceStatus, Job};
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Invoice>> {
    let invoice = sqlx::query_as::<_, Invoice>(
        "SELECT id, job_id, client_id, business_id, invoice_number, week_start, week_end, total_hours, total_amount, status, sent_at, created_at FROM invoice WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(invoice)
}

pub async fn find_by_business(pool: &SqlitePool, business_id: i64) -> RepoResult<Vec<Invoice>> {
    let rows = sqlx::query_as::<_, Invoice>(
        "SELECT id, job_id, client_id, business_id, invoice_number, week_start, week_end, total_hours, total_amount, status, sent_at, created_at FROM invoice WHERE business_id = ? ORDER BY created_at DESC",
    )
    .bind(business_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_client(pool: &SqlitePool, client_id: i64) -> RepoResult<Vec<Invoice>> {
    let rows = sqlx::query_as::<_, Invoice>(
        "SELECT id, job_id, client_id, business_id, invoice_number, week_start, week_end, total_hours, total_amount, status, sent_at, created_at FROM invoice WHERE client_id = ? ORDER BY created_at DESC",
    )
    .bind(client_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_job(pool: &SqlitePool, job_id: i64) -> RepoResult<Vec<Invoice>> {
    let rows = sqlx::query_as::<_, Invoice>(
        "SELECT id, job_id, client_id, business_id, invoice_number, week_start, week_end, total_hours, total_amount, status, sent_at, created_at FROM invoice WHERE job_id = ? ORDER BY created_at DESC",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Generate a DRAFT invoice for a job over `[week_start, week_end)`
///
/// Reads the job's timesheets whose clock-in falls in the window and
/// snapshots their decimal-summed totals. Open shifts in range carry
/// NULL hours and contribute zero. The invoice number embeds a
/// snowflake ID so concurrent generation in the same millisecond
/// cannot collide; the UNIQUE column is the backstop.
pub async fn generate(
    pool: &SqlitePool,
    job: &Job,
    week_start: i64,
    week_end: i64,
) -> RepoResult<Invoice> {
    let client_id = job
        .client_id
        .ok_or_else(|| RepoError::Validation("Job has no client assigned".into()))?;

    let sheets = timesheet::find_in_window(pool, job.id, week_start, week_end).await?;
    let (total_hours, total_amount) = billing::invoice_totals(&sheets);

    let invoice_number = format!("INV-{}", shared::util::snowflake_id());
    let now = shared::util::now_millis();

    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO invoice (job_id, client_id, business_id, invoice_number, week_start, week_end, total_hours, total_amount, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 'DRAFT', ?9) RETURNING id",
    )
    .bind(job.id)
    .bind(client_id)
    .bind(job.business_id)
    .bind(&invoice_number)
    .bind(week_start)
    .bind(week_end)
    .bind(total_hours)
    .bind(total_amount)
    .bind(now)
    .fetch_one(pool)
    .await?;

    tracing::info!(
        invoice_id = id,
        job_id = job.id,
        %invoice_number,
        total_hours,
        total_amount,
        timesheet_count = sheets.len(),
        "Invoice generated"
    );

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create invoice".into()))
}

/// Mark a DRAFT invoice as sent
///
/// DRAFT → SENT is one-way; a second send is rejected and leaves
/// `sent_at` untouched. The UPDATE is conditional on the DRAFT state so
/// a concurrent double-send loses instead of re-stamping.
pub async fn send(pool: &SqlitePool, id: i64) -> RepoResult<Invoice> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Invoice {id} not found")))?;

    if existing.status == InvoiceStatus::Sent {
        return Err(RepoError::Duplicate(format!(
            "Invoice {} has already been sent",
            existing.invoice_number
        )));
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE invoice SET status = 'SENT', sent_at = ?1 WHERE id = ?2 AND status = 'DRAFT'",
    )
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Duplicate(format!(
            "Invoice {} has already been sent",
            existing.invoice_number
        )));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Invoice {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::seeded_pool;
    use crate::db::repository::job;

    /// Insert a closed timesheet directly with controlled values
    async fn seed_sheet(
        pool: &SqlitePool,
        id: i64,
        clock_in: i64,
        total_hours: Option<f64>,
        billable_rate: Option<f64>,
    ) {
        let clock_out: Option<i64> = total_hours.map(|_| clock_in + 1);
        sqlx::query(
            "INSERT INTO timesheet (id, employee_id, job_id, clock_in, clock_out, lunch_break_minutes, total_hours, billable_rate, status, created_at) VALUES (?1, 1, 1, ?2, ?3, 30, ?4, ?5, 'PENDING', ?2)",
        )
        .bind(id)
        .bind(clock_in)
        .bind(clock_out)
        .bind(total_hours)
        .bind(billable_rate)
        .execute(pool)
        .await
        .unwrap();
    }

    async fn billed_job(pool: &SqlitePool) -> Job {
        job::find_by_id(pool, 1).await.unwrap().unwrap()
    }

    #[tokio::test]
    async fn aggregation_is_deterministic() {
        let pool = seeded_pool().await;
        seed_sheet(&pool, 30, 1_000, Some(8.0), Some(50.00)).await;
        seed_sheet(&pool, 31, 2_000, Some(7.5), Some(60.00)).await;

        let job = billed_job(&pool).await;
        let invoice = generate(&pool, &job, 0, 10_000).await.unwrap();

        assert_eq!(invoice.total_hours, 15.50);
        assert_eq!(invoice.total_amount, 850.00);
        assert_eq!(invoice.status, InvoiceStatus::Draft);
        assert_eq!(invoice.client_id, 1);
        assert_eq!(invoice.business_id, 1);
        assert!(invoice.invoice_number.starts_with("INV-"));
        assert!(invoice.sent_at.is_none());
    }

    #[tokio::test]
    async fn out_of_window_and_open_shifts_contribute_zero() {
        let pool = seeded_pool().await;
        seed_sheet(&pool, 30, 1_000, Some(8.0), Some(50.00)).await;
        seed_sheet(&pool, 31, 50_000, Some(9.0), Some(50.00)).await; // outside window
        seed_sheet(&pool, 32, 2_000, None, Some(50.00)).await; // still open

        let job = billed_job(&pool).await;
        let invoice = generate(&pool, &job, 0, 10_000).await.unwrap();

        assert_eq!(invoice.total_hours, 8.00);
        assert_eq!(invoice.total_amount, 400.00);
    }

    #[tokio::test]
    async fn clientless_job_cannot_be_invoiced() {
        let pool = seeded_pool().await;
        let job = job::find_by_id(&pool, 2).await.unwrap().unwrap();
        assert!(job.client_id.is_none());

        let err = generate(&pool, &job, 0, 10_000).await.unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM invoice")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn invoice_is_a_frozen_snapshot() {
        let pool = seeded_pool().await;
        seed_sheet(&pool, 30, 1_000, Some(8.0), Some(50.00)).await;

        let job = billed_job(&pool).await;
        let invoice = generate(&pool, &job, 0, 10_000).await.unwrap();
        assert_eq!(invoice.total_hours, 8.00);

        // Edit the contributing timesheet after generation
        sqlx::query("UPDATE timesheet SET total_hours = 100.0 WHERE id = 30")
            .execute(&pool)
            .await
            .unwrap();

        let unchanged = find_by_id(&pool, invoice.id).await.unwrap().unwrap();
        assert_eq!(unchanged.total_hours, 8.00);
        assert_eq!(unchanged.total_amount, 400.00);
    }

    #[tokio::test]
    async fn invoice_numbers_do_not_collide() {
        let pool = seeded_pool().await;
        let job = billed_job(&pool).await;

        let a = generate(&pool, &job, 0, 10_000).await.unwrap();
        let b = generate(&pool, &job, 0, 10_000).await.unwrap();
        assert_ne!(a.invoice_number, b.invoice_number);
    }

    #[tokio::test]
    async fn send_is_one_way() {
        let pool = seeded_pool().await;
        let job = billed_job(&pool).await;
        let invoice = generate(&pool, &job, 0, 10_000).await.unwrap();

        let sent = send(&pool, invoice.id).await.unwrap();
        assert_eq!(sent.status, InvoiceStatus::Sent);
        let sent_at = sent.sent_at.unwrap();

        let err = send(&pool, invoice.id).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        // sent_at was not re-stamped by the failed second send
        let unchanged = find_by_id(&pool, invoice.id).await.unwrap().unwrap();
        assert_eq!(unchanged.sent_at, Some(sent_at));
    }

    #[tokio::test]
    async fn send_missing_invoice_is_not_found() {
        let pool = seeded_pool().await;
        let err = send(&pool, 999).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
