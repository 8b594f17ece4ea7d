//! Timesheet Repository
//!
//! Owns the shift lifecycle: clock-in opens a row, clock-out closes it
//! exactly once and fixes `total_hours`, and the approval workflow
//! moves a closed row out of PENDING. The single-active-shift invariant
//! is backed by a partial unique index on `(employee_id) WHERE
//! clock_out IS NULL`, so the insert itself is the atomic check.

use super::{RepoError, RepoResult};
use crate::billing;
use shared::models::{Timesheet, TimesheetStatus, TimesheetUpdate};
use sqlx::SqlitePool;

/// System default lunch break, applied when clock-out has no override
pub const DEFAULT_LUNCH_BREAK_MINUTES: i64 = 30;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Timesheet>> {
    let ts = sqlx::query_as::<_, Timesheet>(
        "SELECT id, employee_id, job_id, clock_in, clock_out, lunch_break_minutes, total_hours, billable_rate, status, notes, created_at FROM timesheet WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(ts)
}

/// Find the employee's open shift, if any
pub async fn find_active(pool: &SqlitePool, employee_id: i64) -> RepoResult<Option<Timesheet>> {
    let ts = sqlx::query_as::<_, Timesheet>(
        "SELECT id, employee_id, job_id, clock_in, clock_out, lunch_break_minutes, total_hours, billable_rate, status, notes, created_at FROM timesheet WHERE employee_id = ? AND clock_out IS NULL LIMIT 1",
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;
    Ok(ts)
}

pub async fn find_by_employee(pool: &SqlitePool, employee_id: i64) -> RepoResult<Vec<Timesheet>> {
    let rows = sqlx::query_as::<_, Timesheet>(
        "SELECT id, employee_id, job_id, clock_in, clock_out, lunch_break_minutes, total_hours, billable_rate, status, notes, created_at FROM timesheet WHERE employee_id = ? ORDER BY clock_in DESC",
    )
    .bind(employee_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn find_by_job(pool: &SqlitePool, job_id: i64) -> RepoResult<Vec<Timesheet>> {
    let rows = sqlx::query_as::<_, Timesheet>(
        "SELECT id, employee_id, job_id, clock_in, clock_out, lunch_break_minutes, total_hours, billable_rate, status, notes, created_at FROM timesheet WHERE job_id = ? ORDER BY clock_in DESC",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Timesheets for a job whose clock-in falls inside `[start, end)`
///
/// Used by invoice generation; includes still-open shifts, which carry
/// NULL `total_hours` and therefore contribute nothing to the totals.
pub async fn find_in_window(
    pool: &SqlitePool,
    job_id: i64,
    start_millis: i64,
    end_millis: i64,
) -> RepoResult<Vec<Timesheet>> {
    let rows = sqlx::query_as::<_, Timesheet>(
        "SELECT id, employee_id, job_id, clock_in, clock_out, lunch_break_minutes, total_hours, billable_rate, status, notes, created_at FROM timesheet WHERE job_id = ? AND clock_in >= ? AND clock_in < ? ORDER BY clock_in",
    )
    .bind(job_id)
    .bind(start_millis)
    .bind(end_millis)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Open a new shift for an employee
///
/// The pre-check gives a friendly error on the common path; the partial
/// unique index is what actually guarantees at most one open shift when
/// two clock-ins race, and a constraint violation from the loser maps
/// to the same duplicate error.
pub async fn clock_in(
    pool: &SqlitePool,
    employee_id: i64,
    job_id: i64,
    billable_rate: Option<f64>,
) -> RepoResult<Timesheet> {
    if find_active(pool, employee_id).await?.is_some() {
        return Err(RepoError::Duplicate("Already clocked in".into()));
    }

    let now = shared::util::now_millis();
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO timesheet (employee_id, job_id, clock_in, lunch_break_minutes, billable_rate, status, notes, created_at) VALUES (?1, ?2, ?3, ?4, ?5, 'PENDING', NULL, ?3) RETURNING id",
    )
    .bind(employee_id)
    .bind(job_id)
    .bind(now)
    .bind(DEFAULT_LUNCH_BREAK_MINUTES)
    .bind(billable_rate)
    .fetch_one(pool)
    .await
    .map_err(|e| match &e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            RepoError::Duplicate("Already clocked in".into())
        }
        _ => RepoError::from(e),
    })?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create timesheet".into()))
}

/// Close the employee's open shift and fix its billable hours
///
/// The UPDATE is conditional on `clock_out IS NULL`, so a concurrent
/// double clock-out loses cleanly instead of rewriting the row.
pub async fn clock_out(
    pool: &SqlitePool,
    employee_id: i64,
    lunch_break_minutes: Option<i64>,
) -> RepoResult<Timesheet> {
    let active = find_active(pool, employee_id)
        .await?
        .ok_or_else(|| RepoError::NotFound("No active timesheet found".into()))?;

    let now = shared::util::now_millis();
    let lunch = lunch_break_minutes.unwrap_or(DEFAULT_LUNCH_BREAK_MINUTES);
    let total_hours = billing::shift_hours(active.clock_in, now, lunch);

    if billing::elapsed_minutes(active.clock_in, now) < lunch {
        tracing::warn!(
            timesheet_id = active.id,
            employee_id,
            lunch_break_minutes = lunch,
            "Lunch break exceeds elapsed shift time; clamping total_hours to 0.00"
        );
    }

    let rows = sqlx::query(
        "UPDATE timesheet SET clock_out = ?1, lunch_break_minutes = ?2, total_hours = ?3 WHERE id = ?4 AND clock_out IS NULL",
    )
    .bind(now)
    .bind(lunch)
    .bind(total_hours)
    .bind(active.id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound("No active timesheet found".into()));
    }

    find_by_id(pool, active.id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Timesheet {} not found", active.id)))
}

/// Move a closed PENDING timesheet to APPROVED or REJECTED
///
/// Any other starting state is rejected: open shifts cannot be
/// approved, and the approval decision is made once.
pub async fn set_status(
    pool: &SqlitePool,
    id: i64,
    new_status: TimesheetStatus,
) -> RepoResult<Timesheet> {
    let existing = find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Timesheet {id} not found")))?;

    if existing.is_open() {
        return Err(RepoError::Duplicate(
            "Timesheet is still open; clock out first".into(),
        ));
    }
    if existing.status != TimesheetStatus::Pending {
        return Err(RepoError::Duplicate(format!(
            "Timesheet {id} has already been reviewed"
        )));
    }

    let rows = sqlx::query("UPDATE timesheet SET status = ?1 WHERE id = ?2 AND status = 'PENDING'")
        .bind(new_status)
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Duplicate(format!(
            "Timesheet {id} has already been reviewed"
        )));
    }

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Timesheet {id} not found")))
}

/// Corrections to rate or notes; clock fields are owned by
/// clock-in/clock-out
pub async fn update(pool: &SqlitePool, id: i64, data: TimesheetUpdate) -> RepoResult<Timesheet> {
    let rows = sqlx::query(
        "UPDATE timesheet SET billable_rate = COALESCE(?1, billable_rate), notes = COALESCE(?2, notes) WHERE id = ?3",
    )
    .bind(data.billable_rate)
    .bind(data.notes)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Timesheet {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Timesheet {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::testing::seeded_pool;

    #[tokio::test]
    async fn clock_in_opens_pending_shift() {
        let pool = seeded_pool().await;
        let ts = clock_in(&pool, 1, 1, Some(50.0)).await.unwrap();

        assert!(ts.is_open());
        assert_eq!(ts.status, TimesheetStatus::Pending);
        assert_eq!(ts.lunch_break_minutes, DEFAULT_LUNCH_BREAK_MINUTES);
        assert_eq!(ts.billable_rate, Some(50.0));
        assert!(ts.total_hours.is_none());
    }

    #[tokio::test]
    async fn second_clock_in_is_rejected() {
        let pool = seeded_pool().await;
        clock_in(&pool, 1, 1, None).await.unwrap();

        let err = clock_in(&pool, 1, 2, None).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        // Nothing extra was written
        let open: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM timesheet WHERE employee_id = 1 AND clock_out IS NULL",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(open, 1);
    }

    #[tokio::test]
    async fn store_rejects_racing_second_open_row() {
        let pool = seeded_pool().await;
        clock_in(&pool, 1, 1, None).await.unwrap();

        // A racer that slipped past the advisory pre-check still hits
        // the partial unique index on its INSERT.
        let err = sqlx::query(
            "INSERT INTO timesheet (employee_id, job_id, clock_in, lunch_break_minutes, status, created_at) VALUES (1, 2, 0, 30, 'PENDING', 0)",
        )
        .execute(&pool)
        .await
        .unwrap_err();

        match err {
            sqlx::Error::Database(db_err) => assert!(db_err.is_unique_violation()),
            other => panic!("expected unique violation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn different_employees_can_be_clocked_in_together() {
        let pool = seeded_pool().await;
        clock_in(&pool, 1, 1, None).await.unwrap();
        clock_in(&pool, 2, 1, None).await.unwrap();

        assert!(find_active(&pool, 1).await.unwrap().is_some());
        assert!(find_active(&pool, 2).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn clock_out_without_active_shift_fails() {
        let pool = seeded_pool().await;
        let err = clock_out(&pool, 1, None).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM timesheet")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn clock_out_closes_shift_and_clamps_short_shift_to_zero() {
        let pool = seeded_pool().await;
        clock_in(&pool, 1, 1, Some(50.0)).await.unwrap();

        // Immediate clock-out: elapsed < default 30-minute lunch
        let ts = clock_out(&pool, 1, None).await.unwrap();
        assert!(!ts.is_open());
        assert_eq!(ts.total_hours, Some(0.0));
        assert_eq!(ts.lunch_break_minutes, DEFAULT_LUNCH_BREAK_MINUTES);

        assert!(find_active(&pool, 1).await.unwrap().is_none());

        // And the shift cannot be closed twice
        let err = clock_out(&pool, 1, None).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn clock_out_honors_lunch_override() {
        let pool = seeded_pool().await;
        clock_in(&pool, 1, 1, None).await.unwrap();
        let ts = clock_out(&pool, 1, Some(0)).await.unwrap();
        assert_eq!(ts.lunch_break_minutes, 0);
        assert_eq!(ts.total_hours, Some(0.0));
    }

    #[tokio::test]
    async fn computed_hours_match_stored_interval() {
        let pool = seeded_pool().await;

        // Backdated shift inserted directly: 08:00 → 16:30 with a
        // 30-minute lunch is exactly 8.00 hours.
        let clock_in_ms = 1_700_000_000_000i64;
        let clock_out_ms = clock_in_ms + 510 * 60_000;
        sqlx::query(
            "INSERT INTO timesheet (id, employee_id, job_id, clock_in, clock_out, lunch_break_minutes, total_hours, status, created_at) VALUES (10, 1, 1, ?1, ?2, 30, ?3, 'PENDING', ?1)",
        )
        .bind(clock_in_ms)
        .bind(clock_out_ms)
        .bind(billing::shift_hours(clock_in_ms, clock_out_ms, 30))
        .execute(&pool)
        .await
        .unwrap();

        let ts = find_by_id(&pool, 10).await.unwrap().unwrap();
        assert_eq!(ts.total_hours, Some(8.00));
    }

    #[tokio::test]
    async fn approval_requires_closed_pending_shift() {
        let pool = seeded_pool().await;
        let open = clock_in(&pool, 1, 1, None).await.unwrap();

        // Open shift cannot be approved
        let err = set_status(&pool, open.id, TimesheetStatus::Approved)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        clock_out(&pool, 1, None).await.unwrap();

        let ts = set_status(&pool, open.id, TimesheetStatus::Approved)
            .await
            .unwrap();
        assert_eq!(ts.status, TimesheetStatus::Approved);

        // The decision is made once
        let err = set_status(&pool, open.id, TimesheetStatus::Rejected)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn update_patches_rate_and_notes_only() {
        let pool = seeded_pool().await;
        let ts = clock_in(&pool, 1, 1, None).await.unwrap();

        let patched = update(
            &pool,
            ts.id,
            TimesheetUpdate {
                billable_rate: Some(62.5),
                notes: Some("rate agreed on site".into()),
            },
        )
        .await
        .unwrap();

        assert_eq!(patched.billable_rate, Some(62.5));
        assert_eq!(patched.notes.as_deref(), Some("rate agreed on site"));
        assert!(patched.is_open());
    }

    #[tokio::test]
    async fn window_query_filters_by_clock_in() {
        let pool = seeded_pool().await;
        for (id, clock_in_ms) in [(20, 1_000i64), (21, 5_000), (22, 9_000)] {
            sqlx::query(
                "INSERT INTO timesheet (id, employee_id, job_id, clock_in, clock_out, lunch_break_minutes, total_hours, status, created_at) VALUES (?1, 1, 1, ?2, ?2, 0, 1.0, 'PENDING', ?2)",
            )
            .bind(id)
            .bind(clock_in_ms)
            .execute(&pool)
            .await
            .unwrap();
        }

        let rows = find_in_window(&pool, 1, 1_000, 9_000).await.unwrap();
        let ids: Vec<i64> = rows.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![20, 21]);
    }
}
