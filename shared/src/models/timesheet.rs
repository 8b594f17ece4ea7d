//! Timesheet Model

use serde::{Deserialize, Serialize};

/// Timesheet approval status
///
/// Orthogonal to the open/closed state: a timesheet is open while
/// `clock_out` is NULL, and the approval workflow only moves a closed
/// shift out of `Pending`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(
    feature = "db",
    derive(sqlx::Type),
    sqlx(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimesheetStatus {
    Pending,
    Approved,
    Rejected,
}

impl Default for TimesheetStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Timesheet entity — one shift for one employee on one job
///
/// A row with `clock_out = NULL` is an open (active) shift. At most one
/// open shift may exist per employee at any time; the store enforces
/// this with a partial unique index.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Timesheet {
    pub id: i64,
    pub employee_id: i64,
    pub job_id: i64,

    /// Shift start (Unix millis)
    pub clock_in: i64,

    /// Shift end (Unix millis); NULL while the shift is open
    pub clock_out: Option<i64>,

    /// Unpaid break deducted at clock-out (store default 30)
    pub lunch_break_minutes: i64,

    /// Billable hours, fixed at clock-out; NULL while open
    pub total_hours: Option<f64>,

    /// Hourly rate snapshot taken at clock-in
    pub billable_rate: Option<f64>,

    #[serde(default)]
    pub status: TimesheetStatus,

    pub notes: Option<String>,

    pub created_at: i64,
}

impl Timesheet {
    /// An open shift has not been clocked out yet
    pub fn is_open(&self) -> bool {
        self.clock_out.is_none()
    }
}

/// Clock-in payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockInRequest {
    pub employee_id: i64,
    pub job_id: i64,
    pub billable_rate: Option<f64>,
}

/// Clock-out payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockOutRequest {
    pub employee_id: i64,
    pub lunch_break_minutes: Option<i64>,
}

/// Update timesheet payload (corrections only; the clock fields are
/// owned by the clock-in/clock-out operations)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimesheetUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
