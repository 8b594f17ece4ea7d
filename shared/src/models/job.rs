//! Job Model

use serde::{Deserialize, Serialize};

/// Job status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(
    feature = "db",
    derive(sqlx::Type),
    sqlx(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Pending,
    Active,
    Completed,
    Cancelled,
}

impl Default for JobStatus {
    fn default() -> Self {
        Self::Pending
    }
}

/// Job entity — a piece of work at a location, optionally billed to a
/// client. A job without a client can be worked but not invoiced.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Job {
    pub id: i64,
    pub business_id: i64,
    pub location_id: i64,
    pub client_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,

    /// Scheduled start (Unix millis)
    pub start_date: i64,
    pub end_date: Option<i64>,

    #[serde(default)]
    pub status: JobStatus,

    pub created_at: i64,
}

/// Create job payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCreate {
    pub business_id: i64,
    pub location_id: i64,
    pub client_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub start_date: i64,
    pub end_date: Option<i64>,
}

/// Update job payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobUpdate {
    pub client_id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub end_date: Option<i64>,
    pub status: Option<JobStatus>,
}

/// Job assignment — links an employee to a job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct JobAssignment {
    pub id: i64,
    pub job_id: i64,
    pub employee_id: i64,
    pub assigned_at: i64,
}

/// Create job assignment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobAssignmentCreate {
    pub job_id: i64,
    pub employee_id: i64,
}
