//! Invoice Model

use serde::{Deserialize, Serialize};

/// Invoice status
///
/// `Draft → Sent` is one-way; there is no way back to draft.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(
    feature = "db",
    derive(sqlx::Type),
    sqlx(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Draft,
    Sent,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        Self::Draft
    }
}

/// Invoice entity — frozen weekly aggregate of shift hours for a job
///
/// Totals are a snapshot taken at generation time; editing a
/// contributing timesheet afterwards never changes an existing invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Invoice {
    pub id: i64,
    pub job_id: i64,
    pub client_id: i64,
    pub business_id: i64,

    /// Globally unique, assigned at generation
    pub invoice_number: String,

    /// Billing window, inclusive (Unix millis)
    pub week_start: i64,
    pub week_end: i64,

    /// Sum of billable hours, 2 decimal places
    pub total_hours: f64,

    /// Sum of hours × rate, 2 decimal places
    pub total_amount: f64,

    #[serde(default)]
    pub status: InvoiceStatus,

    /// Set once when the invoice is sent
    pub sent_at: Option<i64>,

    pub created_at: i64,
}

/// Generate invoice payload; dates are `YYYY-MM-DD` in the business
/// timezone and converted to millis at the handler layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceGenerate {
    pub job_id: i64,
    pub week_start_date: String,
    pub week_end_date: String,
}
