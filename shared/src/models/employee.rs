//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub business_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,

    /// Presentation role ("manager", "crew", ...); no enforcement here
    pub role: String,

    /// Default hourly rate, used when clock-in supplies none
    pub hourly_rate: Option<f64>,

    pub created_at: i64,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreate {
    pub business_id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: String,
    pub hourly_rate: Option<f64>,
}

/// Update employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub hourly_rate: Option<f64>,
}
