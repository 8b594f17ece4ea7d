//! Business Model

use serde::{Deserialize, Serialize};

/// Business entity — the owning tenant for employees, clients,
/// locations, jobs and assets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Business {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: i64,
}

/// Create business payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCreate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Update business payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
