//! Location Model

use serde::{Deserialize, Serialize};

/// Location entity — a physical job site
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Location {
    pub id: i64,
    pub business_id: i64,
    pub name: String,
    pub address: String,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
    pub created_at: i64,
}

/// Create location payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationCreate {
    pub business_id: i64,
    pub name: String,
    pub address: String,
    pub contact_person: Option<String>,
    pub contact_phone: Option<String>,
}
