//! Asset Model

use serde::{Deserialize, Serialize};

/// Asset status, driven by scan events
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(
    feature = "db",
    derive(sqlx::Type),
    sqlx(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    Available,
    InUse,
    Maintenance,
}

impl Default for AssetStatus {
    fn default() -> Self {
        Self::Available
    }
}

/// Scan event type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(
    feature = "db",
    derive(sqlx::Type),
    sqlx(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScanType {
    CheckOut,
    CheckIn,
    Issue,
}

impl ScanType {
    /// Asset status implied by this scan event
    pub fn resulting_status(&self) -> AssetStatus {
        match self {
            Self::CheckOut => AssetStatus::InUse,
            Self::CheckIn => AssetStatus::Available,
            Self::Issue => AssetStatus::Maintenance,
        }
    }
}

/// Asset entity — a physical tool or machine in the register
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Asset {
    pub id: i64,
    pub business_id: i64,
    pub location_id: Option<i64>,
    pub title: String,
    pub custom_tag: Option<String>,
    pub barcode: Option<String>,
    pub qr_code: Option<String>,
    pub description: Option<String>,

    #[serde(default)]
    pub status: AssetStatus,

    pub created_at: i64,
}

/// Create asset payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetCreate {
    pub business_id: i64,
    pub location_id: Option<i64>,
    pub title: String,
    pub custom_tag: Option<String>,
    pub barcode: Option<String>,
    pub qr_code: Option<String>,
    pub description: Option<String>,
}

/// Update asset payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetUpdate {
    pub location_id: Option<i64>,
    pub title: Option<String>,
    pub custom_tag: Option<String>,
    pub description: Option<String>,
    pub status: Option<AssetStatus>,
}

/// Asset scan event — who scanned what, where, and why
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AssetScan {
    pub id: i64,
    pub asset_id: i64,
    pub employee_id: i64,
    pub job_id: Option<i64>,
    pub scan_type: ScanType,
    pub notes: Option<String>,
    pub scanned_at: i64,
}

/// Create asset scan payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetScanCreate {
    pub asset_id: i64,
    pub employee_id: i64,
    pub job_id: Option<i64>,
    pub scan_type: ScanType,
    pub notes: Option<String>,
}
