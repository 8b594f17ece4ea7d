//! Unified error codes for CrewDesk
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Employee errors
//! - 2xxx: Client / location / job errors
//! - 3xxx: Timesheet errors
//! - 4xxx: Invoice errors
//! - 5xxx: Asset errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility (Rust, TypeScript).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 1001,

    // ==================== 2xxx: Client / Location / Job ====================
    /// Client not found
    ClientNotFound = 2001,
    /// Location not found
    LocationNotFound = 2002,
    /// Job not found
    JobNotFound = 2003,
    /// Job has no client assigned, cannot be invoiced
    JobHasNoClient = 2004,

    // ==================== 3xxx: Timesheet ====================
    /// Timesheet not found
    TimesheetNotFound = 3001,
    /// Employee already has an open timesheet
    AlreadyClockedIn = 3002,
    /// Employee has no active timesheet
    NoActiveTimesheet = 3003,
    /// Timesheet is already closed
    TimesheetAlreadyClosed = 3004,
    /// Approval state transition not allowed
    InvalidStatusTransition = 3005,

    // ==================== 4xxx: Invoice ====================
    /// Invoice not found
    InvoiceNotFound = 4001,
    /// Invoice has already been sent
    InvoiceAlreadySent = 4002,
    /// Invoice week window is invalid
    InvalidInvoiceWindow = 4003,

    // ==================== 5xxx: Asset ====================
    /// Asset not found
    AssetNotFound = 5001,
    /// Unknown scan type
    InvalidScanType = 5002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::InvalidFormat => "Invalid format",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::EmployeeNotFound => "Employee not found",

            Self::ClientNotFound => "Client not found",
            Self::LocationNotFound => "Location not found",
            Self::JobNotFound => "Job not found",
            Self::JobHasNoClient => "Job has no client assigned",

            Self::TimesheetNotFound => "Timesheet not found",
            Self::AlreadyClockedIn => "Already clocked in",
            Self::NoActiveTimesheet => "No active timesheet found",
            Self::TimesheetAlreadyClosed => "Timesheet is already closed",
            Self::InvalidStatusTransition => "Status transition not allowed",

            Self::InvoiceNotFound => "Invoice not found",
            Self::InvoiceAlreadySent => "Invoice has already been sent",
            Self::InvalidInvoiceWindow => "Invoice week window is invalid",

            Self::AssetNotFound => "Asset not found",
            Self::InvalidScanType => "Invalid scan type",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::InvalidFormat,
            7 => Self::RequiredField,
            8 => Self::ValueOutOfRange,

            1001 => Self::EmployeeNotFound,

            2001 => Self::ClientNotFound,
            2002 => Self::LocationNotFound,
            2003 => Self::JobNotFound,
            2004 => Self::JobHasNoClient,

            3001 => Self::TimesheetNotFound,
            3002 => Self::AlreadyClockedIn,
            3003 => Self::NoActiveTimesheet,
            3004 => Self::TimesheetAlreadyClosed,
            3005 => Self::InvalidStatusTransition,

            4001 => Self::InvoiceNotFound,
            4002 => Self::InvoiceAlreadySent,
            4003 => Self::InvalidInvoiceWindow,

            5001 => Self::AssetNotFound,
            5002 => Self::InvalidScanType,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
