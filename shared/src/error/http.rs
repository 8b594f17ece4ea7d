//! HTTP status mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            // Validation-class errors (400)
            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::InvalidFormat
            | Self::RequiredField
            | Self::ValueOutOfRange
            | Self::JobHasNoClient
            | Self::InvalidInvoiceWindow
            | Self::InvalidScanType => StatusCode::BAD_REQUEST,

            // Missing resources (404)
            Self::NotFound
            | Self::EmployeeNotFound
            | Self::ClientNotFound
            | Self::LocationNotFound
            | Self::JobNotFound
            | Self::TimesheetNotFound
            | Self::NoActiveTimesheet
            | Self::InvoiceNotFound
            | Self::AssetNotFound => StatusCode::NOT_FOUND,

            // Business-rule conflicts (409)
            Self::AlreadyExists
            | Self::AlreadyClockedIn
            | Self::TimesheetAlreadyClosed
            | Self::InvalidStatusTransition
            | Self::InvoiceAlreadySent => StatusCode::CONFLICT,

            // System errors (500)
            Self::Unknown | Self::InternalError | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
