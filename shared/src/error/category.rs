//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the thousands digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Employee errors
/// - 2xxx: Client / location / job errors
/// - 3xxx: Timesheet errors
/// - 4xxx: Invoice errors
/// - 5xxx: Asset errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Employee errors (1xxx)
    Employee,
    /// Client / location / job errors (2xxx)
    Job,
    /// Timesheet errors (3xxx)
    Timesheet,
    /// Invoice errors (4xxx)
    Invoice,
    /// Asset errors (5xxx)
    Asset,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Employee,
            2000..3000 => Self::Job,
            3000..4000 => Self::Timesheet,
            4000..5000 => Self::Invoice,
            5000..6000 => Self::Asset,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Employee => "employee",
            Self::Job => "job",
            Self::Timesheet => "timesheet",
            Self::Invoice => "invoice",
            Self::Asset => "asset",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Employee);
        assert_eq!(ErrorCategory::from_code(2003), ErrorCategory::Job);
        assert_eq!(ErrorCategory::from_code(3002), ErrorCategory::Timesheet);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Invoice);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Asset);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::EmployeeNotFound.category(),
            ErrorCategory::Employee
        );
        assert_eq!(ErrorCode::JobHasNoClient.category(), ErrorCategory::Job);
        assert_eq!(
            ErrorCode::AlreadyClockedIn.category(),
            ErrorCategory::Timesheet
        );
        assert_eq!(
            ErrorCode::InvoiceAlreadySent.category(),
            ErrorCategory::Invoice
        );
        assert_eq!(ErrorCode::AssetNotFound.category(), ErrorCategory::Asset);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Timesheet).unwrap();
        assert_eq!(json, "\"timesheet\"");
    }
}
