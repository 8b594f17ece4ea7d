//! Time helpers — business-timezone date conversion
//!
//! All date-string → timestamp conversion happens at the API handler
//! layer; repositories only ever see `i64` Unix millis.

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Date + hour/min/sec → Unix millis in the business timezone
///
/// DST gap fallback: if the local time does not exist (spring-forward),
/// fall back to UTC.
pub fn date_hms_to_millis(date: NaiveDate, hour: u32, min: u32, sec: u32, tz: Tz) -> i64 {
    let naive = date.and_hms_opt(hour, min, sec).unwrap();
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of day (00:00:00) → Unix millis in the business timezone
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    date_hms_to_millis(date, 0, 0, 0, tz)
}

/// End of day → next day's 00:00:00 in Unix millis
///
/// Callers use `< end` (exclusive) semantics, which makes a date range
/// of `[start_date, end_date]` cover the whole end day.
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    date_hms_to_millis(next_day, 0, 0, 0, tz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_date() {
        let d = parse_date("2026-03-02").unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 3, 2).unwrap());
    }

    #[test]
    fn parse_invalid_date_is_validation_error() {
        let err = parse_date("03/02/2026").unwrap_err();
        assert_eq!(err.code, shared::error::ErrorCode::ValidationFailed);
    }

    #[test]
    fn day_bounds_cover_whole_day_utc() {
        let d = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        let start = day_start_millis(d, chrono_tz::UTC);
        let end = day_end_millis(d, chrono_tz::UTC);
        assert_eq!(end - start, 24 * 60 * 60 * 1000);
    }
}
