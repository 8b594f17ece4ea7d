//! Billable time and money calculation using rust_decimal
//!
//! All arithmetic is done with `Decimal` internally, then converted to
//! `f64` for storage and serialization. Rounding is 2 decimal places,
//! half-up.

use rust_decimal::prelude::*;
use shared::models::Timesheet;

/// Rounding for hours and monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

const MILLIS_PER_MINUTE: i64 = 60_000;
const MINUTES_PER_HOUR: i64 = 60;

/// Round to 2 decimal places, half-up
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Whole elapsed minutes between clock-in and clock-out (fractional
/// seconds truncated)
pub fn elapsed_minutes(clock_in: i64, clock_out: i64) -> i64 {
    (clock_out - clock_in) / MILLIS_PER_MINUTE
}

/// Billable hours for a closed shift
///
/// `(elapsed_minutes - lunch_break_minutes) / 60`, rounded to 2 decimal
/// places. A break longer than the shift clamps to 0.00 rather than
/// producing a negative balance; callers log the clamp.
pub fn shift_hours(clock_in: i64, clock_out: i64, lunch_break_minutes: i64) -> f64 {
    let net_minutes = elapsed_minutes(clock_in, clock_out) - lunch_break_minutes;
    let hours = round2(Decimal::from(net_minutes) / Decimal::from(MINUTES_PER_HOUR));
    if hours < Decimal::ZERO {
        0.0
    } else {
        hours.to_f64().unwrap_or(0.0)
    }
}

/// Sum hours and amount (hours × rate) over a set of timesheets
///
/// Missing `total_hours` (open shifts) and missing `billable_rate`
/// contribute zero. Returns `(total_hours, total_amount)` rounded to
/// 2 decimal places.
pub fn invoice_totals(timesheets: &[Timesheet]) -> (f64, f64) {
    let mut hours_sum = Decimal::ZERO;
    let mut amount_sum = Decimal::ZERO;

    for ts in timesheets {
        let hours = ts
            .total_hours
            .and_then(Decimal::from_f64)
            .unwrap_or(Decimal::ZERO);
        let rate = ts
            .billable_rate
            .and_then(Decimal::from_f64)
            .unwrap_or(Decimal::ZERO);
        hours_sum += hours;
        amount_sum += hours * rate;
    }

    (
        round2(hours_sum).to_f64().unwrap_or(0.0),
        round2(amount_sum).to_f64().unwrap_or(0.0),
    )
}
