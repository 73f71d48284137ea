//! Display formatting for money, hours and event days.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::rounding::{CENT_PLACES, round_to_cents};

/// Rounds to cents and pads to exactly two decimal places.
fn two_places(value: Decimal) -> String {
    let mut rounded = round_to_cents(value);
    rounded.rescale(CENT_PLACES);
    rounded.to_string()
}

/// Formats an amount as dollars and cents.
///
/// # Examples
///
/// ```
/// use driver_payroll::calculation::format_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_currency(Decimal::new(1675, 1)), "$167.50");
/// assert_eq!(format_currency(Decimal::ZERO), "$0.00");
/// ```
pub fn format_currency(amount: Decimal) -> String {
    format!("${}", two_places(amount))
}

/// Formats hours with two decimal places (e.g. `9.50`).
pub fn format_hours(hours: Decimal) -> String {
    two_places(hours)
}

/// Builds the display label for an event day, e.g. `Saturday, Feb 14`.
///
/// # Examples
///
/// ```
/// use driver_payroll::calculation::format_date_label;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 14).unwrap();
/// assert_eq!(format_date_label(date), "Saturday, Feb 14");
/// ```
pub fn format_date_label(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}
