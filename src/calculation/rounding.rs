//! Two-decimal rounding for hours and money.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places kept for hours and currency.
pub const CENT_PLACES: u32 = 2;

/// Rounds to two decimal places, halves away from zero.
///
/// # Examples
///
/// ```
/// use driver_payroll::calculation::round_to_cents;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_to_cents(Decimal::new(1005, 3)), Decimal::new(101, 2)); // 1.005 -> 1.01
/// assert_eq!(round_to_cents(Decimal::new(1004, 3)), Decimal::new(100, 2)); // 1.004 -> 1.00
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
