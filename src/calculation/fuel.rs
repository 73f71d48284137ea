//! Fuel reimbursement parsing.

use std::str::FromStr;

use rust_decimal::Decimal;

/// Reads trimmed decimal text, accepting exponent notation such as `1e2`.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Parses a raw fuel reimbursement value.
///
/// The value is trimmed and read as a decimal number, in plain or exponent
/// notation. Absent, empty and non-numeric values are worth zero.
///
/// Negative amounts are clamped to zero rather than deducted from pay. The
/// roster refuses to store them, so a negative value only reaches here from
/// ad-hoc input.
///
/// # Examples
///
/// ```
/// use driver_payroll::calculation::parse_fuel;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_fuel(Some("25")), Decimal::new(25, 0));
/// assert_eq!(parse_fuel(Some("12.75")), Decimal::new(1275, 2));
/// assert_eq!(parse_fuel(Some("1e2")), Decimal::new(100, 0));
/// assert_eq!(parse_fuel(Some("-5")), Decimal::ZERO);
/// assert_eq!(parse_fuel(Some("")), Decimal::ZERO);
/// assert_eq!(parse_fuel(None), Decimal::ZERO);
/// ```
pub fn parse_fuel(raw: Option<&str>) -> Decimal {
    raw.and_then(parse_amount)
        .filter(|amount| !amount.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}
