//! Clock-time parsing and shift span calculation.
//!
//! Clock values come straight from the hours sheet as text. Anything that is
//! missing or does not look like a time on a 24-hour clock is worth zero
//! hours rather than an error, because half-filled sheets are the normal
//! state while an event is running.

use rust_decimal::Decimal;

const MINUTES_PER_HOUR: i64 = 60;

/// Parses `HH:MM` (or `H:MM`) 24-hour clock text into `(hour, minute)`.
///
/// Surrounding whitespace is ignored. Hours must be 0 to 23 and minutes 0 to
/// 59; anything else, including an empty string, returns `None`.
///
/// # Examples
///
/// ```
/// use driver_payroll::calculation::parse_clock_time;
///
/// assert_eq!(parse_clock_time("07:30"), Some((7, 30)));
/// assert_eq!(parse_clock_time("7:30"), Some((7, 30)));
/// assert_eq!(parse_clock_time("24:00"), None);
/// assert_eq!(parse_clock_time(""), None);
/// ```
pub fn parse_clock_time(raw: &str) -> Option<(u32, u32)> {
    let (hour, minute) = raw.trim().split_once(':')?;
    let hour: u32 = hour.trim().parse().ok()?;
    let minute: u32 = minute.trim().parse().ok()?;

    if hour > 23 || minute > 59 {
        return None;
    }

    Some((hour, minute))
}

/// Minutes since midnight for a clock value, if it parses.
fn minutes_since_midnight(raw: Option<&str>) -> Option<i64> {
    let (hour, minute) = parse_clock_time(raw?)?;
    Some(i64::from(hour) * MINUTES_PER_HOUR + i64::from(minute))
}

/// Whole minutes between a clock-in and a clock-out, floored at zero.
///
/// Returns 0 when either endpoint is absent, empty or unparsable, and when
/// the clock-out is before the clock-in. Shifts never wrap past midnight.
pub fn span_minutes(clock_in: Option<&str>, clock_out: Option<&str>) -> i64 {
    match (
        minutes_since_midnight(clock_in),
        minutes_since_midnight(clock_out),
    ) {
        (Some(start), Some(end)) => (end - start).max(0),
        _ => 0,
    }
}

/// Hours between a clock-in and a clock-out, floored at zero.
///
/// # Examples
///
/// ```
/// use driver_payroll::calculation::compute_span_hours;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_span_hours(Some("07:30"), Some("17:00")), Decimal::new(95, 1));
/// assert_eq!(compute_span_hours(Some("17:00"), Some("07:30")), Decimal::ZERO);
/// assert_eq!(compute_span_hours(Some("07:30"), None), Decimal::ZERO);
/// ```
pub fn compute_span_hours(clock_in: Option<&str>, clock_out: Option<&str>) -> Decimal {
    Decimal::from(span_minutes(clock_in, clock_out)) / Decimal::from(MINUTES_PER_HOUR)
}
