//! Aggregation of a driver's hours, fuel and pay for an event.
//!
//! Hours are accumulated in whole minutes so that the sum is exact and does
//! not depend on the order days are visited. Pay is computed from the
//! already-rounded hours and then rounded again:
//!
//! ```text
//! total_hours = round2(minutes / 60)
//! total_pay   = round2(total_hours * rate + total_fuel)
//! ```
//!
//! Every sum and product is checked. A fuel amount or wage too large to
//! represent contributes zero, so the calculator never panics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::clock::span_minutes;
use super::fuel::parse_fuel;
use super::rate::select_hourly_rate;
use super::rounding::round_to_cents;
use crate::models::{DriverEventRecord, DriverRole, Event, TimeEntry};

/// A driver's totals for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverEventTotals {
    /// Hours worked across all days, rounded to two places.
    pub total_hours: Decimal,
    /// Fuel reimbursement across all days, unrounded.
    pub total_fuel: Decimal,
    /// Hours at the applicable rate plus fuel, rounded to two places.
    pub total_pay: Decimal,
}

impl DriverEventTotals {
    /// Totals for a driver with nothing recorded.
    pub const ZERO: Self = Self {
        total_hours: Decimal::ZERO,
        total_fuel: Decimal::ZERO,
        total_pay: Decimal::ZERO,
    };
}

/// One day's hours, fuel and pay, as shown on the hours sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayTotals {
    /// Both shifts combined, rounded to two places.
    pub hours: Decimal,
    /// Fuel reimbursement for the day.
    pub fuel: Decimal,
    /// Day hours at the rate plus fuel, rounded to two places.
    pub pay: Decimal,
}

/// Minutes worked across both shifts of an entry.
fn entry_minutes(entry: &TimeEntry) -> i64 {
    span_minutes(entry.time_in_1.as_deref(), entry.time_out_1.as_deref())
        + span_minutes(entry.time_in_2.as_deref(), entry.time_out_2.as_deref())
}

/// Adds an amount to a running total. An amount that would overflow the
/// total is dropped.
pub(crate) fn accumulate(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or(total)
}

/// Hours at the rate, rounded to cents.
///
/// A product too large to represent is worth zero.
///
/// # Examples
///
/// ```
/// use driver_payroll::calculation::compute_wages;
/// use rust_decimal::Decimal;
///
/// assert_eq!(compute_wages(Decimal::new(950, 2), Decimal::new(15, 0)), Decimal::new(14250, 2));
/// assert_eq!(compute_wages(Decimal::new(10, 0), Decimal::MAX), Decimal::ZERO);
/// ```
pub fn compute_wages(hours: Decimal, rate: Decimal) -> Decimal {
    hours
        .checked_mul(rate)
        .map(round_to_cents)
        .unwrap_or(Decimal::ZERO)
}

/// `round2(hours * rate + fuel)`. Wages that overflow, alone or on top of
/// the fuel, are dropped and the fuel is still paid.
fn compute_pay(hours: Decimal, rate: Decimal, fuel: Decimal) -> Decimal {
    let wages = hours.checked_mul(rate).unwrap_or(Decimal::ZERO);
    round_to_cents(accumulate(fuel, wages))
}

/// Computes totals over a set of time entries at a known rate.
///
/// This is the order-independent core of [`compute_driver_event_totals`].
pub fn compute_entry_totals<'a, I>(entries: I, rate: Decimal) -> DriverEventTotals
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    let mut total_minutes: i64 = 0;
    let mut total_fuel = Decimal::ZERO;
    let mut any = false;

    for entry in entries {
        any = true;
        total_minutes += entry_minutes(entry);
        total_fuel = accumulate(total_fuel, parse_fuel(entry.fuel.as_deref()));
    }

    if !any {
        return DriverEventTotals::ZERO;
    }

    let total_hours = round_to_cents(Decimal::from(total_minutes) / Decimal::from(60));
    let total_pay = compute_pay(total_hours, rate, total_fuel);

    DriverEventTotals {
        total_hours,
        total_fuel,
        total_pay,
    }
}

/// Computes a driver's total hours, fuel and pay for an event.
///
/// A missing record, or one with no time entries, yields all zeros. A missing
/// event only affects rate selection (the default rate applies).
///
/// # Examples
///
/// ```
/// use driver_payroll::calculation::compute_driver_event_totals;
/// use driver_payroll::models::{DriverEventRecord, DriverRole, TimeEntry};
/// use rust_decimal::Decimal;
///
/// let mut record = DriverEventRecord::default();
/// record
///     .hours
///     .insert("d1".to_string(), TimeEntry::single_shift("07:30", "17:00", "25"));
///
/// let totals = compute_driver_event_totals(Some(&record), DriverRole::Driver, None);
/// assert_eq!(totals.total_hours, Decimal::new(950, 2));
/// assert_eq!(totals.total_fuel, Decimal::new(25, 0));
/// assert_eq!(totals.total_pay, Decimal::new(16750, 2));
/// ```
pub fn compute_driver_event_totals(
    record: Option<&DriverEventRecord>,
    role: DriverRole,
    event: Option<&Event>,
) -> DriverEventTotals {
    let Some(record) = record else {
        return DriverEventTotals::ZERO;
    };

    let rate = select_hourly_rate(role, event);
    compute_entry_totals(record.hours.values(), rate)
}

/// Computes one day's hours and pay at the given rate.
///
/// # Examples
///
/// ```
/// use driver_payroll::calculation::compute_day_totals;
/// use driver_payroll::models::TimeEntry;
/// use rust_decimal::Decimal;
///
/// let entry = TimeEntry::split_shift(("08:30", "12:00"), ("13:00", "17:00"), "0");
/// let day = compute_day_totals(&entry, Decimal::new(15, 0));
/// assert_eq!(day.hours, Decimal::new(750, 2));
/// assert_eq!(day.pay, Decimal::new(11250, 2));
/// ```
pub fn compute_day_totals(entry: &TimeEntry, rate: Decimal) -> DayTotals {
    let hours = round_to_cents(Decimal::from(entry_minutes(entry)) / Decimal::from(60));
    let fuel = parse_fuel(entry.fuel.as_deref());
    let pay = compute_pay(hours, rate, fuel);

    DayTotals { hours, fuel, pay }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventStatus;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn event(rate: Option<&str>, dispatcher_rate: Option<&str>) -> Event {
        Event {
            id: "evt-1".to_string(),
            name: "Valentine's Day 2026".to_string(),
            holiday: "Valentine's Day".to_string(),
            year: 2026,
            status: EventStatus::Active,
            rate_per_hour: rate.map(dec),
            dispatcher_rate: dispatcher_rate.map(dec),
            drivers_needed: 15,
            check_date: None,
            info_packet_url: None,
            liability_waiver_url: None,
            signup_intro: String::new(),
            days: vec![],
        }
    }

    fn record(days: Vec<(&str, TimeEntry)>) -> DriverEventRecord {
        let mut record = DriverEventRecord::default();
        for (day, entry) in days {
            record.hours.insert(day.to_string(), entry);
        }
        record
    }

    fn empty_entry(fuel: &str) -> TimeEntry {
        TimeEntry {
            time_in_1: Some(String::new()),
            time_out_1: Some(String::new()),
            time_in_2: Some(String::new()),
            time_out_2: Some(String::new()),
            fuel: Some(fuel.to_string()),
        }
    }

    /// Driver at $15/hr, 07:30-17:00 with $25 fuel.
    #[test]
    fn test_single_day_driver() {
        let evt = event(Some("15"), Some("20"));
        let rec = record(vec![("d1", TimeEntry::single_shift("07:30", "17:00", "25"))]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, Some(&evt));

        assert_eq!(totals.total_hours, dec("9.50"));
        assert_eq!(totals.total_fuel, dec("25"));
        assert_eq!(totals.total_pay, dec("167.50"));
    }

    /// Dispatcher at $20/hr, 08:30-17:00 with $20 fuel.
    #[test]
    fn test_single_day_dispatcher() {
        let evt = event(Some("15"), Some("20"));
        let rec = record(vec![("d1", TimeEntry::single_shift("08:30", "17:00", "20"))]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Dispatcher, Some(&evt));

        assert_eq!(totals.total_hours, dec("8.50"));
        assert_eq!(totals.total_pay, dec("190.00"));
    }

    #[test]
    fn test_two_days_sum() {
        let evt = event(Some("15"), Some("20"));
        let rec = record(vec![
            ("d1", TimeEntry::single_shift("07:30", "17:00", "0")),
            ("d2", TimeEntry::single_shift("07:00", "17:30", "30")),
        ]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, Some(&evt));

        assert_eq!(totals.total_hours, dec("20.00"));
        assert_eq!(totals.total_fuel, dec("30"));
        assert_eq!(totals.total_pay, dec("330.00"));
    }

    #[test]
    fn test_empty_day_entry_is_all_zero() {
        let evt = event(Some("15"), None);
        let rec = record(vec![("d1", empty_entry(""))]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, Some(&evt));

        assert_eq!(totals, DriverEventTotals::ZERO);
    }

    #[test]
    fn test_unscheduled_driver_with_only_empty_clocks_is_zero() {
        let evt = event(Some("15"), None);
        let mut rec = record(vec![("d1", empty_entry("")), ("d2", TimeEntry::default())]);
        rec.scheduled.clear();

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, Some(&evt));

        assert_eq!(totals.total_hours, Decimal::ZERO);
        assert_eq!(totals.total_fuel, Decimal::ZERO);
        assert_eq!(totals.total_pay, Decimal::ZERO);
    }

    #[test]
    fn test_split_shift() {
        let rec = record(vec![(
            "d1",
            TimeEntry::split_shift(("08:30", "12:00"), ("13:00", "17:00"), "0"),
        )]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, None);

        assert_eq!(totals.total_hours, dec("7.50"));
        assert_eq!(totals.total_pay, dec("112.50"));
    }

    #[test]
    fn test_first_shift_only_second_contributes_nothing() {
        let mut entry = TimeEntry::single_shift("09:00", "13:00", "0");
        entry.time_in_2 = Some(String::new());
        entry.time_out_2 = Some(String::new());
        let rec = record(vec![("d1", entry)]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, None);

        assert_eq!(totals.total_hours, dec("4.00"));
    }

    #[test]
    fn test_reversed_shift_contributes_zero() {
        let entry = TimeEntry::split_shift(("17:00", "08:00"), ("13:00", "15:00"), "0");
        let rec = record(vec![("d1", entry)]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, None);

        assert_eq!(totals.total_hours, dec("2.00"));
        assert_eq!(totals.total_pay, dec("30.00"));
    }

    #[test]
    fn test_non_numeric_fuel_contributes_zero() {
        let rec = record(vec![
            ("d1", TimeEntry::single_shift("08:00", "09:00", "")),
            ("d2", TimeEntry::single_shift("08:00", "09:00", "n/a")),
            ("d3", TimeEntry::single_shift("08:00", "09:00", "12.5")),
        ]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, None);

        assert_eq!(totals.total_fuel, dec("12.5"));
        assert_eq!(totals.total_pay, dec("57.50"));
    }

    #[test]
    fn test_dispatcher_without_dispatcher_rate_uses_driver_rate() {
        let evt = event(Some("18"), None);
        let rec = record(vec![("d1", TimeEntry::single_shift("08:00", "18:00", "0"))]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Dispatcher, Some(&evt));

        assert_eq!(totals.total_pay, dec("180.00"));
    }

    #[test]
    fn test_missing_event_uses_default_rate() {
        let rec = record(vec![("d1", TimeEntry::single_shift("08:00", "10:00", "5"))]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Dispatcher, None);

        assert_eq!(totals.total_hours, dec("2.00"));
        assert_eq!(totals.total_pay, dec("35.00"));
    }

    #[test]
    fn test_missing_record_is_zero() {
        let evt = event(Some("15"), None);
        assert_eq!(
            compute_driver_event_totals(None, DriverRole::Driver, Some(&evt)),
            DriverEventTotals::ZERO
        );
    }

    #[test]
    fn test_no_time_entries_is_zero() {
        let rec = DriverEventRecord::default();
        assert_eq!(
            compute_driver_event_totals(Some(&rec), DriverRole::Driver, None),
            DriverEventTotals::ZERO
        );
    }

    #[test]
    fn test_pay_uses_rounded_hours() {
        // 9h29m = 9.48333.. hours, rounded to 9.48 before multiplying.
        let rec = record(vec![("d1", TimeEntry::single_shift("07:31", "17:00", "0"))]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, None);

        assert_eq!(totals.total_hours, dec("9.48"));
        assert_eq!(totals.total_pay, dec("142.20"));
    }

    #[test]
    fn test_fuel_is_not_rounded_but_pay_is() {
        let rec = record(vec![("d1", TimeEntry::single_shift("08:00", "09:00", "0.125"))]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, None);

        assert_eq!(totals.total_fuel, dec("0.125"));
        assert_eq!(totals.total_pay, dec("15.13"));
    }

    #[test]
    fn test_minutes_accumulate_before_rounding() {
        // Three 20 minute shifts are exactly one hour.
        let rec = record(vec![
            ("d1", TimeEntry::single_shift("10:00", "10:20", "")),
            ("d2", TimeEntry::single_shift("10:00", "10:20", "")),
            ("d3", TimeEntry::single_shift("10:00", "10:20", "")),
        ]);

        let totals = compute_driver_event_totals(Some(&rec), DriverRole::Driver, None);

        assert_eq!(totals.total_hours, dec("1.00"));
    }

    #[test]
    fn test_day_totals() {
        let entry = TimeEntry::single_shift("07:30", "17:00", "25");
        let day = compute_day_totals(&entry, dec("15"));
        assert_eq!(day.hours, dec("9.50"));
        assert_eq!(day.fuel, dec("25"));
        assert_eq!(day.pay, dec("167.50"));

        let empty = compute_day_totals(&TimeEntry::default(), dec("15"));
        assert_eq!(empty.hours, Decimal::ZERO);
        assert_eq!(empty.pay, Decimal::ZERO);
    }

    #[test]
    fn test_oversized_fuel_drops_wages() {
        let huge = Decimal::MAX.to_string();
        let entries = [
            TimeEntry::single_shift("08:00", "10:00", &huge),
            TimeEntry::single_shift("08:00", "10:00", &huge),
        ];

        let totals = compute_entry_totals(entries.iter(), dec("15"));

        assert_eq!(totals.total_hours, dec("4.00"));
        assert_eq!(totals.total_fuel, Decimal::MAX);
        // Wages no longer fit on top of the fuel, so pay keeps the fuel alone.
        assert_eq!(totals.total_pay, Decimal::MAX);
    }

    #[test]
    fn test_oversized_rate_contributes_no_wages() {
        let entries = [TimeEntry::single_shift("07:00", "17:00", "12")];

        let totals = compute_entry_totals(entries.iter(), Decimal::MAX);

        assert_eq!(totals.total_hours, dec("10.00"));
        assert_eq!(totals.total_pay, dec("12"));

        let day = compute_day_totals(&entries[0], Decimal::MAX);
        assert_eq!(day.pay, dec("12"));
        assert_eq!(compute_wages(day.hours, Decimal::MAX), Decimal::ZERO);
    }

    #[test]
    fn test_accumulate_keeps_total_on_overflow() {
        assert_eq!(accumulate(dec("1.5"), dec("2")), dec("3.5"));
        assert_eq!(accumulate(Decimal::MAX, Decimal::ONE), Decimal::MAX);
    }

    fn clock(minutes: u32) -> String {
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }

    fn arb_entry() -> impl Strategy<Value = TimeEntry> {
        (0u32..1440, 0u32..1440, 0u32..1440, 0u32..1440, 0u32..10_000).prop_map(
            |(a, b, c, d, fuel_cents)| TimeEntry {
                time_in_1: Some(clock(a)),
                time_out_1: Some(clock(b)),
                time_in_2: Some(clock(c)),
                time_out_2: Some(clock(d)),
                fuel: Some(Decimal::new(i64::from(fuel_cents), 2).to_string()),
            },
        )
    }

    proptest! {
        #[test]
        fn prop_totals_are_order_independent(
            entries in proptest::collection::vec(arb_entry(), 0..8),
            rate_cents in 0i64..5_000,
        ) {
            let rate = Decimal::new(rate_cents, 2);
            let forward = compute_entry_totals(entries.iter(), rate);
            let backward = compute_entry_totals(entries.iter().rev(), rate);
            let mut rotated = entries.clone();
            if !rotated.is_empty() {
                rotated.rotate_left(1);
            }
            let shifted = compute_entry_totals(rotated.iter(), rate);

            prop_assert_eq!(forward, backward);
            prop_assert_eq!(forward, shifted);
        }

        #[test]
        fn prop_totals_are_idempotent(entries in proptest::collection::vec(arb_entry(), 0..8)) {
            let mut rec = DriverEventRecord::default();
            for (i, entry) in entries.into_iter().enumerate() {
                rec.hours.insert(format!("d{}", i), entry);
            }
            let first = compute_driver_event_totals(Some(&rec), DriverRole::Driver, None);
            let second = compute_driver_event_totals(Some(&rec), DriverRole::Driver, None);
            prop_assert_eq!(first.total_hours.to_string(), second.total_hours.to_string());
            prop_assert_eq!(first.total_fuel.to_string(), second.total_fuel.to_string());
            prop_assert_eq!(first.total_pay.to_string(), second.total_pay.to_string());
        }

        #[test]
        fn prop_totals_are_never_negative(entries in proptest::collection::vec(arb_entry(), 0..8)) {
            let totals = compute_entry_totals(entries.iter(), Decimal::new(15, 0));
            prop_assert!(!totals.total_hours.is_sign_negative());
            prop_assert!(!totals.total_pay.is_sign_negative());
        }
    }
}
