//! Hourly rate selection.
//!
//! This module decides which hourly rate applies to a driver for an event,
//! falling back through the dispatcher rate, the driver rate and finally a
//! fixed default so that an event with missing rate configuration still pays
//! something sensible.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DriverRole, Event};

/// Hourly rate used when an event has no usable rate configured ($15.00).
pub const DEFAULT_HOURLY_RATE: Decimal = Decimal::from_parts(1500, 0, 0, false, 2);

/// Where a resolved hourly rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// The event's dispatcher rate.
    DispatcherRate,
    /// The event's driver rate.
    DriverRate,
    /// The built-in default.
    Default,
}

/// The result of a rate lookup, including where the rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateLookup {
    /// The hourly rate to pay.
    pub rate: Decimal,
    /// Which configuration supplied the rate.
    pub source: RateSource,
}

/// A configured rate counts only when it is present and non-zero.
fn configured(rate: Option<Decimal>) -> Option<Decimal> {
    rate.filter(|r| !r.is_zero())
}

/// Resolves the hourly rate for a role, reporting which setting supplied it.
///
/// Dispatchers use the event's dispatcher rate, then the driver rate. Drivers
/// use the driver rate. Either falls back to [`DEFAULT_HOURLY_RATE`], which
/// is also used when there is no event at all.
///
/// # Examples
///
/// ```
/// use driver_payroll::calculation::{RateSource, resolve_hourly_rate};
/// use driver_payroll::models::DriverRole;
///
/// let lookup = resolve_hourly_rate(DriverRole::Dispatcher, None);
/// assert_eq!(lookup.source, RateSource::Default);
/// assert_eq!(lookup.rate.to_string(), "15.00");
/// ```
pub fn resolve_hourly_rate(role: DriverRole, event: Option<&Event>) -> RateLookup {
    let driver_rate = event.and_then(|e| configured(e.rate_per_hour));
    let dispatcher_rate = event.and_then(|e| configured(e.dispatcher_rate));

    let found = match role {
        DriverRole::Dispatcher => dispatcher_rate
            .map(|rate| (rate, RateSource::DispatcherRate))
            .or_else(|| driver_rate.map(|rate| (rate, RateSource::DriverRate))),
        DriverRole::Driver => driver_rate.map(|rate| (rate, RateSource::DriverRate)),
    };

    match found {
        Some((rate, source)) => RateLookup { rate, source },
        None => RateLookup {
            rate: DEFAULT_HOURLY_RATE,
            source: RateSource::Default,
        },
    }
}

/// Selects the hourly rate for a role on an event.
///
/// See [`resolve_hourly_rate`] for the fallback order.
pub fn select_hourly_rate(role: DriverRole, event: Option<&Event>) -> Decimal {
    resolve_hourly_rate(role, event).rate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventStatus;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn event_with_rates(driver: Option<&str>, dispatcher: Option<&str>) -> Event {
        Event {
            id: "evt-1".to_string(),
            name: "Valentine's Day 2026".to_string(),
            holiday: "Valentine's Day".to_string(),
            year: 2026,
            status: EventStatus::Active,
            rate_per_hour: driver.map(dec),
            dispatcher_rate: dispatcher.map(dec),
            drivers_needed: 15,
            check_date: None,
            info_packet_url: None,
            liability_waiver_url: None,
            signup_intro: String::new(),
            days: vec![],
        }
    }

    #[test]
    fn test_default_rate_is_fifteen() {
        assert_eq!(DEFAULT_HOURLY_RATE, dec("15.00"));
    }

    #[test]
    fn test_driver_uses_event_rate() {
        let event = event_with_rates(Some("17"), Some("22"));
        let lookup = resolve_hourly_rate(DriverRole::Driver, Some(&event));
        assert_eq!(lookup.rate, dec("17"));
        assert_eq!(lookup.source, RateSource::DriverRate);
    }

    #[test]
    fn test_dispatcher_uses_dispatcher_rate() {
        let event = event_with_rates(Some("15"), Some("20"));
        let lookup = resolve_hourly_rate(DriverRole::Dispatcher, Some(&event));
        assert_eq!(lookup.rate, dec("20"));
        assert_eq!(lookup.source, RateSource::DispatcherRate);
    }

    #[test]
    fn test_dispatcher_without_dispatcher_rate_uses_driver_rate() {
        let event = event_with_rates(Some("18"), None);
        let lookup = resolve_hourly_rate(DriverRole::Dispatcher, Some(&event));
        assert_eq!(lookup.rate, dec("18"));
        assert_eq!(lookup.source, RateSource::DriverRate);
    }

    #[test]
    fn test_dispatcher_without_any_rate_uses_default() {
        let event = event_with_rates(None, None);
        assert_eq!(
            select_hourly_rate(DriverRole::Dispatcher, Some(&event)),
            dec("15")
        );
    }

    #[test]
    fn test_driver_ignores_dispatcher_rate() {
        let event = event_with_rates(None, Some("20"));
        let lookup = resolve_hourly_rate(DriverRole::Driver, Some(&event));
        assert_eq!(lookup.rate, dec("15"));
        assert_eq!(lookup.source, RateSource::Default);
    }

    #[test]
    fn test_missing_event_uses_default() {
        assert_eq!(select_hourly_rate(DriverRole::Driver, None), dec("15"));
        assert_eq!(select_hourly_rate(DriverRole::Dispatcher, None), dec("15"));
    }

    #[test]
    fn test_zero_rate_counts_as_unset() {
        let event = event_with_rates(Some("0"), Some("0"));
        assert_eq!(
            resolve_hourly_rate(DriverRole::Dispatcher, Some(&event)).source,
            RateSource::Default
        );
    }
}
