//! Payroll calculation for the driver payroll engine.
//!
//! This module contains pure functions for turning raw clock text and fuel
//! entries into hours and pay: clock parsing and shift spans, fuel parsing,
//! role-based hourly rate selection with fallbacks, per-day and per-event
//! totals with two-stage cent rounding, and display formatting.

mod clock;
mod format;
mod fuel;
mod rate;
mod rounding;
mod totals;

pub use clock::{compute_span_hours, parse_clock_time, span_minutes};
pub use format::{format_currency, format_date_label, format_hours};
pub use fuel::parse_fuel;
pub(crate) use fuel::parse_amount;
pub use rate::{
    DEFAULT_HOURLY_RATE, RateLookup, RateSource, resolve_hourly_rate, select_hourly_rate,
};
pub use rounding::{CENT_PLACES, round_to_cents};
pub use totals::{
    DayTotals, DriverEventTotals, compute_day_totals, compute_driver_event_totals,
    compute_entry_totals, compute_wages,
};
pub(crate) use totals::accumulate;
