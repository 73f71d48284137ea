//! Event and event day models.
//!
//! An [`Event`] is one staffing campaign (a holiday rush) with its own pay
//! rates and an ordered list of [`EventDay`]s that need driver coverage.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Signup introduction given to newly created events.
pub const DEFAULT_SIGNUP_INTRO: &str = "Drivers will deliver flower arrangements on the dates listed below. Must have valid DL, insurance, and a vehicle.";

/// Nominal start time given to a new day when none is supplied.
pub const DEFAULT_DAY_START: &str = "7:30 AM";

/// Nominal end time given to a new day when none is supplied.
pub const DEFAULT_DAY_END: &str = "5:00 PM";

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// Signups are open or about to open.
    #[default]
    Upcoming,
    /// Deliveries are underway.
    Active,
    /// The event is over and payroll is settled.
    Completed,
}

/// One calendar day within an event that requires driver coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDay {
    /// Unique identifier for the day.
    pub id: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// Display label derived from the date (e.g. "Saturday, Feb 14").
    pub label: String,
    /// Nominal start time, free text (e.g. "7:30 AM").
    pub start_time: String,
    /// Nominal end time, free text (e.g. "5:00 PM").
    pub end_time: String,
}

/// A staffing campaign tied to a holiday.
///
/// # Example
///
/// ```
/// use driver_payroll::models::{Event, EventStatus};
/// use rust_decimal::Decimal;
///
/// let event = Event {
///     id: "evt-1".to_string(),
///     name: "Valentine's Day 2026".to_string(),
///     holiday: "Valentine's Day".to_string(),
///     year: 2026,
///     status: EventStatus::Active,
///     rate_per_hour: Some(Decimal::new(15, 0)),
///     dispatcher_rate: None,
///     drivers_needed: 15,
///     check_date: None,
///     info_packet_url: None,
///     liability_waiver_url: None,
///     signup_intro: String::new(),
///     days: vec![],
/// };
/// assert!(event.day("d1").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier for the event.
    pub id: String,
    /// Display name (e.g. "Mother's Day 2026").
    pub name: String,
    /// The holiday this event covers.
    pub holiday: String,
    /// The calendar year of the event.
    pub year: i32,
    /// Lifecycle status.
    #[serde(default)]
    pub status: EventStatus,
    /// Hourly rate for drivers.
    #[serde(default)]
    pub rate_per_hour: Option<Decimal>,
    /// Hourly rate for dispatchers; falls back to the driver rate when unset.
    #[serde(default)]
    pub dispatcher_rate: Option<Decimal>,
    /// Target number of drivers for each day.
    pub drivers_needed: u32,
    /// The date payout checks are issued.
    #[serde(default)]
    pub check_date: Option<NaiveDate>,
    /// Link to the driver information packet.
    #[serde(default)]
    pub info_packet_url: Option<String>,
    /// Link to the liability waiver document.
    #[serde(default)]
    pub liability_waiver_url: Option<String>,
    /// Introduction shown at the top of the public signup form.
    #[serde(default)]
    pub signup_intro: String,
    /// Days needing coverage, in display order.
    #[serde(default)]
    pub days: Vec<EventDay>,
}

impl Event {
    /// Looks up a day of this event by id.
    pub fn day(&self, day_id: &str) -> Option<&EventDay> {
        self.days.iter().find(|d| d.id == day_id)
    }

    /// Returns true if the event has a day with the given id.
    pub fn has_day(&self, day_id: &str) -> bool {
        self.day(day_id).is_some()
    }
}

/// Input for creating a new event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    /// Display name.
    pub name: String,
    /// The holiday covered.
    pub holiday: String,
    /// Calendar year.
    pub year: i32,
    /// Hourly rate for drivers.
    #[serde(default)]
    pub rate_per_hour: Option<Decimal>,
    /// Hourly rate for dispatchers.
    #[serde(default)]
    pub dispatcher_rate: Option<Decimal>,
    /// Target drivers per day.
    pub drivers_needed: u32,
    /// Payout check date.
    #[serde(default)]
    pub check_date: Option<NaiveDate>,
}

/// Field-level update to an existing event. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventUpdate {
    /// New display name.
    pub name: Option<String>,
    /// New holiday label.
    pub holiday: Option<String>,
    /// New year.
    pub year: Option<i32>,
    /// New lifecycle status.
    pub status: Option<EventStatus>,
    /// New driver rate.
    pub rate_per_hour: Option<Decimal>,
    /// New dispatcher rate.
    pub dispatcher_rate: Option<Decimal>,
    /// New drivers-needed target.
    pub drivers_needed: Option<u32>,
    /// New check date.
    pub check_date: Option<NaiveDate>,
    /// New info packet link.
    pub info_packet_url: Option<String>,
    /// New liability waiver link.
    pub liability_waiver_url: Option<String>,
}

/// Input for adding a day to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEventDay {
    /// The calendar date.
    pub date: NaiveDate,
    /// Nominal start time; defaults to 7:30 AM.
    #[serde(default)]
    pub start_time: Option<String>,
    /// Nominal end time; defaults to 5:00 PM.
    #[serde(default)]
    pub end_time: Option<String>,
}
