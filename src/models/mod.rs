//! Core data models for the driver payroll engine.
//!
//! This module contains the event, driver and time-entry types shared by the
//! calculator, the roster and the reports.

mod driver;
mod event;
mod time_entry;

pub use driver::{
    Availability, CheckPreference, Driver, DriverEventRecord, DriverRole, DriverStatus,
    DriverUpdate, NewDriver,
};
pub use event::{
    DEFAULT_DAY_END, DEFAULT_DAY_START, DEFAULT_SIGNUP_INTRO, Event, EventDay, EventStatus,
    EventUpdate, NewEvent, NewEventDay,
};
pub use time_entry::{TimeEntry, TimeEntryField};
pub(crate) use time_entry::text_or_number;
