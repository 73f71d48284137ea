//! Driver model and per-event participation records.
//!
//! A [`Driver`] is shared across events; everything specific to one event
//! (availability, schedule, hours, payout) lives in a [`DriverEventRecord`]
//! keyed by event id.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::TimeEntry;

/// The kind of work a driver does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverRole {
    /// Delivers arrangements.
    #[default]
    Driver,
    /// Coordinates deliveries; paid at the dispatcher rate.
    Dispatcher,
}

impl DriverRole {
    /// Returns the other role.
    pub fn toggled(self) -> Self {
        match self {
            DriverRole::Driver => DriverRole::Dispatcher,
            DriverRole::Dispatcher => DriverRole::Driver,
        }
    }
}

/// How the driver receives their payout check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckPreference {
    /// Picks the check up at the shop.
    #[default]
    Pickup,
    /// Check is mailed to the mailing address.
    Mail,
}

/// Lifecycle status of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    /// Available for scheduling.
    #[default]
    Active,
    /// Kept on file but not being scheduled.
    Inactive,
}

/// A driver's stated availability for one event day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// Available for the full day.
    AllDay,
    /// Available for part of the day; see the partial-hours text.
    Partial,
    /// Not available.
    Unavailable,
}

/// A driver's participation in one event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverEventRecord {
    /// When the driver signed up for the event.
    pub signup_date: Option<NaiveDate>,
    /// Availability keyed by event day id.
    pub availability: HashMap<String, Availability>,
    /// Free-text hours for days marked partial, keyed by event day id.
    pub partial_hours: HashMap<String, String>,
    /// Whether the driver can help on the Thursday before the event.
    pub thursday_available: bool,
    /// Confirmed working days, keyed by event day id.
    pub scheduled: HashMap<String, bool>,
    /// Recorded clock data, keyed by event day id.
    pub hours: HashMap<String, TimeEntry>,
    /// Number of the payout check, once issued.
    pub check_number: String,
    /// Whether the payout has been handed over.
    pub paid: bool,
}

impl DriverEventRecord {
    /// Creates an empty record for a driver joining an event.
    pub fn new(signup_date: Option<NaiveDate>) -> Self {
        Self {
            signup_date,
            ..Self::default()
        }
    }

    /// Returns true if the driver is confirmed for at least one day.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled.values().any(|s| *s)
    }

    /// Returns true if the driver is confirmed for the given day.
    pub fn is_scheduled_on(&self, day_id: &str) -> bool {
        self.scheduled.get(day_id).copied().unwrap_or(false)
    }

    /// Drops every piece of per-day data recorded for the given day.
    pub fn forget_day(&mut self, day_id: &str) {
        self.availability.remove(day_id);
        self.partial_hours.remove(day_id);
        self.scheduled.remove(day_id);
        self.hours.remove(day_id);
    }
}

/// A person available for delivery or dispatch work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique identifier for the driver.
    pub id: String,
    /// Full name.
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Primary phone.
    #[serde(default)]
    pub phone: String,
    /// Alternate phone.
    #[serde(default)]
    pub alt_phone: String,
    /// Whether the driver has worked a previous event.
    #[serde(default)]
    pub returning: bool,
    /// Driver's license on file.
    #[serde(default)]
    pub has_license: bool,
    /// Proof of insurance on file.
    #[serde(default)]
    pub has_insurance: bool,
    /// How the payout check is delivered.
    #[serde(default)]
    pub check_preference: CheckPreference,
    /// Mailing address for mailed checks.
    #[serde(default)]
    pub mailing_address: String,
    /// Liability waiver signed.
    #[serde(default)]
    pub signed_liability: bool,
    /// Lifecycle status.
    #[serde(default)]
    pub status: DriverStatus,
    /// Driver or dispatcher.
    #[serde(default)]
    pub role: DriverRole,
    /// Free-text notes.
    #[serde(default)]
    pub notes: String,
    /// Rating from 0 to 5.
    #[serde(default)]
    pub rating: u8,
    /// Uploaded license document.
    #[serde(default)]
    pub license_url: Option<String>,
    /// Uploaded insurance document.
    #[serde(default)]
    pub insurance_url: Option<String>,
    /// Uploaded signed waiver.
    #[serde(default)]
    pub waiver_url: Option<String>,
    /// Participation records keyed by event id.
    #[serde(default)]
    pub events: HashMap<String, DriverEventRecord>,
}

impl Driver {
    /// Returns true if the driver works as a dispatcher.
    pub fn is_dispatcher(&self) -> bool {
        self.role == DriverRole::Dispatcher
    }

    /// Returns true if the license or the insurance is not on file.
    ///
    /// # Examples
    ///
    /// ```
    /// use driver_payroll::models::{Driver, NewDriver};
    ///
    /// let mut driver = Driver::from_new("drv-1", NewDriver::named("Marcia Peterson"));
    /// assert!(driver.is_missing_documents());
    ///
    /// driver.has_license = true;
    /// driver.has_insurance = true;
    /// assert!(!driver.is_missing_documents());
    /// ```
    pub fn is_missing_documents(&self) -> bool {
        !self.has_license || !self.has_insurance
    }

    /// Returns this driver's record for an event, if they joined it.
    pub fn record(&self, event_id: &str) -> Option<&DriverEventRecord> {
        self.events.get(event_id)
    }

    /// Returns true if the driver joined the event.
    pub fn in_event(&self, event_id: &str) -> bool {
        self.events.contains_key(event_id)
    }

    /// Returns true if the driver is confirmed for at least one day of the event.
    pub fn is_scheduled_for(&self, event_id: &str) -> bool {
        self.record(event_id).is_some_and(DriverEventRecord::is_scheduled)
    }

    /// Returns true if the driver is confirmed for the given event day.
    pub fn is_scheduled_on(&self, event_id: &str, day_id: &str) -> bool {
        self.record(event_id).is_some_and(|r| r.is_scheduled_on(day_id))
    }

    /// Builds a driver record from creation input.
    pub fn from_new(id: impl Into<String>, new: NewDriver) -> Self {
        Self {
            id: id.into(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            alt_phone: new.alt_phone,
            returning: new.returning,
            has_license: new.has_license,
            has_insurance: new.has_insurance,
            check_preference: new.check_preference,
            mailing_address: new.mailing_address,
            signed_liability: new.signed_liability,
            status: DriverStatus::Active,
            role: DriverRole::Driver,
            notes: new.notes,
            rating: new.rating,
            license_url: None,
            insurance_url: None,
            waiver_url: None,
            events: HashMap::new(),
        }
    }
}

/// Input for registering a new driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewDriver {
    /// Full name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Primary phone.
    pub phone: String,
    /// Alternate phone.
    pub alt_phone: String,
    /// Whether the driver has worked before.
    pub returning: bool,
    /// Driver's license on file.
    pub has_license: bool,
    /// Proof of insurance on file.
    pub has_insurance: bool,
    /// Check delivery preference.
    pub check_preference: CheckPreference,
    /// Mailing address; required for mailed checks.
    pub mailing_address: String,
    /// Liability waiver signed.
    pub signed_liability: bool,
    /// Free-text notes.
    pub notes: String,
    /// Rating from 0 to 5.
    pub rating: u8,
}

impl NewDriver {
    /// Creates input with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Field-level update to a driver. `None` leaves a field unchanged.
///
/// Roles are changed with the dedicated toggle so the dispatcher cap is
/// always checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverUpdate {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New phone.
    pub phone: Option<String>,
    /// New alternate phone.
    pub alt_phone: Option<String>,
    /// New returning flag.
    pub returning: Option<bool>,
    /// New license flag.
    pub has_license: Option<bool>,
    /// New insurance flag.
    pub has_insurance: Option<bool>,
    /// New check preference.
    pub check_preference: Option<CheckPreference>,
    /// New mailing address.
    pub mailing_address: Option<String>,
    /// New waiver flag.
    pub signed_liability: Option<bool>,
    /// New status.
    pub status: Option<DriverStatus>,
    /// New notes.
    pub notes: Option<String>,
    /// New rating.
    pub rating: Option<u8>,
    /// New license document link.
    pub license_url: Option<String>,
    /// New insurance document link.
    pub insurance_url: Option<String>,
    /// New waiver document link.
    pub waiver_url: Option<String>,
}
