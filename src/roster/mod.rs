//! In-memory event and driver roster.
//!
//! The [`Roster`] owns every event and driver and is the only place they are
//! mutated. Each operation either succeeds completely or returns a
//! [`PayrollError`](crate::error::PayrollError) and leaves the roster exactly
//! as it was.
//!
//! # Example
//!
//! ```
//! use driver_payroll::models::{NewDriver, NewEvent};
//! use driver_payroll::roster::Roster;
//! use rust_decimal::Decimal;
//!
//! let mut roster = Roster::default();
//! let event = roster
//!     .add_event(NewEvent {
//!         name: "Valentine's Day 2026".to_string(),
//!         holiday: "Valentine's Day".to_string(),
//!         year: 2026,
//!         rate_per_hour: Some(Decimal::new(15, 0)),
//!         dispatcher_rate: Some(Decimal::new(20, 0)),
//!         drivers_needed: 15,
//!         check_date: None,
//!     })
//!     .unwrap();
//!
//! let driver = roster
//!     .add_driver(NewDriver::named("Nimsi Aracely"), Some(event.id.as_str()), None)
//!     .unwrap();
//! assert_eq!(roster.event_drivers(&event.id).len(), 1);
//! assert!(roster.delete_event(&event.id).is_err());
//! # let _ = driver;
//! ```

mod drivers;
mod entries;
mod events;

pub use entries::MAX_DAILY_FUEL;
pub use events::MAX_HOURLY_RATE;

use tracing::warn;
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Driver, DriverEventRecord, Event};

/// Maximum number of drivers that may hold the dispatcher role at once.
pub const DEFAULT_MAX_DISPATCHERS: usize = 2;

/// Owns all events and drivers and enforces their invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    events: Vec<Event>,
    drivers: Vec<Driver>,
    max_dispatchers: usize,
}

impl Default for Roster {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            drivers: Vec::new(),
            max_dispatchers: DEFAULT_MAX_DISPATCHERS,
        }
    }
}

impl Roster {
    /// Creates a roster from existing data with the default dispatcher cap.
    pub fn new(events: Vec<Event>, drivers: Vec<Driver>) -> PayrollResult<Self> {
        Self::with_max_dispatchers(events, drivers, DEFAULT_MAX_DISPATCHERS)
    }

    /// Creates a roster from existing data with a custom dispatcher cap.
    ///
    /// Fails if the data already has more dispatchers than the cap allows.
    pub fn with_max_dispatchers(
        events: Vec<Event>,
        drivers: Vec<Driver>,
        max_dispatchers: usize,
    ) -> PayrollResult<Self> {
        let roster = Self {
            events,
            drivers,
            max_dispatchers,
        };

        let dispatchers = roster.dispatcher_count();
        if dispatchers > max_dispatchers {
            warn!(
                dispatchers,
                max_dispatchers, "Seed data exceeds the dispatcher limit"
            );
            return Err(PayrollError::InvalidDriver {
                field: "role".to_string(),
                message: format!(
                    "{} dispatchers found but at most {} are allowed",
                    dispatchers, max_dispatchers
                ),
            });
        }

        Ok(roster)
    }

    /// The configured dispatcher cap.
    pub fn max_dispatchers(&self) -> usize {
        self.max_dispatchers
    }

    /// All events in creation order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// All drivers in registration order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Looks up an event by id.
    pub fn event(&self, event_id: &str) -> PayrollResult<&Event> {
        self.events
            .iter()
            .find(|e| e.id == event_id)
            .ok_or_else(|| PayrollError::EventNotFound {
                event_id: event_id.to_string(),
            })
    }

    /// Looks up a driver by id.
    pub fn driver(&self, driver_id: &str) -> PayrollResult<&Driver> {
        self.drivers
            .iter()
            .find(|d| d.id == driver_id)
            .ok_or_else(|| PayrollError::DriverNotFound {
                driver_id: driver_id.to_string(),
            })
    }

    /// Drivers who have joined the event, in registration order.
    pub fn event_drivers(&self, event_id: &str) -> Vec<&Driver> {
        self.drivers.iter().filter(|d| d.in_event(event_id)).collect()
    }

    /// Drivers scheduled for at least one day of the event.
    pub fn scheduled_drivers(&self, event_id: &str) -> Vec<&Driver> {
        self.drivers
            .iter()
            .filter(|d| d.is_scheduled_for(event_id))
            .collect()
    }

    /// Event drivers whose name or email contains the term, ignoring case.
    pub fn search_drivers(&self, event_id: &str, term: &str) -> Vec<&Driver> {
        let term = term.to_lowercase();
        self.event_drivers(event_id)
            .into_iter()
            .filter(|d| {
                d.name.to_lowercase().contains(&term) || d.email.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Number of drivers currently holding the dispatcher role, system-wide.
    pub fn dispatcher_count(&self) -> usize {
        self.drivers.iter().filter(|d| d.is_dispatcher()).count()
    }

    fn event_mut(&mut self, event_id: &str) -> PayrollResult<&mut Event> {
        self.events
            .iter_mut()
            .find(|e| e.id == event_id)
            .ok_or_else(|| PayrollError::EventNotFound {
                event_id: event_id.to_string(),
            })
    }

    fn driver_mut(&mut self, driver_id: &str) -> PayrollResult<&mut Driver> {
        self.drivers
            .iter_mut()
            .find(|d| d.id == driver_id)
            .ok_or_else(|| PayrollError::DriverNotFound {
                driver_id: driver_id.to_string(),
            })
    }

    /// The driver's record for a day of an event, after checking the day exists.
    fn day_record_mut(
        &mut self,
        driver_id: &str,
        event_id: &str,
        day_id: &str,
    ) -> PayrollResult<&mut DriverEventRecord> {
        if !self.event(event_id)?.has_day(day_id) {
            return Err(PayrollError::DayNotFound {
                event_id: event_id.to_string(),
                day_id: day_id.to_string(),
            });
        }
        self.record_mut(driver_id, event_id)
    }

    fn record_mut(
        &mut self,
        driver_id: &str,
        event_id: &str,
    ) -> PayrollResult<&mut DriverEventRecord> {
        self.event(event_id)?;
        let driver = self.driver_mut(driver_id)?;
        driver
            .events
            .get_mut(event_id)
            .ok_or_else(|| PayrollError::DriverNotInEvent {
                driver_id: driver_id.to_string(),
                event_id: event_id.to_string(),
            })
    }
}

/// Generates a fresh identifier with the given prefix.
fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}
