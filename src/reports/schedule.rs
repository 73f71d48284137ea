//! The per-day schedule sheet.

use serde::{Deserialize, Serialize};

use crate::error::PayrollResult;
use crate::models::{Availability, DriverRole};
use crate::roster::Roster;

/// A scheduled driver on one day of the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Driver id.
    pub driver_id: String,
    /// Driver name.
    pub name: String,
    /// Driver or dispatcher.
    pub role: DriverRole,
    /// Primary phone.
    pub phone: String,
    /// Stated availability, if given.
    pub availability: Option<Availability>,
    /// Free-text hours for partial availability.
    pub partial_hours: Option<String>,
}

/// One event day with its scheduled drivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// Event day id.
    pub day_id: String,
    /// Display label of the day.
    pub label: String,
    /// Nominal start time.
    pub start_time: String,
    /// Nominal end time.
    pub end_time: String,
    /// Drivers needed per day.
    pub needed: u32,
    /// Scheduled drivers, in registration order.
    pub drivers: Vec<ScheduleEntry>,
}

/// The schedule for every day of an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSheet {
    /// Event id.
    pub event_id: String,
    /// Event display name.
    pub event_name: String,
    /// Days in display order.
    pub days: Vec<ScheduleDay>,
}

/// Builds the schedule sheet for an event.
pub fn schedule_sheet(roster: &Roster, event_id: &str) -> PayrollResult<ScheduleSheet> {
    let event = roster.event(event_id)?;
    let event_drivers = roster.event_drivers(event_id);

    let days = event
        .days
        .iter()
        .map(|day| {
            let drivers = event_drivers
                .iter()
                .filter(|d| d.is_scheduled_on(event_id, &day.id))
                .map(|d| {
                    let record = d.record(event_id);
                    ScheduleEntry {
                        driver_id: d.id.clone(),
                        name: d.name.clone(),
                        role: d.role,
                        phone: d.phone.clone(),
                        availability: record.and_then(|r| r.availability.get(&day.id).copied()),
                        partial_hours: record.and_then(|r| r.partial_hours.get(&day.id).cloned()),
                    }
                })
                .collect();

            ScheduleDay {
                day_id: day.id.clone(),
                label: day.label.clone(),
                start_time: day.start_time.clone(),
                end_time: day.end_time.clone(),
                needed: event.drivers_needed,
                drivers,
            }
        })
        .collect();

    Ok(ScheduleSheet {
        event_id: event.id.clone(),
        event_name: event.name.clone(),
        days,
    })
}
