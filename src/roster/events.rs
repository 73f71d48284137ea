//! Event and event day operations.

use rust_decimal::Decimal;
use tracing::{info, warn};

use super::{Roster, new_id};
use crate::calculation::format_date_label;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    DEFAULT_DAY_END, DEFAULT_DAY_START, DEFAULT_SIGNUP_INTRO, Event, EventDay, EventStatus,
    EventUpdate, NewEvent, NewEventDay,
};

fn invalid(field: &str, message: &str) -> PayrollError {
    PayrollError::InvalidEvent {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Highest hourly rate an event may pay drivers or dispatchers.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

fn validate_rate(field: &str, rate: Option<Decimal>) -> PayrollResult<()> {
    match rate {
        Some(r) if r < Decimal::ZERO => Err(invalid(field, "must not be negative")),
        Some(r) if r > MAX_HOURLY_RATE => Err(invalid(field, "must not exceed 1000 per hour")),
        _ => Ok(()),
    }
}

/// Checks the invariants every stored event must satisfy.
fn validate_event(event: &Event) -> PayrollResult<()> {
    if event.name.trim().is_empty() {
        return Err(invalid("name", "must not be empty"));
    }
    if event.holiday.trim().is_empty() {
        return Err(invalid("holiday", "must not be empty"));
    }
    if event.drivers_needed == 0 {
        return Err(invalid("drivers_needed", "must be at least 1"));
    }
    validate_rate("rate_per_hour", event.rate_per_hour)?;
    validate_rate("dispatcher_rate", event.dispatcher_rate)
}

impl Roster {
    /// Creates a new upcoming event with no days and the default signup intro.
    pub fn add_event(&mut self, new: NewEvent) -> PayrollResult<Event> {
        let event = Event {
            id: new_id("evt"),
            name: new.name.trim().to_string(),
            holiday: new.holiday.trim().to_string(),
            year: new.year,
            status: EventStatus::Upcoming,
            rate_per_hour: new.rate_per_hour,
            dispatcher_rate: new.dispatcher_rate,
            drivers_needed: new.drivers_needed,
            check_date: new.check_date,
            info_packet_url: None,
            liability_waiver_url: None,
            signup_intro: DEFAULT_SIGNUP_INTRO.to_string(),
            days: Vec::new(),
        };

        if let Err(e) = validate_event(&event) {
            warn!(error = %e, "Rejected new event");
            return Err(e);
        }

        info!(event_id = %event.id, name = %event.name, "Event created");
        self.events.push(event.clone());
        Ok(event)
    }

    /// Applies a field-level update to an event.
    pub fn update_event(&mut self, event_id: &str, update: EventUpdate) -> PayrollResult<Event> {
        let mut candidate = self.event(event_id)?.clone();

        if let Some(name) = update.name {
            candidate.name = name.trim().to_string();
        }
        if let Some(holiday) = update.holiday {
            candidate.holiday = holiday.trim().to_string();
        }
        if let Some(year) = update.year {
            candidate.year = year;
        }
        if let Some(status) = update.status {
            candidate.status = status;
        }
        if update.rate_per_hour.is_some() {
            candidate.rate_per_hour = update.rate_per_hour;
        }
        if update.dispatcher_rate.is_some() {
            candidate.dispatcher_rate = update.dispatcher_rate;
        }
        if let Some(needed) = update.drivers_needed {
            candidate.drivers_needed = needed;
        }
        if update.check_date.is_some() {
            candidate.check_date = update.check_date;
        }
        if update.info_packet_url.is_some() {
            candidate.info_packet_url = update.info_packet_url;
        }
        if update.liability_waiver_url.is_some() {
            candidate.liability_waiver_url = update.liability_waiver_url;
        }

        if let Err(e) = validate_event(&candidate) {
            warn!(event_id, error = %e, "Rejected event update");
            return Err(e);
        }

        let event = self.event_mut(event_id)?;
        *event = candidate.clone();
        info!(event_id, "Event updated");
        Ok(candidate)
    }

    /// Deletes an event and every driver's record for it.
    ///
    /// The last remaining event cannot be deleted.
    pub fn delete_event(&mut self, event_id: &str) -> PayrollResult<()> {
        self.event(event_id)?;
        if self.events.len() <= 1 {
            warn!(event_id, "Refusing to delete the only event");
            return Err(PayrollError::LastEventDeletion {
                event_id: event_id.to_string(),
            });
        }

        self.events.retain(|e| e.id != event_id);
        let mut unlinked = 0usize;
        for driver in &mut self.drivers {
            if driver.events.remove(event_id).is_some() {
                unlinked += 1;
            }
        }

        info!(event_id, unlinked, "Event deleted");
        Ok(())
    }

    /// Replaces the introduction shown on the public signup form.
    pub fn set_signup_intro(
        &mut self,
        event_id: &str,
        intro: impl Into<String>,
    ) -> PayrollResult<()> {
        let event = self.event_mut(event_id)?;
        event.signup_intro = intro.into();
        info!(event_id, "Signup intro updated");
        Ok(())
    }

    /// Appends a day to an event, labelled from its date.
    pub fn add_day(&mut self, event_id: &str, new: NewEventDay) -> PayrollResult<EventDay> {
        let event = self.event_mut(event_id)?;
        if event.days.iter().any(|d| d.date == new.date) {
            warn!(event_id, date = %new.date, "Rejected duplicate event day");
            return Err(invalid("days", &format!("{} is already an event day", new.date)));
        }

        let day = EventDay {
            id: new_id("d"),
            date: new.date,
            label: format_date_label(new.date),
            start_time: new.start_time.unwrap_or_else(|| DEFAULT_DAY_START.to_string()),
            end_time: new.end_time.unwrap_or_else(|| DEFAULT_DAY_END.to_string()),
        };
        event.days.push(day.clone());

        info!(event_id, day_id = %day.id, label = %day.label, "Event day added");
        Ok(day)
    }

    /// Removes a day from an event along with all driver data recorded for it.
    pub fn remove_day(&mut self, event_id: &str, day_id: &str) -> PayrollResult<()> {
        let event = self.event_mut(event_id)?;
        let before = event.days.len();
        event.days.retain(|d| d.id != day_id);
        if event.days.len() == before {
            return Err(PayrollError::DayNotFound {
                event_id: event_id.to_string(),
                day_id: day_id.to_string(),
            });
        }

        for record in self.drivers.iter_mut().filter_map(|d| d.events.get_mut(event_id)) {
            record.forget_day(day_id);
        }

        info!(event_id, day_id, "Event day removed");
        Ok(())
    }
}
