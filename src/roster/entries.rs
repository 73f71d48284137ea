//! Per-day availability, scheduling, clock entries and payout tracking.

use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use super::Roster;
use crate::calculation::parse_amount;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Availability, TimeEntry, TimeEntryField};

/// Largest fuel reimbursement accepted for a single day.
pub const MAX_DAILY_FUEL: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

fn invalid_fuel(message: String) -> PayrollError {
    PayrollError::InvalidTimeEntry {
        field: TimeEntryField::Fuel.as_str().to_string(),
        message,
    }
}

/// Rejects fuel values that parse to a negative or implausibly large amount.
///
/// Text that does not parse is stored as entered and counts as zero.
fn validate_fuel(value: &str) -> PayrollResult<()> {
    match parse_amount(value) {
        Some(amount) if amount < Decimal::ZERO => Err(invalid_fuel(format!(
            "fuel reimbursement cannot be negative ({})",
            value
        ))),
        Some(amount) if amount > MAX_DAILY_FUEL => Err(invalid_fuel(format!(
            "fuel reimbursement cannot exceed {} per day ({})",
            MAX_DAILY_FUEL, value
        ))),
        _ => Ok(()),
    }
}

impl Roster {
    /// Records a driver's availability for one event day.
    ///
    /// Partial-hours text is kept only for days marked [`Availability::Partial`].
    pub fn set_availability(
        &mut self,
        driver_id: &str,
        event_id: &str,
        day_id: &str,
        availability: Availability,
        partial_hours: Option<String>,
    ) -> PayrollResult<()> {
        let record = self.day_record_mut(driver_id, event_id, day_id)?;
        record.availability.insert(day_id.to_string(), availability);

        match (availability, partial_hours) {
            (Availability::Partial, Some(text)) => {
                record.partial_hours.insert(day_id.to_string(), text);
            }
            (Availability::Partial, None) => {}
            _ => {
                record.partial_hours.remove(day_id);
            }
        }

        debug!(driver_id, event_id, day_id, ?availability, "Availability set");
        Ok(())
    }

    /// Records whether the driver can help on the Thursday before the event.
    pub fn set_thursday_available(
        &mut self,
        driver_id: &str,
        event_id: &str,
        available: bool,
    ) -> PayrollResult<()> {
        self.record_mut(driver_id, event_id)?.thursday_available = available;
        Ok(())
    }

    /// Flips whether the driver is scheduled for a day, returning the new state.
    pub fn toggle_scheduled(
        &mut self,
        driver_id: &str,
        event_id: &str,
        day_id: &str,
    ) -> PayrollResult<bool> {
        let record = self.day_record_mut(driver_id, event_id, day_id)?;
        let scheduled = !record.is_scheduled_on(day_id);
        record.scheduled.insert(day_id.to_string(), scheduled);

        info!(driver_id, event_id, day_id, scheduled, "Schedule changed");
        Ok(scheduled)
    }

    /// Sets or clears one field of a driver's clock entry for a day.
    ///
    /// Blank values clear the field. Negative fuel amounts and amounts above
    /// [`MAX_DAILY_FUEL`] are rejected.
    pub fn update_time_entry(
        &mut self,
        driver_id: &str,
        event_id: &str,
        day_id: &str,
        field: TimeEntryField,
        value: Option<String>,
    ) -> PayrollResult<TimeEntry> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        if field == TimeEntryField::Fuel {
            if let Some(fuel) = value.as_deref() {
                if let Err(e) = validate_fuel(fuel) {
                    warn!(driver_id, event_id, day_id, error = %e, "Rejected time entry");
                    return Err(e);
                }
            }
        }

        let record = self.day_record_mut(driver_id, event_id, day_id)?;
        let entry = record.hours.entry(day_id.to_string()).or_default();
        entry.set(field, value);

        debug!(driver_id, event_id, day_id, field = field.as_str(), "Time entry updated");
        Ok(entry.clone())
    }

    /// Stores the payout check number for a driver's event.
    pub fn set_check_number(
        &mut self,
        driver_id: &str,
        event_id: &str,
        check_number: impl Into<String>,
    ) -> PayrollResult<()> {
        let record = self.record_mut(driver_id, event_id)?;
        record.check_number = check_number.into();
        info!(
            driver_id,
            event_id,
            check_number = %record.check_number,
            "Check number recorded"
        );
        Ok(())
    }

    /// Marks a driver's event payout as paid or unpaid.
    pub fn set_paid(&mut self, driver_id: &str, event_id: &str, paid: bool) -> PayrollResult<()> {
        self.record_mut(driver_id, event_id)?.paid = paid;
        info!(driver_id, event_id, paid, "Payout status changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewDriver;
    use crate::roster::test_support::sample_roster;

    #[test]
    fn test_partial_hours_follow_availability() {
        let (mut roster, event_id, days, drivers) = sample_roster();
        let record = |r: &Roster| {
            r.driver(&drivers[1])
                .unwrap()
                .record(&event_id)
                .unwrap()
                .clone()
        };

        assert_eq!(record(&roster).partial_hours[&days[0]], "8:30 AM - 5:00 PM");

        roster
            .set_availability(&drivers[1], &event_id, &days[0], Availability::AllDay, None)
            .unwrap();
        assert_eq!(record(&roster).availability[&days[0]], Availability::AllDay);
        assert!(record(&roster).partial_hours.is_empty());
    }

    #[test]
    fn test_availability_for_unknown_day() {
        let (mut roster, event_id, _, drivers) = sample_roster();
        let result = roster.set_availability(
            &drivers[0],
            &event_id,
            "d-elsewhere",
            Availability::AllDay,
            None,
        );
        assert!(matches!(result, Err(PayrollError::DayNotFound { .. })));
    }

    #[test]
    fn test_unlinked_driver_is_rejected() {
        let (mut roster, event_id, days, _) = sample_roster();
        let outsider = roster
            .add_driver(NewDriver::named("Outsider"), None, None)
            .unwrap();

        assert!(matches!(
            roster.toggle_scheduled(&outsider.id, &event_id, &days[0]),
            Err(PayrollError::DriverNotInEvent { .. })
        ));
    }

    #[test]
    fn test_toggle_scheduled_round_trips() {
        let (mut roster, event_id, days, drivers) = sample_roster();

        assert!(roster.toggle_scheduled(&drivers[2], &event_id, &days[1]).unwrap());
        assert!(roster.driver(&drivers[2]).unwrap().is_scheduled_on(&event_id, &days[1]));
        assert!(!roster.toggle_scheduled(&drivers[2], &event_id, &days[1]).unwrap());
        assert!(!roster.driver(&drivers[2]).unwrap().is_scheduled_for(&event_id));
    }

    #[test]
    fn test_update_time_entry_sets_and_clears() {
        let (mut roster, event_id, days, drivers) = sample_roster();

        let entry = roster
            .update_time_entry(
                &drivers[2],
                &event_id,
                &days[1],
                TimeEntryField::TimeIn1,
                Some(" 9:00 ".to_string()),
            )
            .unwrap();
        assert_eq!(entry.time_in_1.as_deref(), Some("9:00"));

        let entry = roster
            .update_time_entry(
                &drivers[2],
                &event_id,
                &days[1],
                TimeEntryField::TimeIn1,
                Some("   ".to_string()),
            )
            .unwrap();
        assert!(entry.time_in_1.is_none());
    }

    #[test]
    fn test_negative_fuel_rejected() {
        let (mut roster, event_id, days, drivers) = sample_roster();
        let before = roster.clone();

        let result = roster.update_time_entry(
            &drivers[0],
            &event_id,
            &days[0],
            TimeEntryField::Fuel,
            Some("-5".to_string()),
        );
        assert!(matches!(result, Err(PayrollError::InvalidTimeEntry { .. })));
        assert_eq!(roster, before);

        let result = roster.update_time_entry(
            &drivers[0],
            &event_id,
            &days[0],
            TimeEntryField::Fuel,
            Some("-1e1".to_string()),
        );
        assert!(matches!(result, Err(PayrollError::InvalidTimeEntry { .. })));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_oversized_fuel_rejected() {
        let (mut roster, event_id, days, drivers) = sample_roster();
        let before = roster.clone();

        for value in [Decimal::MAX.to_string(), "10000.01".to_string(), "1e5".to_string()] {
            let result = roster.update_time_entry(
                &drivers[0],
                &event_id,
                &days[0],
                TimeEntryField::Fuel,
                Some(value),
            );
            assert!(matches!(
                result,
                Err(PayrollError::InvalidTimeEntry { ref field, .. }) if field == "fuel"
            ));
        }
        assert_eq!(roster, before);

        let entry = roster
            .update_time_entry(
                &drivers[0],
                &event_id,
                &days[0],
                TimeEntryField::Fuel,
                Some("10000".to_string()),
            )
            .unwrap();
        assert_eq!(entry.fuel.as_deref(), Some("10000"));
    }

    #[test]
    fn test_time_entry_for_unknown_day() {
        let (mut roster, event_id, _, drivers) = sample_roster();
        let before = roster.clone();

        let result = roster.update_time_entry(
            &drivers[0],
            &event_id,
            "d-missing",
            TimeEntryField::TimeOut1,
            Some("17:00".to_string()),
        );
        assert!(matches!(result, Err(PayrollError::DayNotFound { .. })));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_payout_tracking() {
        let (mut roster, event_id, _, drivers) = sample_roster();

        roster.set_check_number(&drivers[0], &event_id, "1401").unwrap();
        roster.set_paid(&drivers[0], &event_id, true).unwrap();
        roster.set_thursday_available(&drivers[0], &event_id, true).unwrap();

        let record = roster.driver(&drivers[0]).unwrap().record(&event_id).unwrap();
        assert_eq!(record.check_number, "1401");
        assert!(record.paid);
        assert!(record.thursday_available);

        assert!(matches!(
            roster.set_paid(&drivers[0], "evt-nope", true),
            Err(PayrollError::EventNotFound { .. })
        ));
    }
}
