//! Driver registration, profile edits and role changes.

use chrono::NaiveDate;
use tracing::{info, warn};

use super::{Roster, new_id};
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    CheckPreference, Driver, DriverEventRecord, DriverRole, DriverUpdate, NewDriver,
};

/// Highest rating a driver can be given.
const MAX_RATING: u8 = 5;

fn invalid(field: &str, message: &str) -> PayrollError {
    PayrollError::InvalidDriver {
        field: field.to_string(),
        message: message.to_string(),
    }
}

/// Checks the profile invariants every stored driver must satisfy.
fn validate_driver(driver: &Driver) -> PayrollResult<()> {
    if driver.name.trim().is_empty() {
        return Err(invalid("name", "must not be empty"));
    }
    if driver.rating > MAX_RATING {
        return Err(invalid("rating", "must be between 0 and 5"));
    }
    if driver.check_preference == CheckPreference::Mail && driver.mailing_address.trim().is_empty()
    {
        return Err(invalid("mailing_address", "is required when the check is mailed"));
    }
    Ok(())
}

impl Roster {
    /// Registers a new driver, optionally signing them up for an event.
    pub fn add_driver(
        &mut self,
        new: NewDriver,
        event_id: Option<&str>,
        signup_date: Option<NaiveDate>,
    ) -> PayrollResult<Driver> {
        if let Some(event_id) = event_id {
            self.event(event_id)?;
        }

        let mut driver = Driver::from_new(new_id("drv"), new);
        driver.name = driver.name.trim().to_string();
        if let Err(e) = validate_driver(&driver) {
            warn!(error = %e, "Rejected new driver");
            return Err(e);
        }

        if let Some(event_id) = event_id {
            driver
                .events
                .insert(event_id.to_string(), DriverEventRecord::new(signup_date));
        }

        info!(
            driver_id = %driver.id,
            name = %driver.name,
            event_id = ?event_id,
            "Driver registered"
        );
        self.drivers.push(driver.clone());
        Ok(driver)
    }

    /// Applies a field-level profile update to a driver.
    pub fn update_driver(
        &mut self,
        driver_id: &str,
        update: DriverUpdate,
    ) -> PayrollResult<Driver> {
        let mut candidate = self.driver(driver_id)?.clone();

        if let Some(name) = update.name {
            candidate.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            candidate.email = email;
        }
        if let Some(phone) = update.phone {
            candidate.phone = phone;
        }
        if let Some(alt_phone) = update.alt_phone {
            candidate.alt_phone = alt_phone;
        }
        if let Some(returning) = update.returning {
            candidate.returning = returning;
        }
        if let Some(has_license) = update.has_license {
            candidate.has_license = has_license;
        }
        if let Some(has_insurance) = update.has_insurance {
            candidate.has_insurance = has_insurance;
        }
        if let Some(preference) = update.check_preference {
            candidate.check_preference = preference;
        }
        if let Some(address) = update.mailing_address {
            candidate.mailing_address = address;
        }
        if let Some(signed) = update.signed_liability {
            candidate.signed_liability = signed;
        }
        if let Some(status) = update.status {
            candidate.status = status;
        }
        if let Some(notes) = update.notes {
            candidate.notes = notes;
        }
        if let Some(rating) = update.rating {
            candidate.rating = rating;
        }
        if update.license_url.is_some() {
            candidate.license_url = update.license_url;
        }
        if update.insurance_url.is_some() {
            candidate.insurance_url = update.insurance_url;
        }
        if update.waiver_url.is_some() {
            candidate.waiver_url = update.waiver_url;
        }

        if let Err(e) = validate_driver(&candidate) {
            warn!(driver_id, error = %e, "Rejected driver update");
            return Err(e);
        }

        let driver = self.driver_mut(driver_id)?;
        *driver = candidate.clone();
        info!(driver_id, "Driver updated");
        Ok(candidate)
    }

    /// Removes a driver and all of their event records.
    pub fn delete_driver(&mut self, driver_id: &str) -> PayrollResult<()> {
        self.driver(driver_id)?;
        self.drivers.retain(|d| d.id != driver_id);
        info!(driver_id, "Driver deleted");
        Ok(())
    }

    /// Signs an existing driver up for another event.
    pub fn link_driver_to_event(
        &mut self,
        driver_id: &str,
        event_id: &str,
        signup_date: Option<NaiveDate>,
    ) -> PayrollResult<()> {
        self.event(event_id)?;
        let driver = self.driver_mut(driver_id)?;
        if driver.in_event(event_id) {
            warn!(driver_id, event_id, "Driver already linked to event");
            return Err(PayrollError::DriverAlreadyInEvent {
                driver_id: driver_id.to_string(),
                event_id: event_id.to_string(),
            });
        }

        driver
            .events
            .insert(event_id.to_string(), DriverEventRecord::new(signup_date));
        info!(driver_id, event_id, "Driver linked to event");
        Ok(())
    }

    /// Switches a driver between driver and dispatcher, returning the new role.
    ///
    /// Promotion fails once the dispatcher cap is reached; demotion always
    /// succeeds.
    pub fn toggle_role(&mut self, driver_id: &str) -> PayrollResult<DriverRole> {
        let current = self.driver(driver_id)?.role;
        let next = current.toggled();

        if next == DriverRole::Dispatcher && self.dispatcher_count() >= self.max_dispatchers {
            warn!(
                driver_id,
                max_dispatchers = self.max_dispatchers,
                "Dispatcher limit reached"
            );
            return Err(PayrollError::DispatcherCapReached {
                driver_id: driver_id.to_string(),
                max: self.max_dispatchers,
            });
        }

        self.driver_mut(driver_id)?.role = next;
        info!(driver_id, role = ?next, "Driver role changed");
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DriverStatus;
    use crate::roster::test_support::sample_roster;

    #[test]
    fn test_add_driver_linked_to_event() {
        let (mut roster, event_id, _, _) = sample_roster();
        let signup = NaiveDate::from_ymd_opt(2026, 2, 1);

        let driver = roster
            .add_driver(
                NewDriver::named("  Marcia Peterson "),
                Some(event_id.as_str()),
                signup,
            )
            .unwrap();

        assert!(driver.id.starts_with("drv-"));
        assert_eq!(driver.name, "Marcia Peterson");
        assert_eq!(driver.role, DriverRole::Driver);
        assert_eq!(driver.record(&event_id).unwrap().signup_date, signup);
        assert_eq!(roster.event_drivers(&event_id).len(), 4);
    }

    #[test]
    fn test_add_driver_without_event() {
        let (mut roster, event_id, _, _) = sample_roster();
        let driver = roster
            .add_driver(NewDriver::named("Walk In"), None, None)
            .unwrap();
        assert!(driver.events.is_empty());
        assert_eq!(roster.drivers().len(), 4);
        assert_eq!(roster.event_drivers(&event_id).len(), 3);
    }

    #[test]
    fn test_add_driver_validation() {
        let (mut roster, event_id, _, _) = sample_roster();
        let before = roster.clone();

        assert!(roster.add_driver(NewDriver::named(""), None, None).is_err());

        let too_good = NewDriver {
            rating: 6,
            ..NewDriver::named("Star")
        };
        assert!(matches!(
            roster.add_driver(too_good, None, None),
            Err(PayrollError::InvalidDriver { ref field, .. }) if field == "rating"
        ));

        let no_address = NewDriver {
            check_preference: CheckPreference::Mail,
            ..NewDriver::named("Mailer")
        };
        assert!(matches!(
            roster.add_driver(no_address, Some(event_id.as_str()), None),
            Err(PayrollError::InvalidDriver { ref field, .. }) if field == "mailing_address"
        ));

        assert!(matches!(
            roster.add_driver(NewDriver::named("Lost"), Some("evt-nope"), None),
            Err(PayrollError::EventNotFound { .. })
        ));

        assert_eq!(roster, before);
    }

    #[test]
    fn test_update_driver() {
        let (mut roster, _, _, drivers) = sample_roster();
        let before = roster.clone();

        let bad = DriverUpdate {
            check_preference: Some(CheckPreference::Mail),
            ..DriverUpdate::default()
        };
        assert!(roster.update_driver(&drivers[0], bad).is_err());
        assert_eq!(roster, before);

        let good = DriverUpdate {
            check_preference: Some(CheckPreference::Mail),
            mailing_address: Some("500 Pine St".to_string()),
            status: Some(DriverStatus::Inactive),
            rating: Some(5),
            ..DriverUpdate::default()
        };
        let updated = roster.update_driver(&drivers[0], good).unwrap();
        assert_eq!(updated.check_preference, CheckPreference::Mail);
        assert_eq!(updated.status, DriverStatus::Inactive);
        assert_eq!(updated.rating, 5);
        assert_eq!(updated.email, "nimsi@example.com");
    }

    #[test]
    fn test_delete_driver() {
        let (mut roster, event_id, _, drivers) = sample_roster();
        roster.delete_driver(&drivers[2]).unwrap();
        assert_eq!(roster.event_drivers(&event_id).len(), 2);
        assert!(matches!(
            roster.delete_driver(&drivers[2]),
            Err(PayrollError::DriverNotFound { .. })
        ));
    }

    #[test]
    fn test_link_rejects_duplicates() {
        let (mut roster, event_id, _, drivers) = sample_roster();
        let before = roster.clone();

        assert!(matches!(
            roster.link_driver_to_event(&drivers[0], &event_id, None),
            Err(PayrollError::DriverAlreadyInEvent { .. })
        ));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_dispatcher_cap() {
        let (mut roster, _, _, drivers) = sample_roster();
        assert_eq!(roster.dispatcher_count(), 1);

        assert_eq!(roster.toggle_role(&drivers[0]).unwrap(), DriverRole::Dispatcher);
        assert_eq!(roster.dispatcher_count(), 2);

        let before = roster.clone();
        assert!(matches!(
            roster.toggle_role(&drivers[2]),
            Err(PayrollError::DispatcherCapReached { max: 2, .. })
        ));
        assert_eq!(roster, before);

        // Demotion frees a slot.
        assert_eq!(roster.toggle_role(&drivers[1]).unwrap(), DriverRole::Driver);
        assert_eq!(roster.toggle_role(&drivers[2]).unwrap(), DriverRole::Dispatcher);
        assert_eq!(roster.dispatcher_count(), 2);
    }

    #[test]
    fn test_custom_dispatcher_cap() {
        let (roster, _, _, drivers) = sample_roster();
        let mut roster = Roster::with_max_dispatchers(
            roster.events().to_vec(),
            roster.drivers().to_vec(),
            1,
        )
        .unwrap();

        assert!(roster.toggle_role(&drivers[0]).is_err());
        assert_eq!(roster.max_dispatchers(), 1);
    }
}
