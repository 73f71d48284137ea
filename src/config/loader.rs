//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading organization
//! settings and a seed roster from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Driver, Event};
use crate::roster::Roster;

use super::types::{DriversFile, Settings};

/// Loads settings and seed data from a configuration directory.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── settings.yaml     # Organization settings
/// ├── drivers.yaml      # Drivers and their event records
/// └── events/
///     └── 2026-02-valentines-day.yaml   # One event per file
/// ```
///
/// Event files are loaded in file name order, which becomes the event
/// display order.
///
/// # Example
///
/// ```no_run
/// use driver_payroll::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/sample")?;
/// println!("Loaded {} events", loader.roster().events().len());
/// # Ok::<(), driver_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: Settings,
    roster: Roster,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if:
    /// - Any required file is missing, or the events directory has no YAML files
    /// - Any file contains invalid YAML
    /// - The seed data is inconsistent (duplicate ids, links to unknown
    ///   events or days, more dispatchers than allowed)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<Settings>(&path.join("settings.yaml"))?;
        let drivers = Self::load_yaml::<DriversFile>(&path.join("drivers.yaml"))?.drivers;
        let events = Self::load_events(&path.join("events"))?;

        Self::check_references(&events, &drivers)?;
        let roster = Roster::with_max_dispatchers(events, drivers, settings.max_dispatchers)?;

        info!(
            path = %path.display(),
            events = roster.events().len(),
            drivers = roster.drivers().len(),
            "Configuration loaded"
        );

        Ok(Self { settings, roster })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all event files from the events directory, sorted by file name.
    fn load_events(events_dir: &Path) -> PayrollResult<Vec<Event>> {
        let events_dir_str = events_dir.display().to_string();

        let entries = fs::read_dir(events_dir).map_err(|_| PayrollError::ConfigNotFound {
            path: events_dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| PayrollError::ConfigNotFound {
                path: events_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(PayrollError::ConfigNotFound {
                path: format!("{} (no event files found)", events_dir_str),
            });
        }

        paths
            .iter()
            .map(|p| {
                debug!(path = %p.display(), "Loading event file");
                Self::load_yaml::<Event>(p)
            })
            .collect()
    }

    /// Checks that ids are unique and every driver record points at a real
    /// event and real days.
    fn check_references(events: &[Event], drivers: &[Driver]) -> PayrollResult<()> {
        let mut event_ids = HashSet::new();
        for event in events {
            if !event_ids.insert(event.id.as_str()) {
                return Err(PayrollError::InvalidEvent {
                    field: "id".to_string(),
                    message: format!("duplicate event id '{}'", event.id),
                });
            }
        }

        let mut driver_ids = HashSet::new();
        for driver in drivers {
            if !driver_ids.insert(driver.id.as_str()) {
                return Err(PayrollError::InvalidDriver {
                    field: "id".to_string(),
                    message: format!("duplicate driver id '{}'", driver.id),
                });
            }

            for (event_id, record) in &driver.events {
                let event = events.iter().find(|e| &e.id == event_id).ok_or_else(|| {
                    PayrollError::InvalidDriver {
                        field: "events".to_string(),
                        message: format!(
                            "driver '{}' is linked to unknown event '{}'",
                            driver.id, event_id
                        ),
                    }
                })?;

                let unknown_day = record
                    .availability
                    .keys()
                    .chain(record.scheduled.keys())
                    .chain(record.hours.keys())
                    .find(|day_id| !event.has_day(day_id));
                if let Some(day_id) = unknown_day {
                    return Err(PayrollError::DayNotFound {
                        event_id: event_id.clone(),
                        day_id: day_id.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns the organization settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the seeded roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Consumes the loader, returning the seeded roster.
    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Consumes the loader, returning both settings and roster.
    pub fn into_parts(self) -> (Settings, Roster) {
        (self.settings, self.roster)
    }
}
