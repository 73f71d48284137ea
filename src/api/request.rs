//! Request types for the driver payroll API.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{DriverRole, Event, TimeEntry, TimeEntryField, text_or_number};

/// Request body for the `/calculate` endpoint.
///
/// Computes totals for an ad-hoc set of time entries without touching the
/// roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Role to pay for; defaults to `driver`.
    #[serde(default)]
    pub role: DriverRole,
    /// Event supplying the pay rates. Without it the default rate applies.
    #[serde(default)]
    pub event: Option<Event>,
    /// Time entries keyed by event day id.
    #[serde(default)]
    pub hours: HashMap<String, TimeEntry>,
}

/// Request body for editing one field of a driver's time entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeEntryUpdateRequest {
    /// The field to change.
    pub field: TimeEntryField,
    /// The new value; `null` or blank clears the field. Numbers are accepted.
    #[serde(default, deserialize_with = "text_or_number")]
    pub value: Option<String>,
}

/// Query parameters for the event driver list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DriverSearchQuery {
    /// Case-insensitive match against name or email.
    #[serde(default)]
    pub search: Option<String>,
}
