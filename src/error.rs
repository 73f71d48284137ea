//! Error types for the driver payroll engine.
//!
//! The payroll calculator itself never fails; these errors belong to the
//! configuration loader and the roster layer that guards event and driver
//! invariants.

use thiserror::Error;

/// The main error type for the driver payroll engine.
///
/// Every rejected roster operation returns one of these variants and leaves
/// the roster untouched.
///
/// # Example
///
/// ```
/// use driver_payroll::error::PayrollError;
///
/// let error = PayrollError::EventNotFound {
///     event_id: "evt-9".to_string(),
/// };
/// assert_eq!(error.to_string(), "Event not found: evt-9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No event exists with the given id.
    #[error("Event not found: {event_id}")]
    EventNotFound {
        /// The unknown event id.
        event_id: String,
    },

    /// The event has no day with the given id.
    #[error("Day '{day_id}' not found in event '{event_id}'")]
    DayNotFound {
        /// The event that was searched.
        event_id: String,
        /// The unknown day id.
        day_id: String,
    },

    /// No driver exists with the given id.
    #[error("Driver not found: {driver_id}")]
    DriverNotFound {
        /// The unknown driver id.
        driver_id: String,
    },

    /// The driver exists but has not joined the event.
    #[error("Driver '{driver_id}' is not linked to event '{event_id}'")]
    DriverNotInEvent {
        /// The driver id.
        driver_id: String,
        /// The event id.
        event_id: String,
    },

    /// The driver has already joined the event.
    #[error("Driver '{driver_id}' is already linked to event '{event_id}'")]
    DriverAlreadyInEvent {
        /// The driver id.
        driver_id: String,
        /// The event id.
        event_id: String,
    },

    /// The last remaining event cannot be deleted.
    #[error("Cannot delete event '{event_id}': at least one event must remain")]
    LastEventDeletion {
        /// The event whose deletion was rejected.
        event_id: String,
    },

    /// Promoting another dispatcher would exceed the system-wide cap.
    #[error("Cannot promote driver '{driver_id}': dispatcher limit of {max} reached")]
    DispatcherCapReached {
        /// The driver whose promotion was rejected.
        driver_id: String,
        /// The configured dispatcher cap.
        max: usize,
    },

    /// An event field was invalid.
    #[error("Invalid event field '{field}': {message}")]
    InvalidEvent {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A driver field was invalid.
    #[error("Invalid driver field '{field}': {message}")]
    InvalidDriver {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A time entry field was invalid.
    #[error("Invalid time entry field '{field}': {message}")]
    InvalidTimeEntry {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
