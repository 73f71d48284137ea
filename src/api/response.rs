//! Response types for the driver payroll API.
//!
//! This module defines the success payloads that are not plain reports, the
//! error response structures, and the mapping from [`PayrollError`] to HTTP
//! status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{DriverEventTotals, RateLookup};
use crate::error::PayrollError;
use crate::models::DriverRole;

/// Response body for the `/calculate` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResponse {
    /// Hours worked, rounded to two places.
    pub total_hours: Decimal,
    /// Fuel reimbursement.
    pub total_fuel: Decimal,
    /// Total owed.
    pub total_pay: Decimal,
    /// The rate applied and where it came from.
    pub rate: RateLookup,
}

impl CalculationResponse {
    /// Combines computed totals with the rate used.
    pub fn new(totals: DriverEventTotals, rate: RateLookup) -> Self {
        Self {
            total_hours: totals.total_hours,
            total_fuel: totals.total_fuel,
            total_pay: totals.total_pay,
            rate,
        }
    }
}

/// Response body after a role toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleResponse {
    /// Driver id.
    pub driver_id: String,
    /// The driver's new role.
    pub role: DriverRole,
    /// Dispatchers after the change.
    pub dispatcher_count: usize,
    /// The dispatcher cap.
    pub max_dispatchers: usize,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<PayrollError> for ApiErrorResponse {
    fn from(error: PayrollError) -> Self {
        let message = error.to_string();
        let (status, error) = match error {
            PayrollError::ConfigNotFound { .. } | PayrollError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
            PayrollError::EventNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("EVENT_NOT_FOUND", message),
            ),
            PayrollError::DayNotFound { .. } => {
                (StatusCode::NOT_FOUND, ApiError::new("DAY_NOT_FOUND", message))
            }
            PayrollError::DriverNotFound { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::new("DRIVER_NOT_FOUND", message),
            ),
            PayrollError::DriverNotInEvent { .. } => (
                StatusCode::NOT_FOUND,
                ApiError::with_details(
                    "DRIVER_NOT_IN_EVENT",
                    message,
                    "Link the driver to the event before recording event data",
                ),
            ),
            PayrollError::DriverAlreadyInEvent { .. } => (
                StatusCode::CONFLICT,
                ApiError::new("DRIVER_ALREADY_IN_EVENT", message),
            ),
            PayrollError::LastEventDeletion { .. } => (
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "LAST_EVENT",
                    message,
                    "Create another event before deleting this one",
                ),
            ),
            PayrollError::DispatcherCapReached { .. } => (
                StatusCode::CONFLICT,
                ApiError::with_details(
                    "DISPATCHER_LIMIT",
                    message,
                    "Demote an existing dispatcher first",
                ),
            ),
            PayrollError::InvalidEvent { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_EVENT", message),
            ),
            PayrollError::InvalidDriver { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_DRIVER", message),
            ),
            PayrollError::InvalidTimeEntry { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_TIME_ENTRY", message),
            ),
        };

        ApiErrorResponse { status, error }
    }
}
