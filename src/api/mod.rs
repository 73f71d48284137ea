//! HTTP API module for the driver payroll engine.
//!
//! This module exposes the pay calculator, event reports, and the roster
//! mutations that carry business rules (dispatcher cap, last-event guard,
//! time entry edits) as REST endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DriverSearchQuery, TimeEntryUpdateRequest};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse, RoleResponse};
pub use state::AppState;
