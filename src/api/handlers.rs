//! HTTP request handlers for the driver payroll API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_entry_totals, resolve_hourly_rate};
use crate::error::PayrollError;
use crate::reports;

use super::request::{CalculationRequest, DriverSearchQuery, TimeEntryUpdateRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, RoleResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/events", get(list_events_handler))
        .route("/templates", get(list_templates_handler))
        .route("/events/:event_id", delete(delete_event_handler))
        .route("/events/:event_id/drivers", get(event_drivers_handler))
        .route("/events/:event_id/dashboard", get(dashboard_handler))
        .route("/events/:event_id/payroll", get(payroll_handler))
        .route("/events/:event_id/schedule", get(schedule_handler))
        .route("/events/:event_id/statements", get(statements_handler))
        .route("/events/:event_id/signup", get(signup_handler))
        .route("/drivers/:driver_id/role", post(toggle_role_handler))
        .route(
            "/drivers/:driver_id/events/:event_id/hours/:day_id",
            put(update_hours_handler),
        )
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: PayrollError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON body rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") || body_text.contains("unknown variant") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate.
///
/// Computes totals for the posted time entries without touching the roster.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let rate = resolve_hourly_rate(request.role, request.event.as_ref());
    let totals = compute_entry_totals(request.hours.values(), rate.rate);

    info!(
        correlation_id = %correlation_id,
        days = request.hours.len(),
        rate = %rate.rate,
        total_pay = %totals.total_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );
    json_response(StatusCode::OK, CalculationResponse::new(totals, rate))
}

/// Handler for GET /events.
async fn list_events_handler(State(state): State<AppState>) -> Response {
    let roster = state.roster().read().await;
    json_response(StatusCode::OK, roster.events())
}

/// Handler for GET /templates.
async fn list_templates_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, &state.settings().templates)
}

/// Handler for DELETE /events/:event_id.
async fn delete_event_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, event_id = %event_id, "Deleting event");

    let mut roster = state.roster().write().await;
    match roster.delete_event(&event_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /events/:event_id/drivers, with optional `?search=`.
async fn event_drivers_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
    Query(query): Query<DriverSearchQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let roster = state.roster().read().await;
    if let Err(err) = roster.event(&event_id) {
        return error_response(correlation_id, err);
    }

    let drivers = match query.search.as_deref() {
        Some(term) => roster.search_drivers(&event_id, term),
        None => roster.event_drivers(&event_id),
    };
    json_response(StatusCode::OK, drivers)
}

/// Runs a read-only report against the roster and serializes the result.
async fn report<T, F>(state: &AppState, event_id: &str, name: &str, build: F) -> Response
where
    T: Serialize,
    F: FnOnce(&crate::roster::Roster) -> Result<T, PayrollError>,
{
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        event_id = %event_id,
        report = name,
        "Building report"
    );

    let roster = state.roster().read().await;
    match build(&roster) {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /events/:event_id/dashboard.
async fn dashboard_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Response {
    report(&state, &event_id, "dashboard", |r| {
        reports::dashboard(r, &event_id)
    })
    .await
}

/// Handler for GET /events/:event_id/payroll.
async fn payroll_handler(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    report(&state, &event_id, "payroll", |r| {
        reports::payroll_summary(r, &event_id)
    })
    .await
}

/// Handler for GET /events/:event_id/schedule.
async fn schedule_handler(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    report(&state, &event_id, "schedule", |r| {
        reports::schedule_sheet(r, &event_id)
    })
    .await
}

/// Handler for GET /events/:event_id/statements.
async fn statements_handler(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> Response {
    report(&state, &event_id, "statements", |r| {
        reports::pay_statements(r, &event_id)
    })
    .await
}

/// Handler for GET /events/:event_id/signup.
async fn signup_handler(State(state): State<AppState>, Path(event_id): Path<String>) -> Response {
    let base_url = state.settings().signup_base_url.clone();
    report(&state, &event_id, "signup", |r| {
        reports::signup_preview(r, &event_id, &base_url)
    })
    .await
}

/// Handler for POST /drivers/:driver_id/role.
///
/// Toggles between driver and dispatcher, subject to the dispatcher cap.
async fn toggle_role_handler(
    State(state): State<AppState>,
    Path(driver_id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, driver_id = %driver_id, "Toggling driver role");

    let mut roster = state.roster().write().await;
    match roster.toggle_role(&driver_id) {
        Ok(role) => json_response(
            StatusCode::OK,
            RoleResponse {
                driver_id,
                role,
                dispatcher_count: roster.dispatcher_count(),
                max_dispatchers: roster.max_dispatchers(),
            },
        ),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /drivers/:driver_id/events/:event_id/hours/:day_id.
///
/// Sets or clears one field of the driver's time entry for the day and
/// returns the updated entry.
async fn update_hours_handler(
    State(state): State<AppState>,
    Path((driver_id, event_id, day_id)): Path<(String, String, String)>,
    payload: Result<Json<TimeEntryUpdateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        driver_id = %driver_id,
        event_id = %event_id,
        day_id = %day_id,
        "Updating time entry"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let mut roster = state.roster().write().await;
    match roster.update_time_entry(&driver_id, &event_id, &day_id, request.field, request.value) {
        Ok(entry) => json_response(StatusCode::OK, entry),
        Err(err) => error_response(correlation_id, err),
    }
}
