//! Public signup form preview.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::select_hourly_rate;
use crate::error::PayrollResult;
use crate::models::{DriverRole, Event};
use crate::roster::Roster;

/// One day offered on the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupDay {
    /// Event day id.
    pub day_id: String,
    /// Display label of the day.
    pub label: String,
    /// Nominal start time.
    pub start_time: String,
    /// Nominal end time.
    pub end_time: String,
}

/// What a prospective driver sees on the signup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupPreview {
    /// Event id.
    pub event_id: String,
    /// Shareable link to the form.
    pub link: String,
    /// Form heading.
    pub title: String,
    /// Introduction paragraph.
    pub intro: String,
    /// Advertised hourly rate for drivers.
    pub hourly_rate: Decimal,
    /// Days to give availability for.
    pub days: Vec<SignupDay>,
    /// Driver information packet link.
    pub info_packet_url: Option<String>,
    /// Liability waiver link.
    pub liability_waiver_url: Option<String>,
}

/// Builds the URL slug for an event's signup form, e.g. `mother-s-day-2026`.
///
/// The holiday is lower-cased and every character outside `a-z` becomes `-`.
///
/// # Examples
///
/// ```
/// use driver_payroll::reports::signup_slug;
///
/// assert_eq!(signup_slug("Valentine's Day", 2026), "valentine-s-day-2026");
/// ```
pub fn signup_slug(holiday: &str, year: i32) -> String {
    let holiday: String = holiday
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() { c } else { '-' })
        .collect();
    format!("{}-{}", holiday, year)
}

fn signup_link(base_url: &str, event: &Event) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        signup_slug(&event.holiday, event.year)
    )
}

/// Builds the signup form preview for an event.
pub fn signup_preview(
    roster: &Roster,
    event_id: &str,
    base_url: &str,
) -> PayrollResult<SignupPreview> {
    let event = roster.event(event_id)?;

    Ok(SignupPreview {
        event_id: event.id.clone(),
        link: signup_link(base_url, event),
        title: format!("{} Flower Delivery Sign-up", event.holiday),
        intro: event.signup_intro.clone(),
        hourly_rate: select_hourly_rate(DriverRole::Driver, Some(event)),
        days: event
            .days
            .iter()
            .map(|d| SignupDay {
                day_id: d.id.clone(),
                label: d.label.clone(),
                start_time: d.start_time.clone(),
                end_time: d.end_time.clone(),
            })
            .collect(),
        info_packet_url: event.info_packet_url.clone(),
        liability_waiver_url: event.liability_waiver_url.clone(),
    })
}
