//! Event dashboard statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{accumulate, compute_driver_event_totals, round_to_cents};
use crate::error::PayrollResult;
use crate::roster::Roster;

/// How well one event day is staffed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCoverage {
    /// Event day id.
    pub day_id: String,
    /// Display label of the day.
    pub label: String,
    /// Drivers scheduled for the day.
    pub scheduled: usize,
    /// Drivers needed per day.
    pub needed: u32,
    /// Scheduled as a percentage of needed, capped at 100.
    pub percent: Decimal,
}

/// Headline numbers for one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Event id.
    pub event_id: String,
    /// Event display name.
    pub event_name: String,
    /// Drivers signed up for the event.
    pub signups: usize,
    /// Signed-up drivers holding the dispatcher role.
    pub dispatchers: usize,
    /// The system-wide dispatcher cap.
    pub max_dispatchers: usize,
    /// Drivers scheduled for at least one day.
    pub scheduled: usize,
    /// Signed-up drivers missing a license or insurance.
    pub missing_documents: usize,
    /// Total pay owed to scheduled drivers.
    pub total_pay: Decimal,
    /// Scheduled drivers already paid.
    pub paid: usize,
    /// Coverage per event day, in display order.
    pub coverage: Vec<DayCoverage>,
}

fn coverage_percent(scheduled: usize, needed: u32) -> Decimal {
    if needed == 0 {
        return Decimal::ONE_HUNDRED;
    }
    let percent = Decimal::from(scheduled as u64) * Decimal::ONE_HUNDRED / Decimal::from(needed);
    round_to_cents(percent.min(Decimal::ONE_HUNDRED))
}

/// Builds the dashboard for an event.
pub fn dashboard(roster: &Roster, event_id: &str) -> PayrollResult<Dashboard> {
    let event = roster.event(event_id)?;
    let drivers = roster.event_drivers(event_id);
    let scheduled: Vec<_> = drivers
        .iter()
        .filter(|d| d.is_scheduled_for(event_id))
        .collect();

    let total_pay = scheduled
        .iter()
        .map(|d| compute_driver_event_totals(d.record(event_id), d.role, Some(event)).total_pay)
        .fold(Decimal::ZERO, accumulate);

    let coverage = event
        .days
        .iter()
        .map(|day| {
            let count = drivers
                .iter()
                .filter(|d| d.is_scheduled_on(event_id, &day.id))
                .count();
            DayCoverage {
                day_id: day.id.clone(),
                label: day.label.clone(),
                scheduled: count,
                needed: event.drivers_needed,
                percent: coverage_percent(count, event.drivers_needed),
            }
        })
        .collect();

    Ok(Dashboard {
        event_id: event.id.clone(),
        event_name: event.name.clone(),
        signups: drivers.len(),
        dispatchers: drivers.iter().filter(|d| d.is_dispatcher()).count(),
        max_dispatchers: roster.max_dispatchers(),
        scheduled: scheduled.len(),
        missing_documents: drivers.iter().filter(|d| d.is_missing_documents()).count(),
        total_pay,
        paid: scheduled
            .iter()
            .filter(|d| d.record(event_id).is_some_and(|r| r.paid))
            .count(),
        coverage,
    })
}
