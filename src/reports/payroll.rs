//! Payroll summary and individual pay statements.
//!
//! Both reports cover only drivers scheduled for at least one day of the
//! event, in registration order.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DriverEventTotals, accumulate, compute_day_totals, compute_driver_event_totals,
    compute_wages, resolve_hourly_rate,
};
use crate::error::PayrollResult;
use crate::models::{CheckPreference, Driver, DriverRole, Event, TimeEntry};
use crate::roster::Roster;

/// One scheduled driver's line on the payroll summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRow {
    /// Driver id.
    pub driver_id: String,
    /// Driver name.
    pub name: String,
    /// Role the driver is paid for.
    pub role: DriverRole,
    /// Applicable hourly rate.
    pub rate: Decimal,
    /// Hours worked, rounded to two places.
    pub hours: Decimal,
    /// Hours at the rate, before fuel.
    pub wages: Decimal,
    /// Fuel reimbursement.
    pub fuel: Decimal,
    /// Total owed.
    pub total_pay: Decimal,
    /// Payout check number, if issued.
    pub check_number: String,
    /// How the check is delivered.
    pub check_preference: CheckPreference,
    /// Whether the payout was handed over.
    pub paid: bool,
}

/// Grand totals across all payroll rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Sum of rounded hours.
    pub hours: Decimal,
    /// Sum of fuel reimbursements.
    pub fuel: Decimal,
    /// Sum of total pay.
    pub total_pay: Decimal,
}

/// The payroll summary for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSummary {
    /// Event id.
    pub event_id: String,
    /// Event display name.
    pub event_name: String,
    /// The date checks are due.
    pub check_date: Option<NaiveDate>,
    /// One row per scheduled driver.
    pub rows: Vec<PayrollRow>,
    /// Grand totals.
    pub totals: PayrollTotals,
}

/// One scheduled day on a pay statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    /// Event day id.
    pub day_id: String,
    /// Display label of the day.
    pub label: String,
    /// Recorded clock data for the day.
    pub entry: TimeEntry,
    /// Hours for the day, rounded to two places.
    pub hours: Decimal,
    /// Fuel for the day.
    pub fuel: Decimal,
    /// Day hours at the rate plus fuel.
    pub pay: Decimal,
}

/// An individual driver's pay statement for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayStatement {
    /// Driver id.
    pub driver_id: String,
    /// Driver name.
    pub name: String,
    /// Role the driver is paid for.
    pub role: DriverRole,
    /// Applicable hourly rate.
    pub rate: Decimal,
    /// Scheduled days in event order.
    pub lines: Vec<StatementLine>,
    /// Hours at the rate, before fuel.
    pub wages: Decimal,
    /// Event totals for the driver.
    pub totals: DriverEventTotals,
}

fn scheduled_with_totals<'a>(
    roster: &'a Roster,
    event: &'a Event,
) -> impl Iterator<Item = (&'a Driver, Decimal, DriverEventTotals)> + 'a {
    roster
        .scheduled_drivers(&event.id)
        .into_iter()
        .map(move |driver| {
            let rate = resolve_hourly_rate(driver.role, Some(event)).rate;
            let totals =
                compute_driver_event_totals(driver.record(&event.id), driver.role, Some(event));
            (driver, rate, totals)
        })
}

/// Builds the payroll summary for an event.
pub fn payroll_summary(roster: &Roster, event_id: &str) -> PayrollResult<PayrollSummary> {
    let event = roster.event(event_id)?;

    let rows: Vec<PayrollRow> = scheduled_with_totals(roster, event)
        .map(|(driver, rate, totals)| {
            let record = driver.record(event_id);
            PayrollRow {
                driver_id: driver.id.clone(),
                name: driver.name.clone(),
                role: driver.role,
                rate,
                hours: totals.total_hours,
                wages: compute_wages(totals.total_hours, rate),
                fuel: totals.total_fuel,
                total_pay: totals.total_pay,
                check_number: record.map(|r| r.check_number.clone()).unwrap_or_default(),
                check_preference: driver.check_preference,
                paid: record.is_some_and(|r| r.paid),
            }
        })
        .collect();

    let totals = rows.iter().fold(
        PayrollTotals {
            hours: Decimal::ZERO,
            fuel: Decimal::ZERO,
            total_pay: Decimal::ZERO,
        },
        |acc, row| PayrollTotals {
            hours: accumulate(acc.hours, row.hours),
            fuel: accumulate(acc.fuel, row.fuel),
            total_pay: accumulate(acc.total_pay, row.total_pay),
        },
    );

    Ok(PayrollSummary {
        event_id: event.id.clone(),
        event_name: event.name.clone(),
        check_date: event.check_date,
        rows,
        totals,
    })
}

/// Builds a pay statement for every scheduled driver of an event.
pub fn pay_statements(roster: &Roster, event_id: &str) -> PayrollResult<Vec<PayStatement>> {
    let event = roster.event(event_id)?;

    let statements = scheduled_with_totals(roster, event)
        .map(|(driver, rate, totals)| {
            let lines = event
                .days
                .iter()
                .filter(|day| driver.is_scheduled_on(event_id, &day.id))
                .map(|day| {
                    let entry = driver
                        .record(event_id)
                        .and_then(|r| r.hours.get(&day.id))
                        .cloned()
                        .unwrap_or_default();
                    let day_totals = compute_day_totals(&entry, rate);
                    StatementLine {
                        day_id: day.id.clone(),
                        label: day.label.clone(),
                        entry,
                        hours: day_totals.hours,
                        fuel: day_totals.fuel,
                        pay: day_totals.pay,
                    }
                })
                .collect();

            PayStatement {
                driver_id: driver.id.clone(),
                name: driver.name.clone(),
                role: driver.role,
                rate,
                lines,
                wages: compute_wages(totals.total_hours, rate),
                totals,
            }
        })
        .collect();

    Ok(statements)
}
