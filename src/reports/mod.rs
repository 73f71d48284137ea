//! Read-only reports over a [`Roster`](crate::roster::Roster).
//!
//! Each report is a plain serializable struct computed from a roster
//! snapshot: the event dashboard, the payroll summary, the per-day schedule
//! sheet, individual pay statements and the public signup form preview.

mod dashboard;
mod payroll;
mod schedule;
mod signup;

pub use dashboard::{DayCoverage, Dashboard, dashboard};
pub use payroll::{
    PayStatement, PayrollRow, PayrollSummary, PayrollTotals, StatementLine, pay_statements,
    payroll_summary,
};
pub use schedule::{ScheduleDay, ScheduleEntry, ScheduleSheet, schedule_sheet};
pub use signup::{SignupDay, SignupPreview, signup_preview, signup_slug};
