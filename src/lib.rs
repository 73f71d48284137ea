//! Payroll engine for seasonal flower-delivery drivers
//!
//! This crate manages holiday delivery events, the drivers who sign up for
//! them, their per-day availability and time entries, and computes hours,
//! fuel reimbursement and pay with cent-exact decimal arithmetic. Reports
//! (dashboard, payroll summary, schedule, pay statements, signup preview) and
//! an HTTP API are built on top of the in-memory [`roster::Roster`].

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod roster;
