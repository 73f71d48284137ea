//! Configuration loading for the driver payroll engine.
//!
//! This module loads organization settings and a seed dataset of events and
//! drivers from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use driver_payroll::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Loaded settings for: {}", config.settings().organization);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DocumentFormat, DocumentTemplate, DriversFile, Settings};
