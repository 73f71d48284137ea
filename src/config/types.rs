//! Configuration types for the payroll engine.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from the YAML files in a configuration directory.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Driver;
use crate::roster::DEFAULT_MAX_DISPATCHERS;

fn default_max_dispatchers() -> usize {
    DEFAULT_MAX_DISPATCHERS
}

/// Organization-wide settings from `settings.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Business name shown on printed reports and the signup form.
    pub organization: String,
    /// Street address for report headers.
    #[serde(default)]
    pub address: String,
    /// Contact phone for report headers.
    #[serde(default)]
    pub phone: String,
    /// Base URL that signup links are built under.
    pub signup_base_url: String,
    /// Maximum number of dispatchers across all drivers.
    #[serde(default = "default_max_dispatchers")]
    pub max_dispatchers: usize,
    /// Printable document templates handed out to drivers.
    #[serde(default)]
    pub templates: Vec<DocumentTemplate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            organization: String::new(),
            address: String::new(),
            phone: String::new(),
            signup_base_url: String::new(),
            max_dispatchers: DEFAULT_MAX_DISPATCHERS,
            templates: Vec::new(),
        }
    }
}

/// File format of a document template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    /// Portable document, printed as-is.
    Pdf,
    /// Word document, edited before printing.
    Docx,
}

/// A printable document kept on file for drivers, such as a delivery log
/// sheet or the liability waiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTemplate {
    /// Template identifier, e.g. `tmpl-1`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// File format.
    pub format: DocumentFormat,
    /// What the document is for.
    #[serde(default)]
    pub description: String,
    /// Date the current version was uploaded.
    pub upload_date: NaiveDate,
}

/// Structure of `drivers.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DriversFile {
    /// Every known driver with their event records.
    #[serde(default)]
    pub drivers: Vec<Driver>,
}
