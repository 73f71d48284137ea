//! Raw per-day clock and fuel data.
//!
//! A [`TimeEntry`] holds exactly what was typed into the hours sheet. Nothing
//! here is validated; the calculator decides what each field is worth.

use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Clock-in/clock-out pairs and fuel reimbursement for one driver on one day.
///
/// Up to two shifts are recorded to support split days. Unset fields mean
/// "not yet recorded".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// First-shift clock-in (`HH:MM`).
    #[serde(default)]
    pub time_in_1: Option<String>,
    /// First-shift clock-out (`HH:MM`).
    #[serde(default)]
    pub time_out_1: Option<String>,
    /// Second-shift clock-in (`HH:MM`).
    #[serde(default)]
    pub time_in_2: Option<String>,
    /// Second-shift clock-out (`HH:MM`).
    #[serde(default)]
    pub time_out_2: Option<String>,
    /// Fuel reimbursement as entered. Accepts a number or text on input.
    #[serde(default, deserialize_with = "text_or_number")]
    pub fuel: Option<String>,
}

/// A single editable field of a [`TimeEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeEntryField {
    /// First-shift clock-in.
    #[serde(rename = "time_in_1")]
    TimeIn1,
    /// First-shift clock-out.
    #[serde(rename = "time_out_1")]
    TimeOut1,
    /// Second-shift clock-in.
    #[serde(rename = "time_in_2")]
    TimeIn2,
    /// Second-shift clock-out.
    #[serde(rename = "time_out_2")]
    TimeOut2,
    /// Fuel reimbursement.
    #[serde(rename = "fuel")]
    Fuel,
}

impl TimeEntryField {
    /// The wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeEntryField::TimeIn1 => "time_in_1",
            TimeEntryField::TimeOut1 => "time_out_1",
            TimeEntryField::TimeIn2 => "time_in_2",
            TimeEntryField::TimeOut2 => "time_out_2",
            TimeEntryField::Fuel => "fuel",
        }
    }
}

impl TimeEntry {
    /// Creates a single-shift entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use driver_payroll::models::TimeEntry;
    ///
    /// let entry = TimeEntry::single_shift("07:30", "17:00", "25");
    /// assert_eq!(entry.time_in_1.as_deref(), Some("07:30"));
    /// assert!(entry.time_in_2.is_none());
    /// ```
    pub fn single_shift(time_in: &str, time_out: &str, fuel: &str) -> Self {
        Self {
            time_in_1: Some(time_in.to_string()),
            time_out_1: Some(time_out.to_string()),
            time_in_2: None,
            time_out_2: None,
            fuel: Some(fuel.to_string()),
        }
    }

    /// Creates a split-shift entry.
    pub fn split_shift(first: (&str, &str), second: (&str, &str), fuel: &str) -> Self {
        Self {
            time_in_1: Some(first.0.to_string()),
            time_out_1: Some(first.1.to_string()),
            time_in_2: Some(second.0.to_string()),
            time_out_2: Some(second.1.to_string()),
            fuel: Some(fuel.to_string()),
        }
    }

    /// Returns the raw value of a field.
    pub fn get(&self, field: TimeEntryField) -> Option<&str> {
        match field {
            TimeEntryField::TimeIn1 => self.time_in_1.as_deref(),
            TimeEntryField::TimeOut1 => self.time_out_1.as_deref(),
            TimeEntryField::TimeIn2 => self.time_in_2.as_deref(),
            TimeEntryField::TimeOut2 => self.time_out_2.as_deref(),
            TimeEntryField::Fuel => self.fuel.as_deref(),
        }
    }

    /// Replaces the raw value of a field.
    pub fn set(&mut self, field: TimeEntryField, value: Option<String>) {
        let slot = match field {
            TimeEntryField::TimeIn1 => &mut self.time_in_1,
            TimeEntryField::TimeOut1 => &mut self.time_out_1,
            TimeEntryField::TimeIn2 => &mut self.time_in_2,
            TimeEntryField::TimeOut2 => &mut self.time_out_2,
            TimeEntryField::Fuel => &mut self.fuel,
        };
        *slot = value;
    }
}

/// Accepts text, an integer, a float or null as optional text.
pub(crate) fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a number or a string")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
            Ok(Some(value))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
            Ok(Some(value.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D2>(self, deserializer: D2) -> Result<Self::Value, D2::Error>
        where
            D2: Deserializer<'de>,
        {
            deserializer.deserialize_any(TextVisitor)
        }
    }

    deserializer.deserialize_any(TextVisitor)
}
