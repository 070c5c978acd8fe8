//! Log Entry
//!
//! One row of the sheet: a log's length and circumference as typed, each with
//! its own unit.

use crate::error::GhanError;
use crate::units::Unit;
use crate::volume::{compute_detailed, compute_formatted, VolumeResult};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single log as entered on the form.
///
/// `length` and `circumference` hold raw text and may be empty or not a
/// number; they are only read when a volume is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    #[serde(default, deserialize_with = "text_or_number")]
    pub length: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub circumference: String,
    #[serde(default = "default_length_unit")]
    pub length_unit: Unit,
    #[serde(default = "default_circumference_unit")]
    pub circumference_unit: Unit,
}

fn default_length_unit() -> Unit {
    Unit::Meter
}

fn default_circumference_unit() -> Unit {
    Unit::Centimeter
}

/// Hand-written sheets may give measurements as JSON numbers. `null` and any
/// other shape read as a blank field.
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(f64),
        Null,
        Other(IgnoredAny),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Number(number) => number.to_string(),
        TextOrNumber::Null | TextOrNumber::Other(_) => String::new(),
    })
}

impl LogEntry {
    /// Create an entry from measurements and units
    pub fn new(
        length: impl Into<String>,
        circumference: impl Into<String>,
        length_unit: Unit,
        circumference_unit: Unit,
    ) -> Self {
        Self {
            length: length.into(),
            circumference: circumference.into(),
            length_unit,
            circumference_unit,
        }
    }

    /// Whether both measurements have been filled in
    pub fn is_complete(&self) -> bool {
        !self.length.is_empty() && !self.circumference.is_empty()
    }

    /// Volume of this log in cubic meters and ghan-foot
    pub fn volume(&self) -> VolumeResult {
        compute_detailed(
            self.length.as_str(),
            self.circumference.as_str(),
            self.length_unit,
            self.circumference_unit,
        )
    }

    /// Volume of this log in cubic meters, as text with 4 decimals
    pub fn formatted_volume(&self) -> String {
        compute_formatted(
            self.length.as_str(),
            self.circumference.as_str(),
            self.length_unit,
            self.circumference_unit,
        )
    }
}

impl Default for LogEntry {
    fn default() -> Self {
        Self::new("", "", default_length_unit(), default_circumference_unit())
    }
}

// ============================================================================
// LogField
// ============================================================================

/// Editable field of a [`LogEntry`], addressed by its form name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogField {
    Length,
    Circumference,
    LengthUnit,
    CircumferenceUnit,
}

impl LogField {
    /// Form field name
    pub fn as_str(&self) -> &'static str {
        match self {
            LogField::Length => "length",
            LogField::Circumference => "circumference",
            LogField::LengthUnit => "lengthUnit",
            LogField::CircumferenceUnit => "circumferenceUnit",
        }
    }
}

impl fmt::Display for LogField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogField {
    type Err = GhanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "length" => Ok(LogField::Length),
            "circumference" => Ok(LogField::Circumference),
            "lengthUnit" | "length_unit" => Ok(LogField::LengthUnit),
            "circumferenceUnit" | "circumference_unit" => Ok(LogField::CircumferenceUnit),
            other => Err(GhanError::UnknownField {
                name: other.to_string(),
            }),
        }
    }
}
