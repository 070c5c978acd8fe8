//! Units of Measure
//!
//! The four linear units a log can be measured in, and conversion of a
//! measurement to meters or centimeters. Conversions are total: an
//! unrecognized unit passes the value through unchanged.

mod input;

pub use input::{parse_or_zero, MeasureInput};

use crate::error::GhanError;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Constants
// ============================================================================

/// Centimeters per meter
const CM_PER_METER: f64 = 100.0;

/// Meters per foot
const METERS_PER_FOOT: f64 = 0.3048;

/// Meters per inch
const METERS_PER_INCH: f64 = 0.0254;

/// Centimeters per foot
const CM_PER_FOOT: f64 = 30.48;

/// Centimeters per inch
const CM_PER_INCH: f64 = 2.54;

// ============================================================================
// Unit
// ============================================================================

/// Linear unit tag attached to a length or circumference.
///
/// Serialized as the short tag (`"m"`, `"cm"`, `"ft"`, `"in"`). Unknown tags
/// deserialize to [`Unit::Unrecognized`] rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub enum Unit {
    Meter,
    Centimeter,
    Foot,
    Inch,
    /// Any tag outside the four above; converts as identity.
    Unrecognized,
}

impl Unit {
    /// All recognized units, in the order the length selector lists them.
    pub const ALL: [Unit; 4] = [Unit::Meter, Unit::Centimeter, Unit::Foot, Unit::Inch];

    /// Lenient lookup of a unit tag. Never fails.
    ///
    /// Accepts the short tags and the full names, ignoring case and
    /// surrounding whitespace.
    pub fn from_tag(tag: &str) -> Unit {
        match tag.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" => Unit::Meter,
            "cm" | "centimeter" | "centimeters" | "centimetre" => Unit::Centimeter,
            "ft" | "foot" | "feet" => Unit::Foot,
            "in" | "inch" | "inches" => Unit::Inch,
            _ => Unit::Unrecognized,
        }
    }

    /// Short tag used on the wire and in selectors.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Unit::Meter => "m",
            Unit::Centimeter => "cm",
            Unit::Foot => "ft",
            Unit::Inch => "in",
            Unit::Unrecognized => "?",
        }
    }

    /// Whether this is one of the four supported units.
    pub fn is_recognized(&self) -> bool {
        *self != Unit::Unrecognized
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl FromStr for Unit {
    type Err = GhanError;

    /// Strict lookup: unknown tags are an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Unit::from_tag(s) {
            Unit::Unrecognized => Err(GhanError::UnknownUnit { tag: s.to_string() }),
            unit => Ok(unit),
        }
    }
}

impl<'de> Deserialize<'de> for Unit {
    /// Strings go through [`Unit::from_tag`]; `null` and any other JSON
    /// shape become [`Unit::Unrecognized`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Tag {
            Text(String),
            Other(IgnoredAny),
        }

        Ok(match Tag::deserialize(deserializer)? {
            Tag::Text(tag) => Unit::from_tag(&tag),
            Tag::Other(_) => Unit::Unrecognized,
        })
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.as_tag().to_string()
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Convert `value`, expressed in `unit`, to meters.
///
/// Full precision is kept; nothing is rounded.
pub fn to_meters(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Centimeter => value / CM_PER_METER,
        Unit::Foot => value * METERS_PER_FOOT,
        Unit::Inch => value * METERS_PER_INCH,
        Unit::Meter | Unit::Unrecognized => value,
    }
}

/// Convert a measurement, which may still be raw form text, to centimeters.
///
/// The value is read with [`parse_or_zero`] first, so unreadable text
/// converts to 0.
pub fn to_centimeters(value: impl MeasureInput, unit: Unit) -> f64 {
    let parsed = value.parse_or_zero();
    match unit {
        Unit::Meter => parsed * CM_PER_METER,
        Unit::Foot => parsed * CM_PER_FOOT,
        Unit::Inch => parsed * CM_PER_INCH,
        Unit::Centimeter | Unit::Unrecognized => parsed,
    }
}

// ============================================================================
// Tests
// ============================================================================
