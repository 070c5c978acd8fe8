//! Log Volume
//!
//! Volume of a single log under the regional ghan-foot convention, and the
//! total across a sheet of logs.
//!
//! The formula is empirical, not the volume of a cylinder:
//!
//! ```text
//! volume_m3 = (length_m * circumference_cm^2) / 160 / 1000
//! ghan_foot = volume_m3 * 35.315
//! ```
//!
//! All functions here are pure. Blank input gives a zero result and
//! unreadable numbers read as zero, so none of them can fail.

mod format;
mod total;

pub use format::to_fixed;
pub use total::total_volume;

use crate::units::{to_centimeters, to_meters, MeasureInput, Unit};
use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Divisor of the empirical formula
pub const FORMULA_DIVISOR: f64 = 160.0;

/// Scales the formula's raw figure to cubic meters
pub const CUBIC_SCALE_DIVISOR: f64 = 1000.0;

/// Cubic meters to the displayed ghan-foot unit
pub const GHAN_FOOT_FACTOR: f64 = 35.315;

/// Text shown when a log has nothing to compute with
const BLANK_VOLUME: &str = "0.00";

/// Decimal places of the per-log formatted volume
const LOG_VOLUME_DIGITS: usize = 4;

/// Decimal places used for on-screen volumes and totals
const DISPLAY_DIGITS: usize = 2;

// ============================================================================
// VolumeResult
// ============================================================================

/// Volume of one log, in cubic meters and in the scaled ghan-foot unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VolumeResult {
    /// Volume in cubic meters
    pub individual: f64,
    /// `individual` scaled by [`GHAN_FOOT_FACTOR`]
    #[serde(rename = "final")]
    pub final_volume: f64,
}

impl VolumeResult {
    /// Result for a log with a blank length or circumference
    pub const ZERO: VolumeResult = VolumeResult {
        individual: 0.0,
        final_volume: 0.0,
    };

    fn from_cubic_meters(individual: f64) -> Self {
        Self {
            individual,
            final_volume: individual * GHAN_FOOT_FACTOR,
        }
    }

    /// Cubic meters to 2 decimals, as shown beside each row.
    pub fn display_cubic_meters(&self) -> String {
        display_or_blank(self.individual)
    }

    /// Ghan-foot volume to 2 decimals.
    pub fn display_final(&self) -> String {
        display_or_blank(self.final_volume)
    }
}

fn display_or_blank(value: f64) -> String {
    if value == 0.0 || value.is_nan() {
        BLANK_VOLUME.to_string()
    } else {
        to_fixed(value, DISPLAY_DIGITS)
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// Cubic-meter volume of a log, or `None` when either measurement is blank.
fn cubic_meters(
    length: impl MeasureInput,
    circumference: impl MeasureInput,
    length_unit: Unit,
    circumference_unit: Unit,
) -> Option<f64> {
    if length.is_blank() || circumference.is_blank() {
        return None;
    }

    let length_m = to_meters(length.parse_or_zero(), length_unit);
    let circumference_cm = to_centimeters(circumference.parse_or_zero(), circumference_unit);

    let raw = (length_m * circumference_cm * circumference_cm) / FORMULA_DIVISOR;
    Some(raw / CUBIC_SCALE_DIVISOR)
}

/// Volume of one log in cubic meters, as text with 4 decimals.
///
/// A blank length or circumference gives `"0.00"`. Negative or huge values
/// go through the formula unchanged.
///
/// # Example
/// ```
/// use ghanfoot::units::Unit;
/// use ghanfoot::volume::compute_formatted;
///
/// let volume = compute_formatted("1", "100", Unit::Meter, Unit::Centimeter);
/// assert_eq!(volume, "0.0625");
/// ```
pub fn compute_formatted(
    length: impl MeasureInput,
    circumference: impl MeasureInput,
    length_unit: Unit,
    circumference_unit: Unit,
) -> String {
    match cubic_meters(length, circumference, length_unit, circumference_unit) {
        Some(volume) => to_fixed(volume, LOG_VOLUME_DIGITS),
        None => BLANK_VOLUME.to_string(),
    }
}

/// Volume of one log in cubic meters and ghan-foot.
///
/// A blank length or circumference gives [`VolumeResult::ZERO`].
pub fn compute_detailed(
    length: impl MeasureInput,
    circumference: impl MeasureInput,
    length_unit: Unit,
    circumference_unit: Unit,
) -> VolumeResult {
    cubic_meters(length, circumference, length_unit, circumference_unit)
        .map(VolumeResult::from_cubic_meters)
        .unwrap_or(VolumeResult::ZERO)
}

// ============================================================================
// Tests
// ============================================================================
