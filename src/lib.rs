//! Ghanfoot - Timber Log Volume Calculator
//!
//! Computes the volume of cylindrical logs from a length and a circumference,
//! each measured in its own unit, and totals a sheet of logs in ghan-foot.
//!
//! # Architecture
//!
//! - `units`: unit tags and conversion to meters / centimeters
//! - `volume`: per-log volume and the sheet total (pure functions)
//! - `sheet`: the caller-owned list of log rows
//! - `cli`: command-line front end
//!
//! Malformed measurements never produce an error: unreadable text reads as
//! zero and unknown unit tags convert as identity.

pub mod cli;
pub mod error;
pub mod sheet;
pub mod units;
pub mod volume;

pub use error::{GhanError, Result};
pub use sheet::{LogEntry, LogField, LogSheet};
pub use units::{to_centimeters, to_meters, MeasureInput, Unit};
pub use volume::{compute_detailed, compute_formatted, total_volume, VolumeResult};
