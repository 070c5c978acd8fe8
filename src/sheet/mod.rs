//! Log Sheet
//!
//! The ordered list of logs being measured, owned by the caller and edited
//! through an explicit API. Volume functions only ever read it.
//!
//! # Invariants
//! - A sheet always holds at least one row. Removing the last row is a no-op.
//! - Rows have no identity beyond their position.

mod entry;

pub use entry::{LogEntry, LogField};

use crate::error::{GhanError, Result};
use crate::units::Unit;
use crate::volume::{total_volume, VolumeResult};
use log::debug;
use serde::{Deserialize, Serialize};

/// Ordered, never-empty collection of logs.
///
/// Serialized as a plain JSON array of entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<LogEntry>", into = "Vec<LogEntry>")]
pub struct LogSheet {
    rows: Vec<LogEntry>,
}

impl LogSheet {
    /// Create a sheet with one blank row
    pub fn new() -> Self {
        Self {
            rows: vec![LogEntry::default()],
        }
    }

    /// Build a sheet from existing entries.
    ///
    /// An empty list gives a sheet with one blank row.
    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        if entries.is_empty() {
            return Self::new();
        }
        Self { rows: entries }
    }

    /// All rows in order
    pub fn rows(&self) -> &[LogEntry] {
        &self.rows
    }

    /// Number of rows (always at least 1)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at `index`
    pub fn row(&self, index: usize) -> Result<&LogEntry> {
        self.rows.get(index).ok_or(GhanError::RowOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut LogEntry> {
        let len = self.rows.len();
        self.rows
            .get_mut(index)
            .ok_or(GhanError::RowOutOfRange { index, len })
    }

    /// Append a blank row and return its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(LogEntry::default());
        let index = self.rows.len() - 1;
        debug!("Added log row {}", index);
        index
    }

    /// Remove the row at `index`.
    ///
    /// Returns `Ok(None)` without touching the sheet when it has only one
    /// row, so the sheet never becomes empty.
    pub fn remove_row(&mut self, index: usize) -> Result<Option<LogEntry>> {
        if index >= self.rows.len() {
            return Err(GhanError::RowOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        if self.rows.len() == 1 {
            debug!("Ignoring removal of the only log row");
            return Ok(None);
        }

        debug!("Removed log row {}", index);
        Ok(Some(self.rows.remove(index)))
    }

    /// Replace the whole row at `index`, returning the previous entry.
    pub fn replace_row(&mut self, index: usize, entry: LogEntry) -> Result<LogEntry> {
        let row = self.row_mut(index)?;
        Ok(std::mem::replace(row, entry))
    }

    /// Set one field of the row at `index` from form text.
    ///
    /// Unit fields are read leniently, so an unknown tag stores
    /// [`Unit::Unrecognized`].
    pub fn set_field(&mut self, index: usize, field: LogField, value: &str) -> Result<()> {
        let row = self.row_mut(index)?;
        match field {
            LogField::Length => row.length = value.to_string(),
            LogField::Circumference => row.circumference = value.to_string(),
            LogField::LengthUnit => row.length_unit = Unit::from_tag(value),
            LogField::CircumferenceUnit => row.circumference_unit = Unit::from_tag(value),
        }
        debug!("Set {} of log row {} to {:?}", field, index, value);
        Ok(())
    }

    /// Back to a single blank row
    pub fn reset(&mut self) {
        self.rows.clear();
        self.rows.push(LogEntry::default());
        debug!("Reset log sheet");
    }

    /// Volume of every row, in row order
    pub fn row_volumes(&self) -> Vec<VolumeResult> {
        self.rows.iter().map(LogEntry::volume).collect()
    }

    /// Grand total in ghan-foot, as text with 2 decimals
    pub fn total(&self) -> String {
        total_volume(&self.rows)
    }
}

impl Default for LogSheet {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<LogEntry>> for LogSheet {
    fn from(entries: Vec<LogEntry>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<LogSheet> for Vec<LogEntry> {
    fn from(sheet: LogSheet) -> Self {
        sheet.rows
    }
}

// ============================================================================
// Tests
// ============================================================================
