//! Error handling for Ghanfoot
//!
//! The volume functions never fail. Errors only come from addressing rows in a
//! [`LogSheet`](crate::sheet::LogSheet) and from reading sheets in the CLI.

use thiserror::Error;

/// Result type alias for Ghanfoot operations
pub type Result<T> = std::result::Result<T, GhanError>;

/// Main error type for Ghanfoot operations
#[derive(Error, Debug)]
pub enum GhanError {
    // Sheet Errors
    #[error("Row {index} does not exist (sheet has {len} rows)")]
    RowOutOfRange { index: usize, len: usize },

    #[error("Unknown log field: {name}")]
    UnknownField { name: String },

    #[error("Unknown unit: {tag}")]
    UnknownUnit { tag: String },

    // File Errors
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GhanError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            GhanError::RowOutOfRange { .. } => "ROW_OUT_OF_RANGE",
            GhanError::UnknownField { .. } => "UNKNOWN_FIELD",
            GhanError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            GhanError::FileNotFound { .. } => "FILE_NOT_FOUND",
            GhanError::Io(_) => "IO_ERROR",
            GhanError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            GhanError::RowOutOfRange { .. } => vec![
                "Row numbers start at 0",
                "Add a row before editing it",
            ],
            GhanError::UnknownField { .. } => vec![
                "Valid fields: length, circumference, lengthUnit, circumferenceUnit",
            ],
            GhanError::UnknownUnit { .. } => vec!["Supported units: m, cm, ft, in"],
            GhanError::FileNotFound { .. } => vec![
                "Check the file path is correct",
                "Use '-' to read the sheet from stdin",
            ],
            GhanError::Serialization(_) => vec![
                "The sheet must be a JSON array of log entries",
                "Each entry needs length and circumference fields",
            ],
            GhanError::Io(_) => vec![],
        }
    }
}
