//! # Error Types
//!
//! Structured error types for bend_core. Every failure the engine can signal
//! is one of these variants, serializable so a front-end can show the exact
//! field and value that was rejected.
//!
//! Note that a fill that exceeds its limit is *not* an error: it is a normal
//! result with `compliant = false`.
//!
//! ## Example
//!
//! ```rust
//! use bend_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_in: f64) -> CalcResult<()> {
//!     if height_in <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "height_in",
//!             height_in.to_string(),
//!             "Height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bend_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for engine operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A bend angle outside the open interval (0°, 180°)
    #[error("Invalid angle for '{field}': {value_deg}° - must be strictly between 0° and 180°")]
    InvalidAngle { field: String, value_deg: f64 },

    /// A key that is not present in one of the reference tables
    #[error("Unknown {table} key: '{key}'")]
    UnknownLookupKey { table: String, key: String },

    /// An input value is invalid (non-positive length, count too small, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Engine settings failed validation
    #[error("Invalid settings: {reason}")]
    InvalidSettings { reason: String },

    /// File I/O error (settings files only; the engine persists nothing)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidAngle error
    pub fn invalid_angle(field: impl Into<String>, value_deg: f64) -> Self {
        CalcError::InvalidAngle {
            field: field.into(),
            value_deg,
        }
    }

    /// Create an UnknownLookupKey error
    pub fn unknown_key(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::UnknownLookupKey {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(reason: impl Into<String>) -> Self {
        CalcError::InvalidSettings {
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry).
    ///
    /// Only file access can change between attempts; table lookups and
    /// arithmetic fail the same way every time.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidAngle { .. } => "INVALID_ANGLE",
            CalcError::UnknownLookupKey { .. } => "UNKNOWN_LOOKUP_KEY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}
