//! Shared Error Types
//!
//! Errors raised while validating inbound records, before any store access.
//! These are plain data errors: they carry no HTTP knowledge and are mapped to
//! status codes by the backend error layer.
//!
//! # Usage
//!
//! ```rust
//! use promcare::shared::error::SharedError;
//!
//! let error = SharedError::validation("uhid", "must not be blank");
//! assert!(error.to_string().contains("uhid"));
//! ```
use thiserror::Error;

/// Shared error types raised by record validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A required field is missing or blank, or a token is not recognized
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Presence check for a required text field.
///
/// Whitespace-only values count as missing.
pub fn require(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "is required"));
    }
    Ok(())
}
