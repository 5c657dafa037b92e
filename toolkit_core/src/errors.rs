//! # Error Types
//!
//! Structured error types for toolkit_core. Every fallible operation in the
//! crate returns a [`ToolkitResult`], so callers can match on the variant or
//! on the stable [`ToolkitError::error_code`] string.
//!
//! ## Example
//!
//! ```rust
//! use toolkit_core::errors::{ToolkitError, ToolkitResult};
//!
//! fn validate_size(size: usize) -> ToolkitResult<()> {
//!     if size == 0 {
//!         return Err(ToolkitError::invalid_argument(
//!             "size",
//!             size.to_string(),
//!             "Chunk size must be a positive integer",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_size(0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for toolkit_core operations
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Structured error type for utility and calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ToolkitError {
    /// An argument is outside the accepted domain (e.g. a non-positive chunk size)
    #[error("Invalid argument '{field}': {value} - {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    /// Division where the divisor equals zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Text could not be parsed into the requested value
    #[error("Parse error: '{input}' is not a valid {expected}")]
    ParseError { input: String, expected: String },
}

impl ToolkitError {
    /// Create an InvalidArgument error
    pub fn invalid_argument(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ToolkitError::InvalidArgument {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(input: impl Into<String>, expected: impl Into<String>) -> Self {
        ToolkitError::ParseError {
            input: input.into(),
            expected: expected.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ToolkitError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            ToolkitError::DivisionByZero => "DIVISION_BY_ZERO",
            ToolkitError::ParseError { .. } => "PARSE_ERROR",
        }
    }
}
