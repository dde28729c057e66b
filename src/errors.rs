//! Error types for coordinate construction and comparison
//!
//! Every fallible operation in this crate returns [`CoordinateError`]. Errors
//! are programming or input errors, never transient faults, so nothing here is
//! retried.

use thiserror::Error;

/// Main error type for coordinate functionality
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// A numeric field is NaN, infinite, or outside its domain range
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
        /// Which constraint was violated
        reason: &'static str,
    },

    /// An operation that needs a partner coordinate received none
    #[error("Missing coordinate argument for {operation}")]
    NullArgument {
        /// The operation that was invoked
        operation: &'static str,
    },

    /// A registry cache lock was poisoned by a panicking thread
    #[error("Coordinate registry lock poisoned: {0} cache")]
    RegistryPoisoned(&'static str),
}

/// Extension of the Result type for coordinate operations
pub type Result<T> = std::result::Result<T, CoordinateError>;

/// Builds an [`CoordinateError::InvalidValue`]
pub(crate) fn invalid(field: &'static str, value: f64, reason: &'static str) -> CoordinateError {
    CoordinateError::InvalidValue {
        field,
        value,
        reason,
    }
}

/// Rejects NaN and infinite values for `field`
pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_nan() {
        Err(invalid(field, value, "must not be NaN"))
    } else if value.is_infinite() {
        Err(invalid(field, value, "must be finite"))
    } else {
        Ok(value)
    }
}

/// Unwraps an optional partner coordinate or reports which operation lacked it
pub(crate) fn require<T>(value: Option<T>, operation: &'static str) -> Result<T> {
    value.ok_or(CoordinateError::NullArgument { operation })
}
