//! Error types for the Accrue library.
//!
//! Every failure the engine can report is one of four recoverable kinds.
//! None of them are fatal to the hosting process, and all of them are raised
//! by validation before any arithmetic runs.

use rust_decimal::Decimal;
use thiserror::Error;

/// A specialized Result type for Accrue operations.
pub type AccrueResult<T> = Result<T, AccrueError>;

/// The error type for Accrue operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccrueError {
    /// A required input was absent (or explicitly `null`).
    #[error("{field} is required")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// An input could not be coerced to the expected type.
    #[error("Invalid parameter types: {field} {reason}")]
    TypeError {
        /// Name of the offending field.
        field: &'static str,
        /// What the field should have been.
        reason: String,
    },

    /// An input was numerically valid but outside its domain bound.
    #[error("{field} must be between {min} and {max} (got {value})")]
    RangeError {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: Decimal,
        /// Inclusive lower bound.
        min: Decimal,
        /// Inclusive upper bound.
        max: Decimal,
    },

    /// Compounding frequency was not monthly, quarterly or annual.
    #[error("Unsupported compounding frequency '{value}': expected monthly, quarterly or annual")]
    UnsupportedFrequency {
        /// The rejected frequency text.
        value: String,
    },
}

impl AccrueError {
    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates a type error.
    #[must_use]
    pub fn type_error(field: &'static str, reason: impl Into<String>) -> Self {
        Self::TypeError {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a range error.
    #[must_use]
    pub fn range_error(field: &'static str, value: Decimal, min: Decimal, max: Decimal) -> Self {
        Self::RangeError {
            field,
            value,
            min,
            max,
        }
    }

    /// Creates an unsupported frequency error.
    #[must_use]
    pub fn unsupported_frequency(value: impl Into<String>) -> Self {
        Self::UnsupportedFrequency {
            value: value.into(),
        }
    }

    /// Returns the name of the field the error is about.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::TypeError { field, .. }
            | Self::RangeError { field, .. } => *field,
            Self::UnsupportedFrequency { .. } => crate::validation::fields::COMPOUNDING_FREQUENCY,
        }
    }
}
