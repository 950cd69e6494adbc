//! Error types for sketch operations

use std::fmt;

/// Errors that can occur during sketch operations
#[derive(Debug, Clone, PartialEq)]
pub enum SketchError {
    /// Invalid parameter provided to sketch constructor or operation
    InvalidParameter {
        /// Parameter name
        param: String,
        /// Invalid value provided
        value: String,
        /// Constraint that was violated
        constraint: String,
    },

    /// Value that cannot be inserted or deleted
    InvalidValue {
        /// The offending value
        value: f64,
        /// Why it was rejected
        reason: String,
    },

    /// Quantile rank outside the closed interval [0, 1]
    InvalidQuantile {
        /// The offending rank
        q: f64,
    },

    /// Quantile queried on a sketch holding no values
    EmptySketch,

    /// Attempted to merge incompatible sketches
    IncompatibleSketches {
        /// Reason for incompatibility
        reason: String,
    },

    /// Error during deserialization
    DeserializationError(String),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::InvalidParameter {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}': value '{}' {}",
                    param, value, constraint
                )
            }
            SketchError::InvalidValue { value, reason } => {
                write!(f, "Invalid value {}: {}", value, reason)
            }
            SketchError::InvalidQuantile { q } => {
                write!(f, "Invalid quantile {}: must be in [0, 1]", q)
            }
            SketchError::EmptySketch => write!(f, "Cannot query quantile of an empty sketch"),
            SketchError::IncompatibleSketches { reason } => {
                write!(f, "Incompatible sketches: {}", reason)
            }
            SketchError::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
        }
    }
}

impl std::error::Error for SketchError {}

/// Result type alias for sketch operations
pub type Result<T> = std::result::Result<T, SketchError>;
