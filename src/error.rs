//! Error types for the dictionary adapter
//!
//! This module provides the error taxonomy shared by the backing collection
//! and the dictionary view, built with `thiserror`.

use thiserror::Error;

/// The main error type for the dictionary adapter
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required handle was absent
    #[error("Null reference: {name}")]
    NullReference {
        /// Name of the absent handle
        name: String,
    },

    /// An argument was absent or otherwise unusable
    #[error("Invalid argument: {name}: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        name: String,
        /// Why the argument was rejected
        reason: String,
    },

    /// Indexed read of a key that is not present
    #[error("Key not found: {key}")]
    KeyNotFound {
        /// The missing key
        key: String,
    },

    /// The operation is not supported in the current state
    #[error("Unsupported operation: {operation}: {reason}")]
    Unsupported {
        /// Name of the rejected operation
        operation: String,
        /// Why the operation was rejected
        reason: String,
    },

    /// A numeric argument was outside its valid range
    #[error("Argument out of range: {name}: {value}")]
    OutOfRange {
        /// Name of the offending argument
        name: String,
        /// The rejected value
        value: i64,
    },
}

impl Error {
    /// Error for an absent key argument
    pub fn null_key() -> Self {
        Error::InvalidArgument {
            name: "key".to_string(),
            reason: "key must not be null".to_string(),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;
