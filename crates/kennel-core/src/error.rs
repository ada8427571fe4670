//! Engine error types

use thiserror::Error;

/// Errors raised by engine operations.
///
/// Every variant is produced synchronously while validating arguments or
/// constructing a catalog. A failed call never yields partial results.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A required string argument was blank after trimming
    #[error("{field} must be a non-empty string")]
    EmptyString { field: String },

    /// Argument has the wrong type (e.g. a non-finite number)
    #[error("{field} must be {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },

    /// Weight unit not in the alias table
    #[error("invalid unit: '{0}' (expected one of lbs, kgs)")]
    InvalidUnit(String),

    /// Compatibility key outside {children, otherDogs, cats}
    #[error("invalid compatibility key: '{0}' (expected children, otherDogs or cats)")]
    InvalidCompatibilityKey(String),

    /// A comparison query did not resolve to any breed
    #[error("breed not found: {0}")]
    BreedNotFound(String),

    /// Catalog violates a construction invariant
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Catalog JSON could not be decoded
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;
