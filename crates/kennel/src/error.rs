//! Common error types for Kennel components.

use thiserror::Error;

/// Common error type for Kennel operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Engine error
    #[error(transparent)]
    Engine(#[from] kennel_core::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Logging subscriber could not be installed
    #[error("tracing init error: {0}")]
    Tracing(String),
}

/// Result type alias using Kennel Error.
pub type Result<T> = std::result::Result<T, Error>;
