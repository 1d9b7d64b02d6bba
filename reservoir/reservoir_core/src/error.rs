//! Error types for the Reservoir pool.
//!
//! Errors are organized by the operation that can raise them. Pool
//! construction and configuration loading fail with [`ConfigError`];
//! acquiring a resource fails with [`AcquireError`]. Releasing and closing
//! never fail at their public boundary, so they have no error type: cleanup
//! failures are reported to the pool's observer instead.
//!
//! The root error type, `Error`, wraps the non-generic errors for callers
//! that want a single type at the top level.

use thiserror::Error;

/// Root error type for Reservoir.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid pool configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors, e.g. while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Errors raised while building or validating a pool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The pool capacity must be at least one
    #[error("Invalid capacity {0}: a pool must buffer at least one resource")]
    InvalidCapacity(usize),

    /// The configuration document could not be parsed
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

/// Errors returned by `acquire`.
///
/// `E` is the error type of the pool's factory. Factory failures are carried
/// untouched in [`AcquireError::Creation`]; the pool neither retries them nor
/// rewrites their message.
#[derive(Debug, Error)]
pub enum AcquireError<E> {
    /// The pool has been closed
    #[error("Pool has been closed")]
    Closed,

    /// The factory failed to create a resource
    #[error(transparent)]
    Creation(E),
}

impl<E> AcquireError<E> {
    /// Whether this error reports a closed pool.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Extract the factory error, if this is a creation failure.
    pub fn into_creation(self) -> Option<E> {
        match self {
            Self::Creation(err) => Some(err),
            Self::Closed => None,
        }
    }
}

/// Result type used throughout Reservoir.
pub type Result<T> = std::result::Result<T, Error>;
