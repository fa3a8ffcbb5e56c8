//! # Driver Error Types

use dynbuf_core::ArrayError;
use thiserror::Error;

/// Errors that stop a script from loading or running.
///
/// Failures of individual array operations are not here: the runner
/// reports them inline and keeps going.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The script's array configuration was rejected.
    #[error(transparent)]
    Array(#[from] ArrayError),

    /// The script is not valid TOML or does not match the schema.
    #[error("invalid script: {0}")]
    Parse(#[from] toml::de::Error),

    /// Reading the script or writing output failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for driver operations.
pub type DriverResult<T> = Result<T, DriverError>;
