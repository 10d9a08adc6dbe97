//! Error types for the tinyc driver.
//!
//! Lexing itself never fails; every error here comes from the outside world:
//! reading the source, writing the token listing, or loading configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the tinyc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The source file could not be read or the output file could not be written.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// File the operation was performed on.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Progress output could not be written.
    ///
    /// Not converted from `std::io::Error` implicitly; file errors go through
    /// [`DriverError::io`] so they keep their path.
    #[error("failed to write progress output: {0}")]
    Console(#[source] std::io::Error),

    /// A token was written after the sink was closed.
    #[error("token sink for {} is already closed", path.display())]
    SinkClosed {
        /// Output the sink was writing to.
        path: PathBuf,
    },

    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The logging subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

impl DriverError {
    /// Wraps an IO error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DriverError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
