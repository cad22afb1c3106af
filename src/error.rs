//! Error types for bibkeywords with fail-open handling.
//!
//! The keyword operations themselves never fail. Errors only come from the
//! ambient layers: reading configuration, decoding entries, writing output.
//! Where a safe default exists we log a warning and continue.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for bibkeywords operations.
#[derive(Error, Debug)]
pub enum KeywordsError {
    /// I/O errors from config files or standard streams.
    #[error("storage error at {path}: {source}")]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration loading errors.
    #[error("config error: {message}")]
    Config { message: String },

    /// Malformed user input (entries, command arguments).
    #[error("invalid input: {message}")]
    Input { message: String },
}

/// A specialized Result type for bibkeywords operations.
pub type Result<T> = std::result::Result<T, KeywordsError>;

impl KeywordsError {
    /// Create a storage error from an I/O error.
    pub fn storage(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Storage {
            path: path.into(),
            source,
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an input error.
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }
}

/// Fail-open error handling: log the error and fall back to a safe value.
pub trait FailOpen<T> {
    /// Handle an error by logging a warning and returning the provided fallback.
    fn fail_open_with(self, context: &str, fallback: T) -> T;
}

impl<T> FailOpen<T> for Result<T> {
    fn fail_open_with(self, context: &str, fallback: T) -> T {
        match self {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!("{}: {} (fail-open: using fallback)", context, err);
                fallback
            }
        }
    }
}

/// Exit codes for the bibkeywords CLI.
pub mod exit_codes {
    /// The command completed.
    pub const SUCCESS: i32 = 0;

    /// The command could not read its input or write its output.
    pub const ERROR: i32 = 1;
}
