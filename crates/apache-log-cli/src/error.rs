//! Error types for the command-line driver.

use apache_log_regex::{FormatError, ParseError};
use thiserror::Error;

/// Errors that stop a run of the command-line driver.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configured log format could not be compiled.
    #[error("invalid log format: {0}")]
    Format(#[from] FormatError),

    /// A line did not match the format while running in strict mode.
    #[error("{input}:{line_number}: {source}")]
    Parse {
        /// Name of the input the line was read from.
        input: String,
        /// One-based line number within the input.
        line_number: usize,
        /// The underlying parse failure.
        #[source]
        source: ParseError,
    },

    /// Writing a record as JSON failed.
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
