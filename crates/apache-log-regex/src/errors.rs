//! Error types surfaced by format compilation and strict line parsing.

use thiserror::Error;

/// Errors raised while compiling a log format into a line matcher.
///
/// # Examples
/// ```
/// use apache_log_regex::FormatError;
/// let err = FormatError::CaptureMismatch { fields: 3, groups: 2 };
/// assert_eq!(
///     err.to_string(),
///     "format declares 3 fields but the compiled pattern has 2 capture groups"
/// );
/// ```
#[derive(Debug, Error)]
pub enum FormatError {
    /// The assembled pattern was rejected by the regex engine.
    #[error(transparent)]
    Regex(#[from] regex::Error),
    /// The compiled pattern does not yield exactly one capture group per field.
    #[error("format declares {fields} fields but the compiled pattern has {groups} capture groups")]
    CaptureMismatch {
        /// Number of field names extracted from the format.
        fields: usize,
        /// Number of capture groups in the compiled pattern, excluding group 0.
        groups: usize,
    },
}

/// A line did not match the compiled format.
///
/// Only [`LogParser::parse_strict`](crate::LogParser::parse_strict) returns
/// this; [`LogParser::parse`](crate::LogParser::parse) reports the same
/// condition as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid format `{format}` for line `{line}`")]
pub struct ParseError {
    /// The normalised format the parser was built from.
    pub format: String,
    /// The offending line, after the trailing line terminator was removed.
    pub line: String,
}

impl ParseError {
    pub(crate) fn new(format: &str, line: &str) -> Self {
        Self {
            format: format.to_owned(),
            line: line.to_owned(),
        }
    }
}
