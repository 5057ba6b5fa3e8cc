//! Command-line driver for `apache-log-regex`.
//!
//! Reads access-log lines from files or standard input, parses them with a
//! [`LogParser`](apache_log_regex::LogParser) and writes one JSON object per
//! matching line to standard output. Diagnostics go to standard error.
//!
//! # Configuration
//!
//! Settings come from environment variables and may be overridden on the
//! command line:
//!
//! - `APACHE_LOG_LOG_LEVEL`: log verbosity (trace, debug, info, warn, error)
//! - `APACHE_LOG_FORMAT`: explicit Apache log format string
//! - `APACHE_LOG_PRESET`: named format used when no explicit format is set

pub mod config;
pub mod error;
pub mod logging;
pub mod run;
