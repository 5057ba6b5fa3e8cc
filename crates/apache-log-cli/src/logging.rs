//! Structured logging with environment variable configuration.
//!
//! Logs are written to stderr so that stdout carries only JSON records.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.as_filter_str())
}

/// Initialise the logging subsystem based on configuration.
///
/// Records emitted by `apache-log-regex` through the `log` facade are
/// forwarded to the same subscriber.
///
/// # Note
///
/// If a global subscriber is already set, this function silently ignores
/// the error, so repeated initialisation in tests is harmless.
pub fn init_logging(config: &CliConfig) {
    let filter = filter_from_config(config);

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .finish();

    // The first subscriber wins.
    let _ = subscriber.try_init();
}
