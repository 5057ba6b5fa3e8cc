//! `apache-log`: turn Apache access logs into JSON lines.
//!
//! Each input line that matches the configured log format is written to
//! stdout as a JSON object keyed by field name. Diagnostics go to stderr.

use std::io::{self, BufWriter};
use std::path::PathBuf;

use apache_log_regex::Preset;
use clap::Parser;
use tracing::info;

use apache_log_cli::config::{CliConfig, LogLevel};
use apache_log_cli::error::CliError;
use apache_log_cli::logging::init_logging;
use apache_log_cli::run::run;

/// Parse Apache access logs into JSON lines.
#[derive(Parser, Debug)]
#[command(name = "apache-log", version, about)]
struct Args {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<LogLevel>,

    /// Apache log format, e.g. '%h %l %u %t \"%r\" %>s %b'.
    #[arg(long, short = 'f')]
    format: Option<String>,

    /// Named log format (common, combined, vhost-common).
    #[arg(long, short = 'p', conflicts_with = "format")]
    preset: Option<Preset>,

    /// Fail on the first line that does not match the format.
    #[arg(long)]
    strict: bool,

    /// Use descriptive field names such as `host` instead of `%h`.
    #[arg(long)]
    human_names: bool,

    /// Log files to read; standard input when omitted.
    files: Vec<PathBuf>,
}

fn main() {
    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            let fallback = CliConfig::default();
            init_logging(&fallback);
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(2);
        }
    };
    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        format = config.format_string(),
        "starting apache-log"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let result = run(&config, &args.files, &mut out);
    drop(out);
    match result {
        Ok(summary) => {
            info!(
                parsed = summary.parsed,
                skipped = summary.skipped,
                "finished"
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            std::process::exit(1);
        }
    }
}

fn build_config(args: &Args) -> Result<CliConfig, CliError> {
    let config = CliConfig::from_env()?;
    Ok(config
        .apply_overrides(args.log_level, args.format.clone(), args.preset)
        .with_strict(args.strict)
        .with_human_names(args.human_names))
}
