//! Driver configuration parsed from environment variables.
//!
//! Every setting can be supplied through an environment variable prefixed
//! with `APACHE_LOG_` and overridden by the matching command-line flag.

use std::env;
use std::str::FromStr;

use apache_log_regex::Preset;

use crate::error::CliError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Info` when not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes every rejected line.
    Trace,
    /// Debug-level information such as the compiled pattern.
    Debug,
    /// Standard informational messages.
    #[default]
    Info,
    /// Warnings, e.g. skipped lines.
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

const LOG_LEVEL_VAR: &str = "APACHE_LOG_LOG_LEVEL";
const FORMAT_VAR: &str = "APACHE_LOG_FORMAT";
const PRESET_VAR: &str = "APACHE_LOG_PRESET";

/// Configuration for a driver run.
///
/// # Environment Variables
///
/// - `APACHE_LOG_LOG_LEVEL`: Sets the log level (trace, debug, info, warn,
///   error)
/// - `APACHE_LOG_FORMAT`: Explicit log format; takes precedence over the
///   preset
/// - `APACHE_LOG_PRESET`: Named format (common, combined, vhost-common)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// Explicit log format string.
    pub format: Option<String>,
    /// Named format used when `format` is unset.
    pub preset: Preset,
    /// Abort on the first line that does not match.
    pub strict: bool,
    /// Name fields descriptively instead of by directive.
    pub human_names: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Falls back to defaults for missing values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if an environment variable contains
    /// an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let preset = match lookup(PRESET_VAR) {
            Some(val) => val
                .parse::<Preset>()
                .map_err(|e| CliError::InvalidConfig(e.to_string()))?,
            None => Preset::default(),
        };

        let format = lookup(FORMAT_VAR).filter(|val| !val.trim().is_empty());

        Ok(Self {
            log_level,
            format,
            preset,
            strict: false,
            human_names: false,
        })
    }

    /// Apply command-line overrides on top of environment-based values.
    #[must_use]
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        format: Option<String>,
        preset: Option<Preset>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }

        if let Some(preset) = preset {
            self.preset = preset;
            self.format = None;
        }

        if let Some(format) = format {
            self.format = Some(format);
        }

        self
    }

    /// Enable strict parsing.
    #[must_use]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable descriptive field names.
    #[must_use]
    pub fn with_human_names(mut self, human_names: bool) -> Self {
        self.human_names = human_names;
        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// The format string to compile: the explicit format, else the preset's.
    #[must_use]
    pub fn format_string(&self) -> &str {
        self.format
            .as_deref()
            .unwrap_or_else(|| self.preset.format())
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn log_level_parses_valid_values() {
        assert_eq!("trace".parse::<LogLevel>().ok(), Some(LogLevel::Trace));
        assert_eq!("debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("info".parse::<LogLevel>().ok(), Some(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!("ERROR".parse::<LogLevel>().ok(), Some(LogLevel::Error));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result.unwrap_err().to_string().contains("unknown log level"));
    }

    #[test]
    fn defaults_to_combined_preset() {
        let config = CliConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.format_string(), Preset::Combined.format());
    }

    #[test]
    fn reads_environment_values() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("APACHE_LOG_LOG_LEVEL", "debug"),
            ("APACHE_LOG_PRESET", "common"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.preset, Preset::Common);
        assert_eq!(config.format_string(), Preset::Common.format());
    }

    #[test]
    fn explicit_format_beats_preset() {
        let config = CliConfig::from_lookup(lookup_from(&[
            ("APACHE_LOG_PRESET", "common"),
            ("APACHE_LOG_FORMAT", "%h %U"),
        ]))
        .unwrap();
        assert_eq!(config.format_string(), "%h %U");
    }

    #[test]
    fn blank_format_is_ignored() {
        let config =
            CliConfig::from_lookup(lookup_from(&[("APACHE_LOG_FORMAT", "  ")])).unwrap();
        assert_eq!(config.format, None);
    }

    #[test]
    fn rejects_unknown_preset() {
        let err = CliConfig::from_lookup(lookup_from(&[("APACHE_LOG_PRESET", "nginx")]))
            .unwrap_err();
        assert!(err.to_string().contains("unknown log format preset"));
    }

    #[test]
    fn cli_preset_overrides_environment_format() {
        let config = CliConfig::from_lookup(lookup_from(&[("APACHE_LOG_FORMAT", "%h")]))
            .unwrap()
            .apply_overrides(Some(LogLevel::Error), None, Some(Preset::VhostCommon));
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.format_string(), Preset::VhostCommon.format());
    }

    #[test]
    fn cli_format_overrides_everything() {
        let config = CliConfig::default().apply_overrides(
            None,
            Some("%U".to_owned()),
            Some(Preset::Common),
        );
        assert_eq!(config.format_string(), "%U");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn builders_set_flags() {
        let config = CliConfig::default()
            .with_strict(true)
            .with_human_names(true)
            .with_log_level(LogLevel::Trace);
        assert!(config.strict);
        assert!(config.human_names);
        assert_eq!(config.log_level, LogLevel::Trace);
    }
}
