//! The line parser built from a compiled log format.

use log::trace;
use regex::Regex;

use crate::capture::extract_captured_values;
use crate::errors::{FormatError, ParseError};
use crate::format::{CompiledFormat, chomp, compile_format};
use crate::naming::{FieldNamer, Identity};
use crate::preset::Preset;
use crate::record::ParsedRecord;

/// Parse log lines written in one Apache log format.
///
/// The format is compiled once on construction and never changes afterwards,
/// so a parser can be shared freely between threads.
///
/// # Examples
/// ```
/// use apache_log_regex::LogParser;
///
/// let parser = LogParser::new("%U").expect("format compiles");
/// let record = parser.parse("/only/path").expect("line matches");
/// assert_eq!(record.get("%U"), Some("/only/path"));
/// assert!(parser.parse("").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct LogParser {
    format: String,
    names: Vec<String>,
    regex: Regex,
}

impl LogParser {
    /// Compile `format`, naming fields after their directives.
    ///
    /// # Errors
    /// Returns [`FormatError`] when the format cannot be compiled.
    pub fn new(format: &str) -> Result<Self, FormatError> {
        Self::with_namer(format, &Identity)
    }

    /// Compile `format`, naming fields with `namer`.
    ///
    /// The namer is consulted once per token during construction only.
    ///
    /// # Errors
    /// Returns [`FormatError`] when the format cannot be compiled.
    ///
    /// # Examples
    /// ```
    /// use apache_log_regex::{HumanReadable, LogParser};
    ///
    /// let parser = LogParser::with_namer("%h %>s", &HumanReadable).expect("format compiles");
    /// let record = parser.parse("10.0.0.1 200").expect("line matches");
    /// assert_eq!(record.get("host"), Some("10.0.0.1"));
    /// assert_eq!(record.get("status"), Some("200"));
    /// ```
    pub fn with_namer<N>(format: &str, namer: &N) -> Result<Self, FormatError>
    where
        N: FieldNamer + ?Sized,
    {
        let CompiledFormat {
            format,
            names,
            regex,
        } = compile_format(format, namer)?;
        Ok(Self {
            format,
            names,
            regex,
        })
    }

    /// Build a parser for a well-known Apache format.
    ///
    /// # Errors
    /// Returns [`FormatError`] when the format cannot be compiled.
    pub fn from_preset<N>(preset: Preset, namer: &N) -> Result<Self, FormatError>
    where
        N: FieldNamer + ?Sized,
    {
        Self::with_namer(preset.format(), namer)
    }

    /// The normalised format string.
    #[must_use]
    pub fn format(&self) -> &str {
        &self.format
    }

    /// Field names in format order, one per token, duplicates included.
    #[must_use]
    pub fn field_names(&self) -> &[String] {
        &self.names
    }

    /// The compiled line pattern.
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Parse `line`, returning `None` when it does not match the format.
    ///
    /// One trailing line terminator is ignored; other whitespace is
    /// significant. When a field name occurs more than once, the value
    /// captured last is kept.
    #[must_use]
    pub fn parse(&self, line: &str) -> Option<ParsedRecord> {
        let row = chomp(line);
        let Some(values) = extract_captured_values(&self.regex, row) else {
            trace!("line does not match format `{}`: {row}", self.format);
            return None;
        };

        let mut record = ParsedRecord::with_capacity(self.names.len());
        for (name, value) in self.names.iter().zip(values) {
            record.insert(name, value);
        }
        Some(record)
    }

    /// Parse `line`, failing when it does not match the format.
    ///
    /// # Errors
    /// Returns [`ParseError`] carrying the format and the line.
    ///
    /// # Examples
    /// ```
    /// use apache_log_regex::LogParser;
    ///
    /// let parser = LogParser::new("%h %b").expect("format compiles");
    /// let err = parser.parse_strict("foobar").unwrap_err();
    /// assert_eq!(err.to_string(), "invalid format `%h %b` for line `foobar`");
    /// ```
    pub fn parse_strict(&self, line: &str) -> Result<ParsedRecord, ParseError> {
        self.parse(line)
            .ok_or_else(|| ParseError::new(&self.format, chomp(line)))
    }
}
