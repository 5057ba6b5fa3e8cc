//! Feed input lines through a [`LogParser`] and emit JSON records.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use apache_log_regex::{FieldNamer, HumanReadable, Identity, LogParser};
use tracing::{debug, info, warn};

use crate::config::CliConfig;
use crate::error::CliError;

/// Name reported for standard input in diagnostics.
const STDIN_NAME: &str = "<stdin>";

/// Line counts for one or more inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines that matched the format and were written out.
    pub parsed: usize,
    /// Lines that did not match and were skipped.
    pub skipped: usize,
}

impl RunSummary {
    fn absorb(&mut self, other: Self) {
        self.parsed += other.parsed;
        self.skipped += other.skipped;
    }
}

/// Compile the parser described by `config`.
///
/// # Errors
///
/// Returns [`CliError::Format`] when the format cannot be compiled.
pub fn build_parser(config: &CliConfig) -> Result<LogParser, CliError> {
    let namer: &dyn FieldNamer = if config.human_names {
        &HumanReadable
    } else {
        &Identity
    };
    let parser = LogParser::with_namer(config.format_string(), namer)?;
    debug!(
        format = parser.format(),
        fields = parser.field_names().len(),
        "compiled log format"
    );
    Ok(parser)
}

/// Parse every line of `input`, writing one JSON object per matching line.
///
/// Non-matching lines are skipped with a warning unless `strict` is set, in
/// which case the first one aborts the run. Bytes that are not valid UTF-8
/// are replaced with U+FFFD before parsing.
///
/// # Errors
///
/// Returns [`CliError::Parse`] for a non-matching line in strict mode, and
/// I/O or JSON errors from reading and writing.
pub fn process<R, W>(
    parser: &LogParser,
    mut input: R,
    input_name: &str,
    strict: bool,
    out: &mut W,
) -> Result<RunSummary, CliError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = RunSummary::default();
    let mut buf = Vec::new();
    let mut line_number = 0;
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_number += 1;
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            debug!(input = input_name, line_number, "replaced invalid UTF-8 in line");
        }
        let record = if strict {
            parser
                .parse_strict(&line)
                .map(Some)
                .map_err(|source| CliError::Parse {
                    input: input_name.to_owned(),
                    line_number,
                    source,
                })?
        } else {
            parser.parse(&line)
        };

        match record {
            Some(record) => {
                serde_json::to_writer(&mut *out, &record)?;
                out.write_all(b"\n")?;
                summary.parsed += 1;
            }
            None => {
                warn!(input = input_name, line_number, "skipping unparseable line");
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

/// Run the driver over `files`, or standard input when `files` is empty.
///
/// # Errors
///
/// Propagates format, parse, I/O and JSON failures.
pub fn run<W: Write>(
    config: &CliConfig,
    files: &[PathBuf],
    out: &mut W,
) -> Result<RunSummary, CliError> {
    let parser = build_parser(config)?;
    let mut summary = RunSummary::default();

    if files.is_empty() {
        let stdin = io::stdin();
        summary.absorb(process(&parser, stdin.lock(), STDIN_NAME, config.strict, out)?);
    } else {
        for path in files {
            let name = path.display().to_string();
            let reader = BufReader::new(File::open(path)?);
            let counts = process(&parser, reader, &name, config.strict, out)?;
            info!(
                input = %name,
                parsed = counts.parsed,
                skipped = counts.skipped,
                "processed input"
            );
            summary.absorb(counts);
        }
    }

    out.flush()?;
    Ok(summary)
}
