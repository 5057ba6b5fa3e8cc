//! Log-format lexing and compilation into a line-matching regex.

mod classify;
mod lexer;

use log::debug;
use regex::Regex;

use crate::errors::FormatError;
use crate::naming::FieldNamer;

pub use classify::TokenClass;
pub(crate) use lexer::chomp;
pub use lexer::normalize_format;

use lexer::lex_format;

/// The artefacts produced by compiling a log format.
#[derive(Debug, Clone)]
pub struct CompiledFormat {
    /// The normalised format string.
    pub format: String,
    /// One field name per format token, in token order, duplicates kept.
    pub names: Vec<String>,
    /// The anchored pattern, one capture group per entry of `names`.
    pub regex: Regex,
}

/// Build the anchored regex source and field names for a normalised format.
fn build_pattern_source<N>(normalized: &str, namer: &N) -> (String, Vec<String>)
where
    N: FieldNamer + ?Sized,
{
    let tokens = lex_format(normalized);
    let mut names = Vec::with_capacity(tokens.len());
    let mut source = String::with_capacity(normalized.len().saturating_mul(4) + 2);
    source.push('^');

    for (index, token) in tokens.into_iter().enumerate() {
        names.push(namer.field_name(token.directive));
        if index > 0 {
            source.push(' ');
        }
        source.push_str(TokenClass::classify(token.directive, token.quoted).pattern());
    }

    source.push('$');
    (source, names)
}

/// Compile `format` into a normalised format, its field names and the regex
/// that matches conforming lines.
///
/// # Errors
/// Returns [`FormatError::Regex`] when the assembled pattern is rejected by
/// the regex engine and [`FormatError::CaptureMismatch`] when it does not
/// carry exactly one capture group per field.
///
/// # Examples
/// ```
/// use apache_log_regex::{Identity, compile_format};
///
/// let compiled = compile_format(r#"%h  %t \"%r\""#, &Identity).expect("format compiles");
/// assert_eq!(compiled.format, r#"%h %t \"%r\""#);
/// assert_eq!(compiled.names, ["%h", "%t", "%r"]);
/// assert_eq!(
///     compiled.regex.as_str(),
///     r#"^(\S*) (\[[^\]]+\]) "([^"\\]*(?:\\.[^"\\]*)*)"$"#
/// );
/// ```
pub fn compile_format<N>(format: &str, namer: &N) -> Result<CompiledFormat, FormatError>
where
    N: FieldNamer + ?Sized,
{
    let normalized = normalize_format(format);
    let (source, names) = build_pattern_source(&normalized, namer);
    let regex = Regex::new(&source)?;

    let groups = regex.captures_len().saturating_sub(1);
    if groups != names.len() {
        return Err(FormatError::CaptureMismatch {
            fields: names.len(),
            groups,
        });
    }

    debug!(
        "compiled log format `{normalized}` into {} fields: {}",
        names.len(),
        regex.as_str()
    );
    Ok(CompiledFormat {
        format: normalized,
        names,
        regex,
    })
}
