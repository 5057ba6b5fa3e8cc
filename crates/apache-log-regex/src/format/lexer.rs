//! Format normalisation and token splitting.

/// Marker opening and closing a quoted format token: a backslash then `"`.
const QUOTE_MARKER: &str = "\\\"";

/// One whitespace-delimited unit of a format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    /// The directive with any surrounding quote markers removed.
    pub directive: &'a str,
    /// Whether the token was wrapped in escaped quotes.
    pub quoted: bool,
}

/// Remove one trailing line terminator (`\r\n`, `\n` or `\r`).
pub(crate) fn chomp(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .or_else(|| text.strip_suffix('\r'))
        .unwrap_or(text)
}

/// Normalise a format string: drop the line terminator, trim surrounding
/// whitespace and collapse runs of spaces and tabs into a single space.
///
/// # Examples
/// ```
/// use apache_log_regex::normalize_format;
/// assert_eq!(normalize_format("  %h \t %l\t%u\n"), "%h %l %u");
/// ```
#[must_use]
pub fn normalize_format(format: &str) -> String {
    let trimmed = chomp(format).trim();
    let mut normalized = String::with_capacity(trimmed.len());
    let mut in_gap = false;
    for ch in trimmed.chars() {
        if ch == ' ' || ch == '\t' {
            if !in_gap {
                normalized.push(' ');
                in_gap = true;
            }
        } else {
            normalized.push(ch);
            in_gap = false;
        }
    }
    normalized
}

/// Split a normalised format into tokens, stripping quote markers.
pub(crate) fn lex_format(normalized: &str) -> Vec<Token<'_>> {
    normalized
        .split(' ')
        .filter(|element| !element.is_empty())
        .map(lex_token)
        .collect()
}

fn lex_token(element: &str) -> Token<'_> {
    element.strip_prefix(QUOTE_MARKER).map_or(
        Token {
            directive: element,
            quoted: false,
        },
        |rest| Token {
            directive: rest.strip_suffix(QUOTE_MARKER).unwrap_or(rest),
            quoted: true,
        },
    )
}
