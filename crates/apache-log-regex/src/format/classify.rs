//! Token classification and the regex fragment emitted for each class.

/// Header names whose quoted values may carry backslash-escaped quotes.
const ESCAPE_TOLERANT_HEADERS: &[&str] = &["Referer", "User-Agent"];

/// The request-line directive.
const REQUEST_LINE: &str = "%r";

/// The URL-path directive.
const URL_PATH: &str = "%U";

/// How a format token is matched within a log line.
///
/// # Examples
/// ```
/// use apache_log_regex::TokenClass;
/// assert_eq!(TokenClass::Time.pattern(), r"(\[[^\]]+\])");
/// assert_eq!(TokenClass::Plain.pattern(), r"(\S*)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Quoted request line, referrer or user agent; escaped quotes allowed.
    EscapedQuoted,
    /// Any other quoted field; the body may not contain a quote.
    Quoted,
    /// A percent directive ending in `t`, logged inside square brackets.
    Time,
    /// The URL path, matched lazily.
    UrlPath,
    /// Everything else: a run of non-whitespace characters.
    Plain,
}

impl TokenClass {
    /// Classify a quote-stripped directive.
    ///
    /// # Examples
    /// ```
    /// use apache_log_regex::TokenClass;
    /// assert_eq!(TokenClass::classify("%r", true), TokenClass::EscapedQuoted);
    /// assert_eq!(TokenClass::classify("%{Foo}i", true), TokenClass::Quoted);
    /// assert_eq!(TokenClass::classify("%{%d/%b}t", false), TokenClass::Time);
    /// assert_eq!(TokenClass::classify("%U", false), TokenClass::UrlPath);
    /// assert_eq!(TokenClass::classify("%>s", false), TokenClass::Plain);
    /// ```
    #[must_use]
    pub fn classify(directive: &str, quoted: bool) -> Self {
        if quoted {
            if directive == REQUEST_LINE || names_escape_tolerant_header(directive) {
                Self::EscapedQuoted
            } else {
                Self::Quoted
            }
        } else if is_time_directive(directive) {
            Self::Time
        } else if directive == URL_PATH {
            Self::UrlPath
        } else {
            Self::Plain
        }
    }

    /// Return the regex fragment for this class.
    ///
    /// Every fragment holds exactly one capture group.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::EscapedQuoted => r#""([^"\\]*(?:\\.[^"\\]*)*)""#,
            Self::Quoted => r#""([^"]*)""#,
            Self::Time => r"(\[[^\]]+\])",
            Self::UrlPath => r"(.+?)",
            Self::Plain => r"(\S*)",
        }
    }
}

fn names_escape_tolerant_header(directive: &str) -> bool {
    ESCAPE_TOLERANT_HEADERS
        .iter()
        .any(|header| directive.contains(header))
}

fn is_time_directive(directive: &str) -> bool {
    directive.starts_with('%') && directive.ends_with('t')
}
