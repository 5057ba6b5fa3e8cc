//! Field naming strategies applied once per format token at compile time.
//!
//! The strategy only decides the key under which a capture is stored; it
//! never influences how the token is matched.

/// Choose the field name recorded for a format directive.
///
/// Any `Fn(&str) -> String` closure is a namer, so ad-hoc renaming needs no
/// dedicated type.
///
/// # Examples
/// ```
/// use apache_log_regex::LogParser;
///
/// let parser = LogParser::with_namer("%h %>s", &|directive: &str| {
///     directive.trim_start_matches('%').to_owned()
/// })
/// .expect("format compiles");
/// assert_eq!(parser.field_names(), ["h", ">s"]);
/// ```
pub trait FieldNamer {
    /// Return the field name for a quote-stripped directive such as `%h` or
    /// `%{Referer}i`.
    fn field_name(&self, directive: &str) -> String;
}

impl<F> FieldNamer for F
where
    F: Fn(&str) -> String,
{
    fn field_name(&self, directive: &str) -> String {
        self(directive)
    }
}

/// Keep directives as field names, e.g. `%h` stays `%h`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl FieldNamer for Identity {
    fn field_name(&self, directive: &str) -> String {
        directive.to_owned()
    }
}

/// Rename well-known Apache directives to descriptive field names.
///
/// Directives without a known name are kept verbatim.
///
/// # Examples
/// ```
/// use apache_log_regex::{FieldNamer, HumanReadable};
/// assert_eq!(HumanReadable.field_name("%h"), "host");
/// assert_eq!(HumanReadable.field_name("%{User-Agent}i"), "user_agent");
/// assert_eq!(HumanReadable.field_name("%{X-Trace}i"), "%{X-Trace}i");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HumanReadable;

impl HumanReadable {
    /// Look up the descriptive name for `directive`, if one is known.
    #[must_use]
    pub fn lookup(directive: &str) -> Option<&'static str> {
        let name = match directive {
            "%a" => "remote_ip",
            "%A" => "local_ip",
            "%B" | "%b" => "bytes_sent",
            "%D" => "duration_us",
            "%f" => "filename",
            "%h" => "host",
            "%H" => "protocol",
            "%I" => "bytes_received",
            "%k" => "keepalive_requests",
            "%l" => "logname",
            "%L" => "log_id",
            "%m" => "method",
            "%O" => "bytes_out",
            "%p" => "port",
            "%P" => "pid",
            "%q" => "query",
            "%r" => "request",
            "%R" => "handler",
            "%s" => "original_status",
            "%>s" => "status",
            "%t" => "time",
            "%T" => "duration_s",
            "%u" => "user",
            "%U" => "url_path",
            "%v" => "server_name",
            "%V" => "canonical_server_name",
            "%X" => "connection_status",
            "%{Referer}i" => "referer",
            "%{User-Agent}i" => "user_agent",
            "%{Host}i" => "host_header",
            "%{Cookie}i" => "cookie",
            "%{X-Forwarded-For}i" => "forwarded_for",
            _ => return None,
        };
        Some(name)
    }
}

impl FieldNamer for HumanReadable {
    fn field_name(&self, directive: &str) -> String {
        Self::lookup(directive).map_or_else(|| directive.to_owned(), str::to_owned)
    }
}
