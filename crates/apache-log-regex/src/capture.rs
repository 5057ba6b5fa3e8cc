//! Positional capture extraction for compiled log formats.

use regex::Regex;

/// Extract the capture groups of `re` for `text`, or `None` when it does not
/// match.
///
/// Group 0 (the whole match) is skipped so the result aligns index for index
/// with the format's field names. Groups that did not participate yield empty
/// strings to keep that alignment.
///
/// # Examples
/// ```
/// # use regex::Regex;
/// # use apache_log_regex::extract_captured_values;
/// let regex = Regex::new(r"^(\S*) (\S*)$")
///     .expect("example ensures fallible call succeeds");
/// let values = extract_captured_values(&regex, "10.0.0.1 -")
///     .expect("example ensures fallible call succeeds");
/// assert_eq!(values, vec!["10.0.0.1", "-"]);
/// assert!(extract_captured_values(&regex, "no-space-here").is_none());
/// ```
#[must_use]
pub fn extract_captured_values<'t>(re: &Regex, text: &'t str) -> Option<Vec<&'t str>> {
    let caps = re.captures(text)?;
    let values = caps
        .iter()
        .skip(1)
        .map(|capture| capture.map_or("", |m| m.as_str()))
        .collect();
    Some(values)
}
