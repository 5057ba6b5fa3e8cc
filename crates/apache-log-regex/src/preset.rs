//! Well-known Apache log formats.

use std::fmt;
use std::str::FromStr;

/// A log format shipped in the stock Apache configuration.
///
/// # Examples
/// ```
/// use apache_log_regex::Preset;
///
/// let preset: Preset = "combined".parse().expect("known preset");
/// assert_eq!(preset, Preset::Combined);
/// assert!(preset.format().ends_with(r#"\"%{User-Agent}i\""#));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// Common Log Format.
    Common,
    /// Common Log Format plus referrer and user agent.
    #[default]
    Combined,
    /// Common Log Format prefixed with the virtual host.
    VhostCommon,
}

impl Preset {
    /// Every preset, in declaration order.
    pub const ALL: [Self; 3] = [Self::Common, Self::Combined, Self::VhostCommon];

    /// The format string for this preset.
    #[must_use]
    pub const fn format(self) -> &'static str {
        match self {
            Self::Common => r#"%h %l %u %t \"%r\" %>s %b"#,
            Self::Combined => {
                r#"%h %l %u %t \"%r\" %>s %b \"%{Referer}i\" \"%{User-Agent}i\""#
            }
            Self::VhostCommon => r#"%v %h %l %u %t \"%r\" %>s %b"#,
        }
    }

    /// The name used to select this preset.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Combined => "combined",
            Self::VhostCommon => "vhost-common",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a preset name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetParseError(pub String);

impl fmt::Display for PresetParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown log format preset '{}', expected one of: common, combined, vhost-common",
            self.0
        )
    }
}

impl std::error::Error for PresetParseError {}

impl FromStr for Preset {
    type Err = PresetParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|preset| {
                trimmed.eq_ignore_ascii_case(preset.as_str())
                    || (*preset == Self::VhostCommon
                        && trimmed.eq_ignore_ascii_case("vhost_common"))
            })
            .ok_or_else(|| PresetParseError(trimmed.to_owned()))
    }
}
