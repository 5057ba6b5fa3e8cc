//! Apache access-log parsing driven by the log format string.
//!
//! A format such as `%h %l %u %t \"%r\" %>s %b` is compiled once into a single
//! anchored regular expression, one capture group per format token. Lines are
//! then matched against it and the captures are handed back keyed by the
//! token that produced them.
//!
//! ```
//! use apache_log_regex::LogParser;
//!
//! let parser = LogParser::new(r#"%h %l %u %t \"%r\" %>s %b"#)
//!     .expect("common log format compiles");
//! let record = parser
//!     .parse(r#"127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET /apache_pb.gif HTTP/1.0" 200 2326"#)
//!     .expect("line matches the format");
//! assert_eq!(record.get("%h"), Some("127.0.0.1"));
//! assert_eq!(record.get("%r"), Some("GET /apache_pb.gif HTTP/1.0"));
//! ```

mod capture;
mod errors;
mod format;
mod naming;
mod parser;
mod preset;
mod record;

pub use capture::extract_captured_values;
pub use errors::{FormatError, ParseError};
pub use format::{CompiledFormat, TokenClass, compile_format, normalize_format};
pub use naming::{FieldNamer, HumanReadable, Identity};
pub use parser::LogParser;
pub use preset::{Preset, PresetParseError};
pub use record::ParsedRecord;
