//! Ordered field-to-value mapping produced for each parsed line.

/// The fields captured from one log line, in format order.
///
/// Keys are unique: when a format repeats a field, the later capture replaces
/// the earlier value but the key keeps its first position.
///
/// # Examples
/// ```
/// use apache_log_regex::LogParser;
///
/// let parser = LogParser::new("%h %>s %b").expect("format compiles");
/// let record = parser.parse("10.0.0.1 404 -").expect("line matches");
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["%h", "%>s", "%b"]);
/// assert_eq!(record.get("%>s"), Some("404"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecord {
    entries: Vec<(String, String)>,
}

impl ParsedRecord {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Set `field` to `value`, replacing any earlier value in place.
    pub(crate) fn insert(&mut self, field: &str, value: &str) {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| key == field) {
            value.clone_into(existing);
            return;
        }
        self.entries.push((field.to_owned(), value.to_owned()));
    }

    /// Return the captured value for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, value)| value.as_str())
    }

    /// Whether `field` was captured.
    #[must_use]
    pub fn contains_key(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Number of distinct fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the record holds no fields, which only happens for an empty
    /// format.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(field, value)` pairs in format order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Iterate over field names in format order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate over captured values in format order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, value)| value.as_str())
    }
}

impl IntoIterator for ParsedRecord {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl From<ParsedRecord> for Vec<(String, String)> {
    fn from(record: ParsedRecord) -> Self {
        record.entries
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ParsedRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
