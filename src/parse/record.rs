//! Ordered key → content mapping for one fetched page.

use super::error::ParseError;

/// One `key:content` field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub value: String,
}

/// Reassembled fields of one page, in source order. Keys are unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldRecord {
    fields: Vec<Field>,
}

impl FieldRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field. Returns false (and leaves the record untouched) if `key` is already present.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        if self.get(&key).is_some() {
            return false;
        }
        self.fields.push(Field {
            key,
            value: value.into(),
        });
        true
    }

    /// Build from `key:content` strings, splitting each on its first `:`.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = Self::new();
        for (index, entry) in entries.into_iter().enumerate() {
            let entry = entry.as_ref();
            let (key, value) =
                entry
                    .split_once(':')
                    .ok_or_else(|| ParseError::MalformedSegment {
                        index,
                        segment: entry.to_string(),
                    })?;
            let key = key.trim();
            if !record.push(key, value) {
                log::warn!("Duplicate field '{}' dropped", key);
            }
        }
        Ok(record)
    }

    /// Parse the newline-joined form produced by [`Self::serialize`]. Blank lines are skipped.
    pub fn parse_lines(text: &str) -> Result<Self, ParseError> {
        Self::from_entries(text.lines().filter(|l| !l.trim().is_empty()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map(|f| f.value.as_str())
    }

    pub fn require(&self, key: &str) -> Result<&str, ParseError> {
        self.get(key).ok_or_else(|| ParseError::MissingField {
            key: key.to_string(),
        })
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `key:content` strings in source order.
    pub fn to_lines(&self) -> Vec<String> {
        self.fields
            .iter()
            .map(|f| format!("{}:{}", f.key, f.value))
            .collect()
    }

    /// Newline-joined `key:content` lines, each terminated by `\n`.
    pub fn serialize(&self) -> String {
        self.to_lines().iter().map(|l| format!("{l}\n")).collect()
    }

    /// Mutable value of the most recently pushed field.
    pub(crate) fn last_value_mut(&mut self) -> Option<&mut String> {
        self.fields.last_mut().map(|f| &mut f.value)
    }
}
