//! Per-field validation messages.

use serde::Serialize;
use std::collections::BTreeMap;

/// Error messages keyed by field name.
///
/// A field that passed validation may be present with an empty list.
/// Serialises as a plain JSON object of message arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorState {
    fields: BTreeMap<String, Vec<String>>,
}

impl ErrorState {
    /// Creates an empty error state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Returns the messages for `field`, or an empty slice.
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the first message for `field`.
    #[must_use]
    pub fn first(&self, field: &str) -> Option<&str> {
        self.get(field).first().map(String::as_str)
    }

    /// Returns `true` if `field` has at least one message.
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }

    /// Returns `true` if any field has at least one message.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|messages| !messages.is_empty())
    }

    /// Replaces the messages recorded for `field`.
    pub fn replace(&mut self, field: impl Into<String>, messages: Vec<String>) {
        self.fields.insert(field.into(), messages);
    }

    /// Removes the entry for `field`.
    pub fn remove(&mut self, field: &str) {
        self.fields.remove(field);
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Returns `true` if `field` has an entry, even an empty one.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates over fields and their messages.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
