//! Field-to-rules configuration.

use std::collections::BTreeMap;

use super::rule::Rule;

/// Ordered rules keyed by field name.
///
/// Rule order within a field decides the order in which messages are
/// reported. Order across fields carries no meaning.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    fields: BTreeMap<String, Vec<Rule>>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Replaces the rules for `field`.
    pub fn set(&mut self, field: impl Into<String>, rules: impl IntoIterator<Item = Rule>) {
        self.fields
            .insert(field.into(), rules.into_iter().collect());
    }

    /// Returns the rules for `field`, if any were registered.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[Rule]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    /// Returns `true` if rules are registered for `field`.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Iterates over the configured field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over fields and their rules.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields
            .iter()
            .map(|(field, rules)| (field.as_str(), rules.as_slice()))
    }

    /// Returns the number of configured fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no fields are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
