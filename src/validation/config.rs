//! Declarative rule set configuration.
//!
//! A rule set document is a JSON object mapping field names to rule lists:
//!
//! ```json
//! {
//!   "email": ["required", { "type": "email" }],
//!   "senha": [{ "type": "min", "value": 8, "message": "Senha muito curta" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::validation::domain::{ConfigError, RuleSet, RuleSpec};

/// Field-to-rule-descriptor mapping as loaded from configuration.
///
/// # Examples
///
/// ```
/// use formguard::validation::config::RuleSetConfig;
///
/// let config = RuleSetConfig::from_json_str(r#"{ "cpf": ["cpf"] }"#)
///     .expect("valid document");
/// let rule_set = config.to_rule_set().expect("known parameters");
/// assert!(rule_set.contains("cpf"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSetConfig {
    fields: BTreeMap<String, Vec<RuleSpec>>,
}

impl RuleSetConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Parses a JSON rule set document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not a JSON object of
    /// rule lists.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|error| ConfigError::Parse(error.to_string()))
    }

    /// Adds or replaces the rule descriptors for `field`.
    #[must_use]
    pub fn with_field(
        mut self,
        field: impl Into<String>,
        specs: impl IntoIterator<Item = RuleSpec>,
    ) -> Self {
        self.fields
            .insert(field.into(), specs.into_iter().collect());
        self
    }

    /// Returns the descriptors for `field`.
    #[must_use]
    pub fn field(&self, field: &str) -> Option<&[RuleSpec]> {
        self.fields.get(field).map(Vec::as_slice)
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

    /// Resolves every descriptor into a rule.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidField`] naming the first field whose
    /// rules cannot be resolved.
    pub fn to_rule_set(&self) -> Result<RuleSet, ConfigError> {
        let mut rule_set = RuleSet::new();
        for (field, specs) in &self.fields {
            let rules = specs
                .iter()
                .map(RuleSpec::resolve)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|error| error.for_field(field.as_str()))?;
            rule_set.set(field.as_str(), rules);
        }
        Ok(rule_set)
    }
}
