//! The form validation engine.
//!
//! A [`FormValidator`] owns one rule set and one error state. Validation
//! rewrites the error state in place and reports the outcome as data; it never
//! fails.

use serde_json::Value;
use tracing::debug;

use crate::validation::{
    config::RuleSetConfig,
    domain::{ConfigError, ErrorState, Rule, RuleOutcome, RuleSet},
    ports::{RuleSource, RuleSourceResult},
};

/// Evaluates per-field rules against form records.
///
/// # Examples
///
/// ```
/// use formguard::validation::domain::Rule;
/// use formguard::validation::engine::FormValidator;
/// use serde_json::json;
///
/// let mut validator = FormValidator::new();
/// validator
///     .set_rule("email", [Rule::required(), Rule::email()])
///     .set_rule("cpf", [Rule::cpf()]);
///
/// assert!(!validator.validate(&json!({ "email": "", "cpf": "123.456.789-01" })));
/// assert_eq!(validator.field_errors("email"), ["email é obrigatório"]);
/// assert!(!validator.has_field_error("cpf"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormValidator {
    rules: RuleSet,
    errors: ErrorState,
}

impl FormValidator {
    /// Creates a validator with no rules.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rules: RuleSet::new(),
            errors: ErrorState::new(),
        }
    }

    /// Creates a validator from an existing rule set.
    #[must_use]
    pub const fn with_rule_set(rules: RuleSet) -> Self {
        Self {
            rules,
            errors: ErrorState::new(),
        }
    }

    /// Creates a validator from declarative configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a rule descriptor cannot be resolved.
    pub fn from_config(config: &RuleSetConfig) -> Result<Self, ConfigError> {
        config.to_rule_set().map(Self::with_rule_set)
    }

    /// Creates a validator from the configuration a source provides.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSourceError`](crate::validation::ports::RuleSourceError)
    /// when the source cannot be loaded or its rules cannot be resolved.
    pub fn from_source<S>(source: &S) -> RuleSourceResult<Self>
    where
        S: RuleSource + ?Sized,
    {
        let config = source.load()?;
        Ok(Self::from_config(&config)?)
    }

    /// Replaces the rules for `field`. Returns `self` for chaining.
    pub fn set_rule(
        &mut self,
        field: impl Into<String>,
        rules: impl IntoIterator<Item = Rule>,
    ) -> &mut Self {
        self.rules.set(field, rules);
        self
    }

    /// Owned variant of [`set_rule`](Self::set_rule) for builder-style setup.
    #[must_use]
    pub fn with_rule(
        mut self,
        field: impl Into<String>,
        rules: impl IntoIterator<Item = Rule>,
    ) -> Self {
        self.rules.set(field, rules);
        self
    }

    /// Validates a single field value.
    ///
    /// Fields without rules pass and leave the error state untouched.
    /// Otherwise the field's messages are replaced by the failures of its
    /// rules, in registration order. Returns `true` if no rule failed.
    pub fn validate_field(&mut self, field: &str, value: &Value) -> bool {
        let Some(rules) = self.rules.get(field) else {
            return true;
        };

        record_field(&mut self.errors, rules, field, value)
    }

    /// Validates every configured field of `record`.
    ///
    /// All prior messages are discarded first. Fields missing from the record,
    /// and every field of a record that is not an object, are validated as
    /// null. Every field is evaluated even after a failure.
    pub fn validate(&mut self, record: &Value) -> bool {
        self.errors.clear();

        let mut valid = true;
        for (field, rules) in self.rules.iter() {
            let value = record.get(field).unwrap_or(&Value::Null);
            valid &= record_field(&mut self.errors, rules, field, value);
        }

        debug!(fields = self.rules.len(), valid, "validated record");
        valid
    }

    /// Returns the current messages for `field`.
    #[must_use]
    pub fn field_errors(&self, field: &str) -> &[String] {
        self.errors.get(field)
    }

    /// Returns `true` if `field` currently has at least one message.
    #[must_use]
    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.has(field)
    }

    /// Returns the first current message for `field`.
    #[must_use]
    pub fn first_field_error(&self, field: &str) -> Option<&str> {
        self.errors.first(field)
    }

    /// Clears the messages of one field, or of every field when `field` is
    /// `None`.
    pub fn clear_errors(&mut self, field: Option<&str>) {
        match field {
            Some(name) => self.errors.remove(name),
            None => self.errors.clear(),
        }
    }

    /// Removes the entry for `field`, leaving other fields untouched.
    pub fn clear_field_errors(&mut self, field: &str) {
        self.errors.remove(field);
    }

    /// Resets the whole error state.
    pub fn clear_all_errors(&mut self) {
        self.errors.clear();
    }

    /// Returns the configured rule set.
    #[must_use]
    pub const fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the current error state.
    #[must_use]
    pub const fn errors(&self) -> &ErrorState {
        &self.errors
    }

    /// Iterates over the configured field names.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules.fields()
    }
}

/// Evaluates `rules` and stores the resulting messages for `field`.
fn record_field(errors: &mut ErrorState, rules: &[Rule], field: &str, value: &Value) -> bool {
    let messages = evaluate_rules(rules, field, value);
    let valid = messages.is_empty();
    errors.replace(field, messages);
    valid
}

fn evaluate_rules(rules: &[Rule], field: &str, value: &Value) -> Vec<String> {
    let messages: Vec<String> = rules
        .iter()
        .filter_map(|rule| match rule.evaluate(value, field) {
            RuleOutcome::Pass => None,
            RuleOutcome::Fail(message) => Some(message),
        })
        .collect();
    debug!(field, errors = messages.len(), "validated field");
    messages
}
