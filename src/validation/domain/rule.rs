//! Resolved validation rules.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use super::message::{
    CPF_MESSAGE, EMAIL_MESSAGE, MIN_LENGTH_MESSAGE, MessageContext, PHONE_MESSAGE,
    REQUIRED_MESSAGE, render_message,
};
use crate::validation::rules;

/// Result of evaluating one rule against one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    /// The value satisfies the rule.
    Pass,
    /// The value violates the rule, with the message to show.
    Fail(String),
}

impl RuleOutcome {
    /// Creates a failing outcome.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }

    /// Returns `true` if the rule passed.
    #[must_use]
    pub const fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Returns the failure message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pass => None,
            Self::Fail(message) => Some(message.as_str()),
        }
    }
}

impl From<Result<(), String>> for RuleOutcome {
    fn from(result: Result<(), String>) -> Self {
        result.map_or_else(Self::Fail, |()| Self::Pass)
    }
}

/// Signature of a custom rule: `(value, field_name) -> outcome`.
pub type PredicateFn = dyn Fn(&Value, &str) -> RuleOutcome + Send + Sync;

/// The fixed set of built-in rule kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleKind {
    /// The value must be present and not blank.
    Required,
    /// The value must look like an email address.
    Email,
    /// The value's text must have at least this many characters.
    MinLength(usize),
    /// The value must hold exactly eleven digits.
    Cpf,
    /// The value must hold ten or eleven digits.
    Phone,
    /// A kind this engine does not recognise. Always passes.
    Unknown(String),
}

impl RuleKind {
    /// Returns the canonical name of the kind.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Required => "required",
            Self::Email => "email",
            Self::MinLength(_) => "minLength",
            Self::Cpf => "cpf",
            Self::Phone => "phone",
            Self::Unknown(name) => name.as_str(),
        }
    }

    const fn default_message(&self) -> Option<&'static str> {
        match self {
            Self::Required => Some(REQUIRED_MESSAGE),
            Self::Email => Some(EMAIL_MESSAGE),
            Self::MinLength(_) => Some(MIN_LENGTH_MESSAGE),
            Self::Cpf => Some(CPF_MESSAGE),
            Self::Phone => Some(PHONE_MESSAGE),
            Self::Unknown(_) => None,
        }
    }

    fn check(&self, value: &Value) -> bool {
        match self {
            Self::Required => rules::check_required(value),
            Self::Email => rules::check_email(value),
            Self::MinLength(min) => rules::check_min_length(value, *min),
            Self::Cpf => rules::check_cpf(value),
            Self::Phone => rules::check_phone(value),
            Self::Unknown(_) => true,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A built-in rule with an optional message override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinRule {
    kind: RuleKind,
    message: Option<String>,
}

impl BuiltinRule {
    /// Creates a built-in rule that reports its default message.
    #[must_use]
    pub const fn new(kind: RuleKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Replaces the default failure message.
    ///
    /// The override is reported verbatim; it is not rendered as a template.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Returns the rule kind.
    #[must_use]
    pub const fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Returns the message override, if one was configured.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn evaluate(&self, value: &Value, field: &str) -> RuleOutcome {
        if self.kind.check(value) {
            return RuleOutcome::Pass;
        }

        if let Some(message) = &self.message {
            return RuleOutcome::Fail(message.clone());
        }

        let template = self.kind.default_message().unwrap_or_default();
        let min = match self.kind {
            RuleKind::MinLength(min) => Some(min),
            _ => None,
        };
        RuleOutcome::Fail(render_message(template, MessageContext { field, min }))
    }
}

/// A rule resolved at configuration time.
///
/// Rules are either one of the built-in kinds or an arbitrary predicate.
#[derive(Clone)]
pub enum Rule {
    /// A caller-supplied check.
    Predicate(Arc<PredicateFn>),
    /// One of the built-in checks.
    Builtin(BuiltinRule),
}

impl Rule {
    /// The value must be present and not blank.
    #[must_use]
    pub const fn required() -> Self {
        Self::Builtin(BuiltinRule::new(RuleKind::Required))
    }

    /// The value must be empty or look like an email address.
    #[must_use]
    pub const fn email() -> Self {
        Self::Builtin(BuiltinRule::new(RuleKind::Email))
    }

    /// The value must be empty or have at least `min` characters.
    #[must_use]
    pub const fn min_length(min: usize) -> Self {
        Self::Builtin(BuiltinRule::new(RuleKind::MinLength(min)))
    }

    /// The value must be empty or hold exactly eleven digits.
    #[must_use]
    pub const fn cpf() -> Self {
        Self::Builtin(BuiltinRule::new(RuleKind::Cpf))
    }

    /// The value must be empty or hold ten or eleven digits.
    #[must_use]
    pub const fn phone() -> Self {
        Self::Builtin(BuiltinRule::new(RuleKind::Phone))
    }

    /// Wraps a custom check.
    ///
    /// # Examples
    ///
    /// ```
    /// use formguard::validation::domain::{Rule, RuleOutcome};
    ///
    /// let even = Rule::predicate(|value, field| {
    ///     if value.as_u64().is_some_and(|n| n % 2 == 0) {
    ///         RuleOutcome::Pass
    ///     } else {
    ///         RuleOutcome::fail(format!("{field} deve ser par"))
    ///     }
    /// });
    /// assert!(even.evaluate(&serde_json::json!(4), "quantidade").is_pass());
    /// ```
    #[must_use]
    pub fn predicate<F>(check: F) -> Self
    where
        F: Fn(&Value, &str) -> RuleOutcome + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(check))
    }

    /// Replaces the failure message of a built-in rule.
    ///
    /// Predicates produce their own messages and are returned unchanged.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        match self {
            Self::Builtin(rule) => Self::Builtin(rule.with_message(message)),
            predicate @ Self::Predicate(_) => predicate,
        }
    }

    /// Evaluates the rule against a value of the named field.
    #[must_use]
    pub fn evaluate(&self, value: &Value, field: &str) -> RuleOutcome {
        match self {
            Self::Predicate(check) => check(value, field),
            Self::Builtin(rule) => rule.evaluate(value, field),
        }
    }
}

impl From<RuleKind> for Rule {
    fn from(kind: RuleKind) -> Self {
        Self::Builtin(BuiltinRule::new(kind))
    }
}

impl From<BuiltinRule> for Rule {
    fn from(rule: BuiltinRule) -> Self {
        Self::Builtin(rule)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Predicate(_) => f.write_str("Predicate(..)"),
            Self::Builtin(rule) => f.debug_tuple("Builtin").field(rule).finish(),
        }
    }
}
