//! Declarative rule descriptors.
//!
//! A rule can be written as a bare tag (`"required"`) or as a descriptor
//! object (`{ "type": "min", "value": 8, "message": "..." }`). Both forms are
//! resolved into a [`Rule`] once, when the rule set is configured.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::error::ConfigError;
use super::rule::{BuiltinRule, Rule, RuleKind};

/// A rule as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleSpec {
    /// A bare kind name, equivalent to a descriptor with only `type` set.
    Tag(String),
    /// A full descriptor.
    Descriptor(RuleDescriptor),
}

/// A rule descriptor with an optional parameter and message override.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    /// The rule kind, such as `required` or `min`.
    #[serde(rename = "type", alias = "kind")]
    pub kind: String,
    /// Rule parameter, such as the minimum length.
    #[serde(default, alias = "parameter", skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Message reported instead of the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RuleDescriptor {
    /// Creates a descriptor for the given kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: None,
            message: None,
        }
    }

    /// Sets the rule parameter.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the message override.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl RuleSpec {
    /// Resolves the descriptor into a rule.
    ///
    /// Kinds that are not recognised resolve to [`RuleKind::Unknown`], which
    /// always passes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] when a minimum-length rule
    /// lacks a non-negative integer `value`.
    pub fn resolve(&self) -> Result<Rule, ConfigError> {
        match self {
            Self::Tag(kind) => resolve_kind(kind, None).map(Rule::from),
            Self::Descriptor(descriptor) => {
                let kind = resolve_kind(&descriptor.kind, descriptor.value.as_ref())?;
                let mut rule = BuiltinRule::new(kind);
                if let Some(message) = &descriptor.message {
                    rule = rule.with_message(message.clone());
                }
                Ok(Rule::from(rule))
            }
        }
    }
}

impl From<&str> for RuleSpec {
    fn from(kind: &str) -> Self {
        Self::Tag(kind.to_owned())
    }
}

impl From<RuleDescriptor> for RuleSpec {
    fn from(descriptor: RuleDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

fn resolve_kind(name: &str, parameter: Option<&Value>) -> Result<RuleKind, ConfigError> {
    match name {
        "required" => Ok(RuleKind::Required),
        "email" => Ok(RuleKind::Email),
        "min" | "minLength" | "min_length" => parse_min_length(name, parameter),
        "cpf" => Ok(RuleKind::Cpf),
        "phone" => Ok(RuleKind::Phone),
        other => {
            warn!(kind = other, "unknown rule kind; the rule will always pass");
            Ok(RuleKind::Unknown(other.to_owned()))
        }
    }
}

fn parse_min_length(name: &str, parameter: Option<&Value>) -> Result<RuleKind, ConfigError> {
    let raw = match parameter {
        Some(Value::Number(number)) => number.as_u64(),
        Some(Value::String(text)) => text.trim().parse::<u64>().ok(),
        _ => None,
    }
    .ok_or_else(|| ConfigError::invalid_parameter(name, "expected a non-negative integer"))?;

    let min = usize::try_from(raw)
        .map_err(|_| ConfigError::invalid_parameter(name, "minimum length is too large"))?;
    Ok(RuleKind::MinLength(min))
}
