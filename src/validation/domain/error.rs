//! Configuration error types.
//!
//! Validation itself never fails; these errors only arise while turning
//! declarative rule descriptors into rules.

use thiserror::Error;

/// Errors raised while building a rule set from configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The rule set document could not be parsed.
    #[error("invalid rule set document: {0}")]
    Parse(String),

    /// A rule descriptor carries a missing or malformed parameter.
    #[error("rule '{kind}' has an invalid parameter: {reason}")]
    InvalidParameter {
        /// The rule kind as written in the descriptor.
        kind: String,
        /// Description of the problem.
        reason: String,
    },

    /// A rule configured for a field could not be resolved.
    #[error("invalid rule for field '{field}': {reason}")]
    InvalidField {
        /// The field the rule was configured for.
        field: String,
        /// Description of the problem.
        reason: String,
    },
}

impl ConfigError {
    /// Creates an error for a malformed rule parameter.
    #[must_use]
    pub fn invalid_parameter(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Attaches the field name to a rule resolution error.
    #[must_use]
    pub fn for_field(self, field: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.into(),
            reason: self.to_string(),
        }
    }
}
