//! Domain types for field validation.
//!
//! This module contains pure types with no infrastructure dependencies:
//! rules and their descriptors, the rule set, and the per-field error state.

mod error;
mod error_state;
pub mod message;
mod rule;
mod rule_set;
mod rule_spec;
pub mod value;

pub use error::ConfigError;
pub use error_state::ErrorState;
pub use rule::{BuiltinRule, PredicateFn, Rule, RuleKind, RuleOutcome};
pub use rule_set::RuleSet;
pub use rule_spec::{RuleDescriptor, RuleSpec};
