//! Port trait definitions for the validation subsystem.
//!
//! Ports describe what the engine needs from infrastructure. Adapters
//! implement them to supply rule sets from memory or from files.

pub mod rule_source;

pub use rule_source::{RuleSource, RuleSourceError, RuleSourceResult};
