//! Field validation for form records.
//!
//! # Architecture
//!
//! - **Domain**: rules, descriptors, the rule set, and the error state
//! - **Rules**: the built-in checks behind each rule kind
//! - **Engine**: [`engine::FormValidator`], which applies a rule set to records
//! - **Config**: declarative rule set documents
//! - **Ports**: the [`ports::RuleSource`] interface for loading configuration
//! - **Adapters**: in-memory and JSON file rule sources
//!
//! # Example
//!
//! ```
//! use formguard::validation::config::RuleSetConfig;
//! use formguard::validation::engine::FormValidator;
//! use serde_json::json;
//!
//! let config = RuleSetConfig::from_json_str(
//!     r#"{ "nome": ["required"], "senha": [{ "type": "min", "value": 8 }] }"#,
//! )
//! .expect("valid document");
//! let mut validator = FormValidator::from_config(&config).expect("valid rules");
//!
//! assert!(!validator.validate(&json!({ "nome": "Ana", "senha": "curta" })));
//! assert_eq!(validator.first_field_error("senha"), Some("Mínimo 8 caracteres"));
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod engine;
pub mod ports;
pub mod rules;
pub mod validators;

pub use config::RuleSetConfig;
pub use domain::{ConfigError, ErrorState, Rule, RuleKind, RuleOutcome, RuleSet, RuleSpec};
pub use engine::FormValidator;

#[cfg(test)]
mod tests;
