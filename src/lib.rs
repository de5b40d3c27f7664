//! Formguard: rule-based field validation for form records.
//!
//! This crate evaluates per-field validation rules against loosely-typed form
//! data and reports human-readable messages for each field.
//!
//! # Architecture
//!
//! Formguard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure rule and error-state types with no infrastructure
//!   dependencies
//! - **Ports**: Abstract trait interfaces for supplying rule sets
//! - **Adapters**: Concrete rule sources (in memory, JSON files)
//!
//! # Modules
//!
//! - [`validation`]: The validation engine, built-in rules, and configuration

pub mod validation;
