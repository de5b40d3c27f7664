//! Unit tests for the validation module.
//!
//! Tests are organised by concern: engine behaviour, rule evaluation, and
//! configuration loading.

mod config_tests;
mod rule_tests;
