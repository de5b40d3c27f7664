//! Built-in rule checks.
//!
//! Each check is a pure predicate over a single field value. Apart from
//! [`check_required`], every check passes trivially for empty values so that
//! optional fields can carry format rules.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::validation::domain::value::{is_falsy, stringify};

/// Number of digits in a CPF.
pub const CPF_DIGITS: usize = 11;

/// Accepted digit counts for a phone number (area code plus subscriber).
pub const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=11;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a compile-time constant"
)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

/// Passes when the value is present and not blank.
///
/// Strings must contain something other than whitespace and arrays must have
/// at least one element. Any other non-null value passes, including `false`
/// and `0`.
#[must_use]
pub fn check_required(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Bool(_) | Value::Number(_) | Value::Object(_) => true,
    }
}

/// Passes when the value is empty or looks like `local@domain.tld`.
#[must_use]
pub fn check_email(value: &Value) -> bool {
    is_falsy(value) || matches_email_shape(&stringify(value))
}

/// Passes when the value is empty or its text has at least `min` characters.
#[must_use]
pub fn check_min_length(value: &Value, min: usize) -> bool {
    is_falsy(value) || stringify(value).chars().count() >= min
}

/// Passes when the value is empty or holds exactly eleven digits.
///
/// Punctuation and spaces are ignored. The CPF check digits are not verified.
#[must_use]
pub fn check_cpf(value: &Value) -> bool {
    is_falsy(value) || digit_count(&stringify(value)) == CPF_DIGITS
}

/// Passes when the value is empty or holds ten or eleven digits.
#[must_use]
pub fn check_phone(value: &Value) -> bool {
    is_falsy(value) || PHONE_DIGITS.contains(&digit_count(&stringify(value)))
}

pub(crate) fn matches_email_shape(text: &str) -> bool {
    EMAIL_PATTERN.is_match(text)
}

pub(crate) fn digit_count(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}
