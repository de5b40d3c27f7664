//! Helpers for inspecting dynamically-typed field values.
//!
//! Field values arrive as [`serde_json::Value`]. `Value::Null` stands in for
//! both an explicit null and a field that is absent from the record.

use serde_json::Value;
use std::borrow::Cow;
use std::num::FpCategory;

/// Text produced when an object value is stringified.
const OBJECT_TEXT: &str = "[object Object]";

/// Returns `true` when the value counts as empty for optional rules.
///
/// Null, the empty string, `false`, and zero are empty. Arrays and objects
/// never are, even when they have no elements.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|float| float.classify() == FpCategory::Zero),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Renders a value as the text that length and pattern rules inspect.
///
/// Floats use their shortest display form, so `1.0` renders as `1`. Arrays
/// join their stringified elements with commas, with null elements rendered
/// as empty text.
#[must_use]
pub fn stringify(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed("null"),
        Value::Bool(flag) => Cow::Borrowed(if *flag { "true" } else { "false" }),
        Value::Number(number) => Cow::Owned(match number.as_f64() {
            Some(float) if number.is_f64() => float.to_string(),
            _ => number.to_string(),
        }),
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(|item| match item {
                    Value::Null => Cow::Borrowed(""),
                    other => stringify(other),
                })
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Borrowed(OBJECT_TEXT),
    }
}
