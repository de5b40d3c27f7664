//! Standalone format checks.
//!
//! Unlike the rule checks, these reject empty and missing input. They suit
//! one-off checks outside a [`FormValidator`](crate::validation::engine::FormValidator).

use crate::validation::rules::{CPF_DIGITS, PHONE_DIGITS, digit_count, matches_email_shape};

/// Returns `true` if `input` looks like `local@domain.tld`.
#[must_use]
pub fn is_valid_email(input: Option<&str>) -> bool {
    input.is_some_and(matches_email_shape)
}

/// Returns `true` if `input` holds exactly eleven digits, ignoring
/// punctuation.
#[must_use]
pub fn is_valid_cpf(input: Option<&str>) -> bool {
    input.is_some_and(|text| digit_count(text) == CPF_DIGITS)
}

/// Returns `true` if `input` holds ten or eleven digits, ignoring
/// punctuation.
#[must_use]
pub fn is_valid_phone(input: Option<&str>) -> bool {
    input.is_some_and(|text| PHONE_DIGITS.contains(&digit_count(text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some("teste@email.com"), true)]
    #[case(Some("email123@teste.org"), true)]
    #[case(Some("email@"), false)]
    #[case(Some(""), false)]
    #[case(None, false)]
    fn email_requires_a_value(#[case] input: Option<&str>, #[case] expected: bool) {
        assert_eq!(is_valid_email(input), expected);
    }

    #[rstest]
    #[case(Some("000.000.000-00"), true)]
    #[case(Some("123 456 789 01"), true)]
    #[case(Some("1234567890"), false)]
    #[case(Some(""), false)]
    #[case(None, false)]
    fn cpf_requires_eleven_digits(#[case] input: Option<&str>, #[case] expected: bool) {
        assert_eq!(is_valid_cpf(input), expected);
    }

    #[rstest]
    #[case(Some("12 3456-7890"), true)]
    #[case(Some("(12) 93456-7890"), true)]
    #[case(Some("123456789"), false)]
    #[case(Some(""), false)]
    #[case(None, false)]
    fn phone_requires_ten_or_eleven_digits(#[case] input: Option<&str>, #[case] expected: bool) {
        assert_eq!(is_valid_phone(input), expected);
    }
}
