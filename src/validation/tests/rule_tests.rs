//! Unit tests for rule evaluation.

use crate::validation::domain::{BuiltinRule, Rule, RuleKind, RuleOutcome};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case(Rule::required(), json!("  "), "nome é obrigatório")]
#[case(Rule::email(), json!("x"), "Email inválido")]
#[case(Rule::min_length(4), json!("x"), "Mínimo 4 caracteres")]
#[case(Rule::cpf(), json!("x"), "CPF inválido")]
#[case(Rule::phone(), json!("x"), "Telefone inválido")]
fn builtin_rules_report_default_messages(
    #[case] rule: Rule,
    #[case] value: Value,
    #[case] expected: &str,
) {
    assert_eq!(rule.evaluate(&value, "nome"), RuleOutcome::fail(expected));
}

#[rstest]
#[case("Informe {{DDD}} e número")]
#[case("{{ field }} precisa de {{ min }} letras")]
#[case("{% if x %}")]
fn message_overrides_are_reported_verbatim(#[case] message: &str) {
    let rule = Rule::min_length(6).with_message(message);
    assert_eq!(rule.evaluate(&json!("abc"), "senha").message(), Some(message));
}

#[rstest]
fn with_message_leaves_predicates_unchanged() {
    let rule = Rule::predicate(|_, _| RuleOutcome::fail("própria")).with_message("ignorada");
    assert_eq!(
        rule.evaluate(&json!(1), "campo"),
        RuleOutcome::fail("própria")
    );
}

#[rstest]
fn builtin_rule_exposes_kind_and_override() {
    let rule = BuiltinRule::new(RuleKind::Cpf).with_message("Documento inválido");
    assert_eq!(rule.kind(), &RuleKind::Cpf);
    assert_eq!(rule.message(), Some("Documento inválido"));
}

#[rstest]
#[case(Ok(()), true)]
#[case(Err("falhou".to_owned()), false)]
fn outcome_converts_from_result(#[case] result: Result<(), String>, #[case] passes: bool) {
    assert_eq!(RuleOutcome::from(result).is_pass(), passes);
}

#[rstest]
#[case(RuleKind::MinLength(3), "minLength")]
#[case(RuleKind::Unknown("matches".to_owned()), "matches")]
fn kinds_display_canonical_names(#[case] kind: RuleKind, #[case] expected: &str) {
    assert_eq!(kind.to_string(), expected);
}
