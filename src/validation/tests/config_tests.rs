//! Unit tests for rule set configuration and rule sources.

use crate::validation::{
    adapters::InMemoryRuleSource,
    config::RuleSetConfig,
    domain::{ConfigError, Rule, RuleDescriptor, RuleSpec},
    engine::FormValidator,
    ports::{RuleSourceError, rule_source::MockRuleSource},
};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn signup_config() -> RuleSetConfig {
    RuleSetConfig::new()
        .with_field(
            "email",
            [
                RuleSpec::from("required"),
                RuleSpec::from(RuleDescriptor::new("email")),
            ],
        )
        .with_field(
            "senha",
            [RuleSpec::from(
                RuleDescriptor::new("min")
                    .with_value(8)
                    .with_message("Senha muito curta"),
            )],
        )
}

#[rstest]
fn document_parses_tags_and_descriptors() {
    let config = RuleSetConfig::from_json_str(
        r#"{
            "email": ["required", { "type": "email" }],
            "senha": [{ "type": "min", "value": 8, "message": "Senha muito curta" }]
        }"#,
    )
    .expect("document should parse");

    assert_eq!(config, signup_config());
}

#[rstest]
fn field_lookup_returns_configured_descriptors(signup_config: RuleSetConfig) {
    assert_eq!(signup_config.len(), 2);
    assert!(!signup_config.is_empty());
    assert_eq!(
        signup_config.field("email"),
        Some(
            [
                RuleSpec::from("required"),
                RuleSpec::from(RuleDescriptor::new("email")),
            ]
            .as_slice()
        )
    );
    assert_eq!(signup_config.field("telefone"), None);
    assert!(RuleSetConfig::new().is_empty());
}

#[rstest]
#[case("[]")]
#[case(r#"{ "email": "required" }"#)]
#[case("{")]
fn malformed_documents_are_rejected(#[case] document: &str) {
    assert!(matches!(
        RuleSetConfig::from_json_str(document),
        Err(ConfigError::Parse(_))
    ));
}

#[rstest]
fn invalid_parameter_names_the_field() {
    let config = RuleSetConfig::new().with_field(
        "senha",
        [RuleSpec::from(RuleDescriptor::new("min"))],
    );

    assert!(matches!(
        config.to_rule_set(),
        Err(ConfigError::InvalidField { field, .. }) if field == "senha"
    ));
}

#[rstest]
fn unknown_kinds_are_not_configuration_errors() {
    let config = RuleSetConfig::new().with_field("campo", [RuleSpec::from("matches")]);
    let rule_set = config.to_rule_set().expect("unknown kinds resolve");
    assert_eq!(rule_set.get("campo").map(<[Rule]>::len), Some(1));
}

#[rstest]
fn validator_from_config_applies_overrides(signup_config: RuleSetConfig) {
    let mut validator = FormValidator::from_config(&signup_config).expect("rules should resolve");

    assert!(!validator.validate(&json!({ "email": "ana@exemplo.com", "senha": "123" })));
    assert_eq!(validator.field_errors("senha"), ["Senha muito curta"]);
    assert!(!validator.has_field_error("email"));
}

#[rstest]
fn validator_from_in_memory_source(signup_config: RuleSetConfig) {
    let source = InMemoryRuleSource::new(signup_config);
    let validator = FormValidator::from_source(&source).expect("source should load");
    assert_eq!(validator.rule_set().len(), 2);
}

#[rstest]
fn validator_from_source_loads_once(signup_config: RuleSetConfig) {
    let mut source = MockRuleSource::new();
    source
        .expect_load()
        .times(1)
        .returning(move || Ok(signup_config.clone()));

    let validator = FormValidator::from_source(&source).expect("source should load");
    assert!(validator.rule_set().contains("email"));
}

#[rstest]
fn source_configuration_errors_propagate() {
    let mut source = MockRuleSource::new();
    source.expect_load().returning(|| {
        Ok(RuleSetConfig::new().with_field("senha", [RuleSpec::from(RuleDescriptor::new("min"))]))
    });

    assert!(matches!(
        FormValidator::from_source(&source),
        Err(RuleSourceError::Config(ConfigError::InvalidField { .. }))
    ));
}
