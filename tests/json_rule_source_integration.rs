//! Integration tests for loading rule sets from JSON files.

use camino::Utf8PathBuf;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use eyre::{Result, eyre};
use formguard::validation::{
    adapters::JsonFileRuleSource,
    domain::ConfigError,
    engine::FormValidator,
    ports::{RuleSource, RuleSourceError},
};
use serde_json::json;

const SIGNUP_RULES: &str = r#"{
    "nome": ["required"],
    "email": ["required", { "type": "email" }],
    "senha": [{ "type": "min", "value": 8 }],
    "cpf": [{ "type": "cpf", "message": "Documento inválido" }]
}"#;

struct RuleDir {
    path: Utf8PathBuf,
}

impl RuleDir {
    fn create() -> Result<Self> {
        let name = format!("formguard_rules_{}", uuid::Uuid::new_v4());
        let temp_dir = Utf8PathBuf::from_path_buf(std::env::temp_dir())
            .map_err(|path| eyre!("temp dir is not UTF-8: {}", path.display()))?;
        let dir = Dir::open_ambient_dir(&temp_dir, ambient_authority())?;
        dir.create_dir(&name)?;
        Ok(Self {
            path: temp_dir.join(name),
        })
    }

    fn write(&self, file_name: &str, contents: &str) -> Result<Utf8PathBuf> {
        let dir = Dir::open_ambient_dir(&self.path, ambient_authority())?;
        dir.write(file_name, contents)?;
        Ok(self.path.join(file_name))
    }
}

impl Drop for RuleDir {
    fn drop(&mut self) {
        if let Some(parent) = self.path.parent()
            && let Some(name) = self.path.file_name()
            && let Ok(dir) = Dir::open_ambient_dir(parent, ambient_authority())
        {
            let _removed = dir.remove_dir_all(name);
        }
    }
}

#[test]
fn validator_loads_rules_from_file() -> Result<()> {
    let rule_dir = RuleDir::create()?;
    let path = rule_dir.write("signup.json", SIGNUP_RULES)?;

    let source = JsonFileRuleSource::new(path.clone());
    assert_eq!(source.path(), path.as_path());
    let mut validator = FormValidator::from_source(&source)?;

    let record = json!({ "nome": "Ana", "email": "ana", "senha": "curta", "cpf": "123" });
    assert!(!validator.validate(&record));
    assert_eq!(validator.field_errors("email"), ["Email inválido"]);
    assert_eq!(validator.field_errors("senha"), ["Mínimo 8 caracteres"]);
    assert_eq!(validator.field_errors("cpf"), ["Documento inválido"]);
    assert!(!validator.has_field_error("nome"));
    Ok(())
}

#[test]
fn missing_file_reports_its_path() -> Result<()> {
    let rule_dir = RuleDir::create()?;
    let path = rule_dir.path.join("missing.json");

    match JsonFileRuleSource::new(path.clone()).load() {
        Err(RuleSourceError::Io { path: reported, .. }) => {
            assert_eq!(reported, path);
            Ok(())
        }
        other => Err(eyre!("expected an I/O error, got {other:?}")),
    }
}

#[test]
fn malformed_file_is_a_configuration_error() -> Result<()> {
    let rule_dir = RuleDir::create()?;
    let path = rule_dir.write("broken.json", "{ \"nome\": ")?;

    match JsonFileRuleSource::new(path).load() {
        Err(RuleSourceError::Config(ConfigError::Parse(_))) => Ok(()),
        other => Err(eyre!("expected a parse error, got {other:?}")),
    }
}
