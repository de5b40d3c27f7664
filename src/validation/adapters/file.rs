//! JSON file rule source adapter.
//!
//! Reads a rule set document through a capability handle on the file's
//! parent directory.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use tracing::debug;

use crate::validation::{
    config::RuleSetConfig,
    ports::{RuleSource, RuleSourceError, RuleSourceResult},
};

/// Rule source that reads a JSON document from disk on every load.
#[derive(Debug, Clone)]
pub struct JsonFileRuleSource {
    path: Utf8PathBuf,
}

impl JsonFileRuleSource {
    /// Creates a source for the rule file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the rule file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn read_document(&self) -> std::io::Result<String> {
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| std::io::Error::other("rule file path must include a file name"))?;
        let parent = self
            .path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        dir.read_to_string(file_name)
    }
}

impl RuleSource for JsonFileRuleSource {
    fn load(&self) -> RuleSourceResult<RuleSetConfig> {
        let document = self.read_document().map_err(|source| RuleSourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let config = RuleSetConfig::from_json_str(&document)?;
        debug!(path = %self.path, fields = config.len(), "loaded rule file");
        Ok(config)
    }
}
