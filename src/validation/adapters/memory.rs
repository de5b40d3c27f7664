//! In-memory rule source adapter.

use crate::validation::{
    config::RuleSetConfig,
    ports::{RuleSource, RuleSourceResult},
};

/// Rule source backed by a configuration held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleSource {
    config: RuleSetConfig,
}

impl InMemoryRuleSource {
    /// Creates a source that always yields `config`.
    #[must_use]
    pub const fn new(config: RuleSetConfig) -> Self {
        Self { config }
    }
}

impl RuleSource for InMemoryRuleSource {
    fn load(&self) -> RuleSourceResult<RuleSetConfig> {
        Ok(self.config.clone())
    }
}
