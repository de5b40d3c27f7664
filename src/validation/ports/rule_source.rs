//! Rule source port.
//!
//! A rule source supplies the declarative rule set a validator is built from.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::validation::{config::RuleSetConfig, domain::ConfigError};

/// Result type for rule source operations.
pub type RuleSourceResult<T> = Result<T, RuleSourceError>;

/// Port for loading rule set configuration.
#[cfg_attr(test, mockall::automock)]
pub trait RuleSource: Send + Sync {
    /// Loads the rule set configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RuleSourceError`] when the source cannot be read or its
    /// contents are not a valid rule set document.
    fn load(&self) -> RuleSourceResult<RuleSetConfig>;
}

/// Errors for rule source operations.
#[derive(Debug, Error)]
pub enum RuleSourceError {
    /// The rule file could not be read.
    #[error("failed to read rule file '{path}': {source}")]
    Io {
        /// Path of the rule file.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The source contents are not a valid rule set.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
