//! Lookup configuration module.
//!
//! Settings for the word list the tool loads into its prefix tree and for how
//! completion results are printed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;

/// Lookup configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LookupConfig {
    /// Word list to load, one word per line
    pub words_file: Option<PathBuf>,

    /// Maximum number of completions printed, 0 for no limit
    pub max_completions: usize,
}

impl LookupConfig {
    /// Truncates `completions` to the configured limit.
    pub fn limit(&self, mut completions: Vec<String>) -> Vec<String> {
        if self.max_completions > 0 {
            completions.truncate(self.max_completions);
        }
        completions
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.words_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "words_file cannot be an empty path".to_string(),
                ));
            }
        }

        Ok(())
    }
}
