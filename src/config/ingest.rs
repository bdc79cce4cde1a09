//! Ingestion configuration module.
//!
//! Controls how the text source is tokenized before words reach the trie.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Ingestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Whether tokens are lower-cased before insertion
    pub lowercase: bool,

    /// Longest token, in characters, that is inserted; longer ones are skipped
    pub max_word_len: usize,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            lowercase: true,
            max_word_len: 256,
        }
    }
}

impl Validate for IngestConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_len == 0 {
            return Err(ConfigError::ValidationError(
                "max_word_len must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
