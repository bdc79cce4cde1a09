//! Query and output configuration module.
//!
//! This module defines how queries are answered and how their results are
//! rendered.

use super::{ConfigResult, Validate};
use crate::data_structures::TrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Shape of the words returned by suffix queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReverseOutput {
    /// Words as they were stored
    #[default]
    Restored,
    /// Words as held by the mirrored trie, i.e. character-reversed
    Mirrored,
}

/// Query configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Keep the mirrored trie between suffix queries
    pub cache_mirror: bool,

    /// Shape of suffix query results
    pub reverse_output: ReverseOutput,

    /// Separator between words of a completion list
    pub list_separator: String,

    /// Text printed when a completion finds nothing
    pub no_match_text: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            cache_mirror: true,
            reverse_output: ReverseOutput::default(),
            list_separator: ", ".to_string(),
            no_match_text: "No words".to_string(),
        }
    }
}

impl QueryConfig {
    /// Trie options derived from this configuration.
    pub fn trie_config(&self) -> TrieConfig {
        TrieConfig {
            cache_mirror: self.cache_mirror,
        }
    }
}

impl Validate for QueryConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.list_separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "list_separator cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Rendering of command responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one response per command
    #[default]
    Text,
    /// One JSON object per command
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Response rendering
    pub format: OutputFormat,
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}
