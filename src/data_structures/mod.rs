//! Data structures for Kilo.
//!
//! This module contains the word index and the query algorithms layered on it.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Build once, then read without locks
//! - Output ordering decided after traversal, never by container choice

pub mod lexicon_trie;

// Re-export common data structures
pub use lexicon_trie::{
    display_form, CompletionEngine, Completions, FrequencyRanker, Trie, TrieConfig, TrieNode,
    WordFrequency,
};
