//! Test modules for Kilo.
//!
//! This module contains the crate-internal test suite:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Command parsing and dispatch
//! - Property-based tests of the trie queries using proptest
//! - Shared fixtures and strategies


pub use test_utils::{create_test_dir, trie_from, word_list_strategy, word_strategy, TestFixture};
