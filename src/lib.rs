//! Kilo Library
//!
//! An in-memory word index built once from a text source and then queried:
//! exact lookup, prefix completion, suffix completion, combined prefix and
//! suffix queries, and frequency-ranked top-K retrieval.
//!
//! # Architecture
//!
//! - [`data_structures`]: the trie, its completion engine and frequency ranker
//! - [`ingest`]: tokenizing and case-folding a text source into the trie
//! - [`dispatch`]: parsing command lines and rendering responses
//! - [`session`]: one owned index plus the configuration answering commands
//! - [`config`] and [`error`]: the layered configuration and error types

pub mod config;
pub mod data_structures;
pub mod dispatch;
pub mod error;
pub mod ingest;
pub mod session;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for Kilo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
