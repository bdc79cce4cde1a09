// Copyright (c) 2025 Kilo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lexicon Trie Implementation
//!
//! An append-only prefix tree over a multiset of words. The trie answers exact
//! lookups and prefix tests directly, and exposes the depth-first enumeration
//! primitive that the [`CompletionEngine`] builds its queries on. Occurrence
//! counts live in a [`FrequencyRanker`] owned by the trie.
//!
//! # Example
//!
//! ```
//! use kilo_lib::data_structures::lexicon_trie::{CompletionEngine, Trie};
//!
//! let mut trie = Trie::new();
//! for word in ["cat", "car", "cart", "dog"] {
//!     trie.insert(word);
//! }
//!
//! assert!(trie.search("cart"));
//! assert!(trie.starts_with("ca"));
//!
//! let engine = CompletionEngine::new(&trie);
//! assert_eq!(engine.full_auto_complete("ca", "t").into_vec(), vec!["cart", "cat"]);
//! ```
//!
//! # Concurrency
//!
//! The trie is mutated only through `&mut self`. Once built it can be shared
//! across threads behind an `Arc` and queried without locks; the mirrored trie
//! used for suffix queries is cached in a `OnceCell` and dropped on the next
//! insert.

mod completion;
mod frequency;
mod node;

use once_cell::sync::OnceCell;

pub use completion::{display_form, CompletionEngine, Completions};
pub use frequency::{FrequencyRanker, WordFrequency};
pub use node::TrieNode;

/// Configuration options for the lexicon trie.
#[derive(Debug, Clone)]
pub struct TrieConfig {
    /// Whether the mirrored trie used by suffix queries is kept between queries
    pub cache_mirror: bool,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self { cache_mirror: true }
    }
}

/// Prefix tree over a multiset of already-normalized words.
#[derive(Debug, Default)]
pub struct Trie {
    /// The root node, representing the empty prefix
    root: TrieNode,

    /// Occurrence counts of every stored word
    ranker: FrequencyRanker,

    /// Lazily built mirror of this trie; empty whenever caching is disabled
    mirror: OnceCell<Box<Trie>>,

    /// Configuration options
    config: TrieConfig,
}

impl Trie {
    /// Creates a new empty `Trie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `Trie` with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            ranker: FrequencyRanker::new(),
            mirror: OnceCell::new(),
            config,
        }
    }

    /// Inserts one occurrence of `word`.
    ///
    /// The word is stored as given; case folding is the caller's job. Nodes
    /// along the path are created on demand, so re-inserting a word only
    /// bumps its count.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.is_terminal = true;

        self.ranker.record(word);
        self.mirror.take();
    }

    /// Returns `true` if `word` was inserted at least once. Case-sensitive.
    pub fn search(&self, word: &str) -> bool {
        self.find_node(word).is_some_and(|node| node.is_terminal)
    }

    /// Returns `true` if some stored word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.find_node(prefix).is_some()
    }

    /// Walks from the root along `prefix`, returning the node it ends on.
    pub fn find_node(&self, prefix: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for c in prefix.chars() {
            node = node.child(c)?;
        }
        Some(node)
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Collects every word stored below `node`, where `prefix` spells the
    /// path from the root to `node`.
    ///
    /// The order of the result follows child map iteration and is
    /// unspecified; sort it when order matters.
    pub fn enumerate_from(&self, node: &TrieNode, prefix: &str) -> Vec<String> {
        let mut results = Vec::new();
        let mut buffer = String::from(prefix);
        collect_words(node, &mut buffer, &mut results);
        results
    }

    /// All distinct stored words, in unspecified order.
    pub fn words(&self) -> Vec<String> {
        self.enumerate_from(&self.root, "")
    }

    /// How many times `word` was inserted.
    pub fn count(&self, word: &str) -> u64 {
        self.ranker.count(word)
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.ranker.len()
    }

    /// Whether nothing was inserted yet.
    pub fn is_empty(&self) -> bool {
        self.ranker.is_empty()
    }

    /// Total number of insertions, duplicates included.
    pub fn total_words(&self) -> u64 {
        self.ranker.total()
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.root.subtree_size()
    }

    /// The occurrence table backing top-K queries.
    pub fn ranker(&self) -> &FrequencyRanker {
        &self.ranker
    }

    /// The configuration this trie was built with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Builds a fresh trie holding every distinct word of this one with its
    /// characters reversed.
    pub fn build_mirror(&self) -> Trie {
        let mut mirror = Trie::with_config(TrieConfig {
            cache_mirror: false,
        });
        for word in self.words() {
            let reversed: String = word.chars().rev().collect();
            mirror.insert(&reversed);
        }
        tracing::debug!(words = mirror.len(), "Built mirrored trie");
        mirror
    }

    /// Runs `f` against the mirrored trie, building it if needed.
    ///
    /// With `cache_mirror` enabled the mirror is kept until the next insert,
    /// otherwise it is dropped as soon as `f` returns.
    pub fn with_mirror<R>(&self, f: impl FnOnce(&Trie) -> R) -> R {
        if self.config.cache_mirror {
            let mirror = self.mirror.get_or_init(|| Box::new(self.build_mirror()));
            f(mirror)
        } else {
            f(&self.build_mirror())
        }
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}

/// Depth-first collection sharing one growing buffer across the whole walk.
fn collect_words(node: &TrieNode, buffer: &mut String, results: &mut Vec<String>) {
    if node.is_terminal {
        results.push(buffer.clone());
    }

    for (&c, child) in &node.children {
        buffer.push(c);
        collect_words(child, buffer, results);
        buffer.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn test_trie_basic_operations() {
        let mut trie = Trie::new();
        assert!(trie.is_empty());
        assert!(!trie.search("hello"));

        trie.insert("hello");
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());
        assert!(trie.search("hello"));
        assert!(!trie.search("hell"));
        assert!(!trie.search("helloo"));

        // Lookups are case-sensitive at this layer
        assert!(!trie.search("HELLO"));
    }

    #[test]
    fn test_prefix_checks() {
        let trie: Trie = ["apple", "application", "apply", "banana"].into_iter().collect();

        assert!(trie.starts_with(""));
        assert!(trie.starts_with("app"));
        assert!(trie.starts_with("applic"));
        assert!(trie.starts_with("banana"));
        assert!(!trie.starts_with("bananas"));
        assert!(!trie.starts_with("orange"));
    }

    #[test]
    fn test_reinsert_only_changes_count() {
        let mut trie = Trie::new();
        trie.insert("word");
        let nodes = trie.node_count();

        trie.insert("word");
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.count("word"), 2);
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.total_words(), 2);
        assert!(trie.search("word"));
    }

    #[test]
    fn test_enumerate_from_prefix_node() {
        let trie: Trie = ["apple", "application", "apply", "banana"].into_iter().collect();
        let node = trie.find_node("app").expect("prefix path exists");

        assert_eq!(
            sorted(trie.enumerate_from(node, "app")),
            vec!["apple", "application", "apply"]
        );
        assert_eq!(
            sorted(trie.words()),
            vec!["apple", "application", "apply", "banana"]
        );
    }

    #[test]
    fn test_node_count_shares_prefixes() {
        let trie: Trie = ["ab", "ac"].into_iter().collect();
        // root, a, b, c
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn test_empty_word_marks_root() {
        let mut trie = Trie::new();
        trie.insert("");
        assert!(trie.search(""));
        assert_eq!(trie.words(), vec![String::new()]);
    }

    #[test]
    fn test_mirror_holds_reversed_words() {
        let trie: Trie = ["cats", "rats", "cats"].into_iter().collect();
        let mirror = trie.build_mirror();

        assert_eq!(sorted(mirror.words()), vec!["stac", "star"]);
        // Each distinct word is mirrored once
        assert_eq!(mirror.count("stac"), 1);
    }

    #[test]
    fn test_mirror_cache_is_invalidated_on_insert() {
        let mut trie: Trie = ["cats"].into_iter().collect();
        assert_eq!(trie.with_mirror(|m| m.len()), 1);
        assert!(trie.mirror.get().is_some());

        trie.insert("bats");
        assert!(trie.mirror.get().is_none());
        assert_eq!(trie.with_mirror(|m| m.len()), 2);
    }

    #[test]
    fn test_uncached_mirror_is_not_retained() {
        let mut trie = Trie::with_config(TrieConfig {
            cache_mirror: false,
        });
        trie.insert("cats");

        assert!(trie.with_mirror(|m| m.search("stac")));
        assert!(trie.mirror.get().is_none());
    }

    #[test]
    fn test_unicode_words() {
        let trie: Trie = ["café", "cafés", "naïve"].into_iter().collect();
        assert!(trie.search("café"));
        assert!(trie.starts_with("caf"));
        assert!(trie.starts_with("naï"));
        assert_eq!(trie.with_mirror(|m| sorted(m.words())), vec!["evïan", "séfac", "éfac"]);
    }

    /// Builds once, then queries the frozen trie from several threads.
    #[test]
    fn test_concurrent_readers() {
        const THREAD_COUNT: usize = 8;
        const WORDS: usize = 200;

        let trie: Trie = (0..WORDS).map(|i| format!("word{i}")).collect();
        let trie = Arc::new(trie);
        let barrier = Arc::new(std::sync::Barrier::new(THREAD_COUNT));

        let handles: Vec<_> = (0..THREAD_COUNT)
            .map(|thread_id| {
                let trie = Arc::clone(&trie);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for i in (thread_id..WORDS).step_by(THREAD_COUNT) {
                        assert!(trie.search(&format!("word{i}")));
                    }
                    // Every thread races to initialise the shared mirror
                    trie.with_mirror(|m| m.len())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), WORDS);
        }
        assert_eq!(trie.len(), WORDS);
    }
}
