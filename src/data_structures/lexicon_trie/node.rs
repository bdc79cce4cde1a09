// Copyright (c) 2025 Kilo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the lexicon trie.
//!
//! Nodes are owned by their parent through the `children` map; the root is
//! owned by the [`Trie`](super::Trie). There are no back references.

use fnv::FnvHashMap;

/// A node in the lexicon trie.
///
/// Each node represents the prefix spelled by the path from the root to it.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    /// Map of characters to owned child nodes
    pub children: FnvHashMap<char, TrieNode>,

    /// Whether the path to this node spells a stored word
    pub is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: FnvHashMap::default(),
            is_terminal: false,
        }
    }

    /// Returns the child reached over `c`, if any.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Number of nodes in the subtree rooted here, this node included.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children
            .values()
            .map(TrieNode::subtree_size)
            .sum::<usize>()
    }
}
