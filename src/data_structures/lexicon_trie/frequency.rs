// Copyright (c) 2025 Kilo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Word frequency table and top-K ranking.

use std::cmp::Ordering;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// A word together with the number of times it was inserted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    /// The stored word
    pub word: String,
    /// How many times the word was inserted
    pub count: u64,
}

impl WordFrequency {
    /// Creates a new word/count pair.
    pub fn new<S: Into<String>>(word: S, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Maintains the word to occurrence count table of a trie.
#[derive(Debug, Default, Clone)]
pub struct FrequencyRanker {
    counts: HashMap<String, u64>,
    total: u64,
}

impl FrequencyRanker {
    /// Creates an empty ranker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more occurrence of `word`.
    pub fn record(&mut self, word: &str) {
        *self.counts.entry_ref(word).or_insert(0) += 1;
        self.total += 1;
    }

    /// Returns how many times `word` was recorded, 0 if never.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no word was recorded yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Returns the `k` most frequent words.
    ///
    /// Entries are ordered by descending count, ties broken by ascending word
    /// order, so the result is fully deterministic. `k = 0` yields an empty
    /// list and a `k` above the number of distinct words yields all of them.
    pub fn top_k(&self, k: usize) -> Vec<WordFrequency> {
        if k == 0 {
            return Vec::new();
        }

        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(word, &count)| (word.as_str(), count))
            .collect();
        entries.sort_unstable_by(|a, b| rank_order(*a, *b));

        entries
            .into_iter()
            .take(k)
            .map(|(word, count)| WordFrequency::new(word, count))
            .collect()
    }
}

fn rank_order(a: (&str, u64), b: (&str, u64)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
