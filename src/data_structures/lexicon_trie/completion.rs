// Copyright (c) 2025 Kilo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Completion queries layered on the trie's enumeration primitive.
//!
//! Prefix completion walks to the prefix node and enumerates its subtree.
//! Suffix completion runs prefix completion against the mirrored trie, whose
//! words are stored reversed. Combined queries filter a prefix completion by
//! a plain string suffix test. Every query sorts its output once, after the
//! traversal.

use std::borrow::Cow;

use serde::Serialize;

use super::Trie;

/// Result of a completion query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "words", rename_all = "snake_case")]
pub enum Completions {
    /// The query path does not exist or holds no words
    NoMatch,
    /// Matching words in ascending order
    Matches(Vec<String>),
}

impl Completions {
    fn from_sorted(words: Vec<String>) -> Self {
        if words.is_empty() {
            Completions::NoMatch
        } else {
            Completions::Matches(words)
        }
    }

    /// Whether the query produced no words.
    pub fn is_empty(&self) -> bool {
        match self {
            Completions::NoMatch => true,
            Completions::Matches(words) => words.is_empty(),
        }
    }

    /// Number of matching words.
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// The matching words, empty on no match.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Completions::NoMatch => &[],
            Completions::Matches(words) => words,
        }
    }

    /// Consumes the result, returning the matching words.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Completions::NoMatch => Vec::new(),
            Completions::Matches(words) => words,
        }
    }
}

/// Display form of a completed word.
///
/// A word carrying a `;` anywhere after its first character loses its last
/// character. Only output is affected, stored words never change.
pub fn display_form(word: &str) -> Cow<'_, str> {
    if word.chars().skip(1).any(|c| c == ';') {
        let mut trimmed = word.to_owned();
        trimmed.pop();
        Cow::Owned(trimmed)
    } else {
        Cow::Borrowed(word)
    }
}

/// Prefix, suffix and combined completion over a borrowed trie.
#[derive(Debug, Clone, Copy)]
pub struct CompletionEngine<'a> {
    trie: &'a Trie,
}

impl<'a> CompletionEngine<'a> {
    /// Creates an engine querying `trie`.
    pub fn new(trie: &'a Trie) -> Self {
        Self { trie }
    }

    /// All distinct words starting with `prefix`, sorted ascending.
    pub fn auto_complete(&self, prefix: &str) -> Completions {
        let completions = prefix_completions(self.trie, prefix);
        tracing::debug!(prefix, matches = completions.len(), "Prefix completion");
        completions
    }

    /// All distinct words ending with `suffix`, sorted ascending.
    ///
    /// The query runs against the mirrored trie; results are reversed back so
    /// callers see the stored words.
    pub fn reverse_auto_complete(&self, suffix: &str) -> Completions {
        let mirrored = self.reverse_auto_complete_mirrored(suffix);
        let mut words: Vec<String> = mirrored.into_vec().iter().map(|w| reverse(w)).collect();
        words.sort_unstable();
        Completions::from_sorted(words)
    }

    /// Suffix completion as seen from the mirrored trie: the matching words
    /// are returned reversed and sorted in reversed form.
    pub fn reverse_auto_complete_mirrored(&self, suffix: &str) -> Completions {
        let reversed_suffix = reverse(suffix);
        let completions = self
            .trie
            .with_mirror(|mirror| prefix_completions(mirror, &reversed_suffix));
        tracing::debug!(suffix, matches = completions.len(), "Suffix completion");
        completions
    }

    /// Words starting with `prefix` and ending with `suffix`, sorted ascending.
    ///
    /// Returns [`Completions::NoMatch`] only when no word starts with
    /// `prefix`; a prefix with no suffix hit yields an empty match list.
    pub fn full_auto_complete(&self, prefix: &str, suffix: &str) -> Completions {
        match prefix_completions(self.trie, prefix) {
            Completions::NoMatch => Completions::NoMatch,
            Completions::Matches(words) => {
                let words: Vec<String> = words
                    .into_iter()
                    .filter(|word| word.ends_with(suffix))
                    .collect();
                tracing::debug!(prefix, suffix, matches = words.len(), "Full completion");
                Completions::Matches(words)
            }
        }
    }
}

fn prefix_completions(trie: &Trie, prefix: &str) -> Completions {
    let Some(node) = trie.find_node(prefix) else {
        return Completions::NoMatch;
    };
    let mut words = trie.enumerate_from(node, prefix);
    words.sort_unstable();
    Completions::from_sorted(words)
}

fn reverse(word: &str) -> String {
    word.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trie_of(words: &[&str]) -> Trie {
        words.iter().collect()
    }

    #[test]
    fn test_auto_complete_sorted() {
        let trie = trie_of(&["car", "cat", "cart", "dog", "cat"]);
        let engine = CompletionEngine::new(&trie);

        assert_eq!(
            engine.auto_complete("ca"),
            Completions::Matches(vec!["car".into(), "cart".into(), "cat".into()])
        );
        assert_eq!(engine.auto_complete("dog").into_vec(), vec!["dog"]);
    }

    #[test]
    fn test_auto_complete_no_match() {
        let trie = trie_of(&["car"]);
        let engine = CompletionEngine::new(&trie);
        assert_eq!(engine.auto_complete("x"), Completions::NoMatch);
        assert_eq!(engine.auto_complete("cars"), Completions::NoMatch);

        let empty = Trie::new();
        assert_eq!(CompletionEngine::new(&empty).auto_complete(""), Completions::NoMatch);
    }

    #[test]
    fn test_auto_complete_keeps_stored_words() {
        let trie = trie_of(&["ab;c"]);
        let engine = CompletionEngine::new(&trie);
        assert_eq!(engine.auto_complete("ab").into_vec(), vec!["ab;c"]);
    }

    #[test]
    fn test_reverse_auto_complete_restores_words() {
        let trie = trie_of(&["cats", "rats", "bats", "dog"]);
        let engine = CompletionEngine::new(&trie);

        assert_eq!(
            engine.reverse_auto_complete("ats").into_vec(),
            vec!["bats", "cats", "rats"]
        );
        assert_eq!(engine.reverse_auto_complete("xyz"), Completions::NoMatch);
    }

    #[test]
    fn test_reverse_auto_complete_mirrored_form() {
        let trie = trie_of(&["cats", "rats", "bats"]);
        let engine = CompletionEngine::new(&trie);

        assert_eq!(
            engine.reverse_auto_complete_mirrored("ats").into_vec(),
            vec!["stab", "stac", "star"]
        );
    }

    #[test]
    fn test_reverse_ordering_uses_restored_words() {
        // Mirror order would be "ab" < "ba" i.e. "ba", "ab"
        let trie = trie_of(&["ba", "ab"]);
        let engine = CompletionEngine::new(&trie);
        assert_eq!(engine.reverse_auto_complete("").into_vec(), vec!["ab", "ba"]);
    }

    #[test]
    fn test_full_auto_complete() {
        let trie = trie_of(&["cat", "car", "cart", "dog"]);
        let engine = CompletionEngine::new(&trie);

        assert_eq!(engine.full_auto_complete("ca", "t").into_vec(), vec!["cart", "cat"]);
        assert_eq!(engine.full_auto_complete("ca", "x"), Completions::Matches(vec![]));
        assert_eq!(engine.full_auto_complete("z", "t"), Completions::NoMatch);
        assert_eq!(engine.full_auto_complete("", "").len(), 4);
    }

    #[test]
    fn test_display_form() {
        assert_eq!(display_form("word"), "word");
        assert_eq!(display_form("word;"), "word");
        assert_eq!(display_form("ab;cd"), "ab;c");
        assert_eq!(display_form(";ab"), ";ab");
        assert_eq!(display_form(";a;"), ";a");
        assert_eq!(display_form(";"), ";");
        assert_eq!(display_form(""), "");
    }

    #[test]
    fn test_completions_accessors() {
        let matches = Completions::Matches(vec!["a".into()]);
        assert!(!matches.is_empty());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches.as_slice(), ["a".to_string()]);

        assert!(Completions::NoMatch.is_empty());
        assert!(Completions::Matches(vec![]).is_empty());
    }
}
