//! Text ingestion.
//!
//! Reads a text source line by line, splits it into whitespace separated
//! tokens, case-folds them and feeds them to [`Trie::insert`]. Lines are
//! decoded lossily so a stray invalid byte never aborts a load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::IngestConfig;
use crate::data_structures::Trie;
use crate::error::KiloResult;

/// Case folding applied to stored words and to query arguments.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// Counters collected while ingesting a source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Lines read
    pub lines: usize,
    /// Tokens inserted into the trie
    pub inserted: usize,
    /// Tokens dropped for exceeding the length limit
    pub skipped: usize,
}

/// Tokenizes text sources into a trie.
#[derive(Debug, Clone, Default)]
pub struct Ingestor {
    config: IngestConfig,
}

impl Ingestor {
    /// Creates an ingestor with the given tokenization settings.
    pub fn new(config: IngestConfig) -> Self {
        Self { config }
    }

    /// Splits `line` into normalized tokens. Empty tokens never appear.
    pub fn tokenize<'a>(&'a self, line: &'a str) -> impl Iterator<Item = String> + 'a {
        line.split_whitespace().map(move |token| {
            if self.config.lowercase {
                normalize(token)
            } else {
                token.to_string()
            }
        })
    }

    /// Inserts every token of `text`.
    pub fn ingest_str(&self, text: &str, trie: &mut Trie) -> IngestStats {
        let mut stats = IngestStats::default();
        for line in text.lines() {
            self.ingest_line(line, trie, &mut stats);
        }
        stats
    }

    /// Inserts every token read from `reader`.
    ///
    /// Stops at the first read error and returns it; words inserted before
    /// the failure stay in the trie.
    pub fn ingest_reader<R: BufRead>(&self, mut reader: R, trie: &mut Trie) -> KiloResult<IngestStats> {
        let mut stats = IngestStats::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            self.ingest_line(&line, trie, &mut stats);
        }

        info!(
            lines = stats.lines,
            inserted = stats.inserted,
            skipped = stats.skipped,
            distinct = trie.len(),
            "Ingestion complete"
        );
        Ok(stats)
    }

    /// Opens `path` and inserts every token it contains.
    pub fn ingest_file<P: AsRef<Path>>(&self, path: P, trie: &mut Trie) -> KiloResult<IngestStats> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading words");
        let file = File::open(path)?;
        self.ingest_reader(BufReader::new(file), trie)
    }

    fn ingest_line(&self, line: &str, trie: &mut Trie, stats: &mut IngestStats) {
        stats.lines += 1;
        for word in self.tokenize(line) {
            if word.chars().count() > self.config.max_word_len {
                warn!(
                    length = word.chars().count(),
                    max = self.config.max_word_len,
                    "Skipping overlong token"
                );
                stats.skipped += 1;
                continue;
            }
            trie.insert(&word);
            stats.inserted += 1;
        }
    }
}
