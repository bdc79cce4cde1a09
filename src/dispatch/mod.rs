//! Command dispatch.
//!
//! Routes a parsed [`Command`] to the trie and its completion engine and wraps
//! the outcome in a [`Response`]. A response renders either as plain text or
//! as a JSON object, depending on the configured output format.

mod command;

pub use command::{Command, USAGE};

use std::fmt;

use serde::Serialize;

use crate::config::{OutputFormat, QueryConfig, ReverseOutput};
use crate::data_structures::{display_form, CompletionEngine, Completions, Trie, WordFrequency};
use crate::error::KiloResult;
use crate::ingest::normalize;

/// Size figures of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IndexStats {
    /// Distinct stored words
    pub distinct_words: usize,
    /// Insertions, duplicates included
    pub total_words: u64,
    /// Trie nodes, root included
    pub nodes: usize,
}

/// Outcome of one command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Response {
    /// Exact lookup result
    Search {
        /// The normalized word looked up
        word: String,
        /// Whether it is stored
        found: bool,
    },
    /// Prefix or suffix completion, shown as one separated list
    Completion {
        /// The words, in display form
        #[serde(flatten)]
        completions: Completions,
    },
    /// Combined prefix and suffix completion, shown one word per line
    Full {
        /// The normalized prefix
        prefix: String,
        /// The words
        #[serde(flatten)]
        completions: Completions,
    },
    /// Most frequent words
    TopK {
        /// Entries by descending count
        entries: Vec<WordFrequency>,
    },
    /// Occurrences of one word
    Count {
        /// The normalized word
        word: String,
        /// How often it was inserted
        count: u64,
    },
    /// Index size figures
    Stats(IndexStats),
    /// Usage text
    Help,
}

/// Plain text rendering of a [`Response`].
#[derive(Debug)]
pub struct TextResponse<'a> {
    response: &'a Response,
    config: &'a QueryConfig,
}

impl fmt::Display for TextResponse<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.response {
            Response::Search { found, .. } => write!(f, "{found}"),
            Response::Completion { completions } => match completions {
                Completions::NoMatch => f.write_str(&self.config.no_match_text),
                Completions::Matches(words) => {
                    f.write_str(&words.join(self.config.list_separator.as_str()))
                }
            },
            Response::Full {
                prefix,
                completions,
            } => match completions {
                Completions::NoMatch => write!(f, "No words found with prefix: {prefix}"),
                Completions::Matches(words) => f.write_str(&words.join("\n")),
            },
            Response::TopK { entries } => {
                let lines: Vec<String> = entries
                    .iter()
                    .map(|entry| format!("{}: {}", entry.word, entry.count))
                    .collect();
                f.write_str(&lines.join("\n"))
            }
            Response::Count { word, count } => write!(f, "{word}: {count}"),
            Response::Stats(stats) => write!(
                f,
                "distinct words: {}\ntotal words: {}\nnodes: {}",
                stats.distinct_words, stats.total_words, stats.nodes
            ),
            Response::Help => f.write_str(USAGE),
        }
    }
}

impl Response {
    /// Renders this response as plain text.
    pub fn text<'a>(&'a self, config: &'a QueryConfig) -> TextResponse<'a> {
        TextResponse {
            response: self,
            config,
        }
    }

    /// Renders this response in the requested format, without a trailing newline.
    pub fn render(&self, format: OutputFormat, config: &QueryConfig) -> KiloResult<String> {
        match format {
            OutputFormat::Text => Ok(self.text(config).to_string()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }
}

/// Executes commands against a built trie.
#[derive(Debug, Clone, Copy)]
pub struct Dispatcher<'a> {
    trie: &'a Trie,
    config: &'a QueryConfig,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher over `trie`.
    pub fn new(trie: &'a Trie, config: &'a QueryConfig) -> Self {
        Self { trie, config }
    }

    /// Runs one command. Word arguments are case-folded the way stored words are.
    pub fn execute(&self, command: &Command) -> Response {
        tracing::debug!(%command, "Executing command");
        let engine = CompletionEngine::new(self.trie);

        match command {
            Command::Search(word) => {
                let word = normalize(word);
                Response::Search {
                    found: self.trie.search(&word),
                    word,
                }
            }
            Command::AutoComplete(prefix) => {
                display_completion(engine.auto_complete(&normalize(prefix)))
            }
            Command::Reverse(suffix) => {
                let suffix = normalize(suffix);
                let completions = match self.config.reverse_output {
                    ReverseOutput::Restored => engine.reverse_auto_complete(&suffix),
                    ReverseOutput::Mirrored => engine.reverse_auto_complete_mirrored(&suffix),
                };
                display_completion(completions)
            }
            Command::Full { prefix, suffix } => {
                let prefix = normalize(prefix);
                Response::Full {
                    completions: engine.full_auto_complete(&prefix, &normalize(suffix)),
                    prefix,
                }
            }
            Command::TopK(k) => Response::TopK {
                entries: self.trie.ranker().top_k(*k),
            },
            Command::Count(word) => {
                let word = normalize(word);
                Response::Count {
                    count: self.trie.count(&word),
                    word,
                }
            }
            Command::Stats => Response::Stats(IndexStats {
                distinct_words: self.trie.len(),
                total_words: self.trie.total_words(),
                nodes: self.trie.node_count(),
            }),
            Command::Help => Response::Help,
        }
    }
}

fn display_completion(completions: Completions) -> Response {
    let completions = match completions {
        Completions::NoMatch => Completions::NoMatch,
        Completions::Matches(words) => Completions::Matches(
            words
                .iter()
                .map(|word| display_form(word).into_owned())
                .collect(),
        ),
    };
    Response::Completion { completions }
}
