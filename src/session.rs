//! Query sessions.
//!
//! A [`Session`] owns the trie built from one text source together with the
//! configuration and error reporter used to answer commands. The binary
//! creates exactly one session; there is no process-wide state.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::config::KiloConfig;
use crate::data_structures::Trie;
use crate::dispatch::{Command, Dispatcher};
use crate::error::{ErrorContext, ErrorReporter, KiloError, KiloResult};
use crate::ingest::{IngestStats, Ingestor};

/// Lines that end an interactive session.
const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

/// A built index plus everything needed to answer commands against it.
#[derive(Debug)]
pub struct Session {
    trie: Trie,
    config: KiloConfig,
    reporter: Arc<dyn ErrorReporter>,
}

impl Session {
    /// Creates a session with an empty trie.
    pub fn new(config: KiloConfig, reporter: Arc<dyn ErrorReporter>) -> Self {
        Self {
            trie: Trie::with_config(config.query.trie_config()),
            config,
            reporter,
        }
    }

    /// The index answering this session's commands.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Loads the words of `path` into the trie.
    ///
    /// A source that cannot be read, fully or partly, is reported and the
    /// session keeps whatever was inserted before the failure.
    pub fn load_source<P: AsRef<Path>>(&mut self, path: P) -> Option<IngestStats> {
        let path = path.as_ref();
        let ingestor = Ingestor::new(self.config.ingest.clone());
        match ingestor.ingest_file(path, &mut self.trie) {
            Ok(stats) => Some(stats),
            Err(error) => {
                self.reporter.report(
                    ErrorContext::new(error, "ingest")
                        .with_details(format!("source: {}", path.display())),
                );
                None
            }
        }
    }

    /// Loads words from an in-memory text.
    pub fn load_text(&mut self, text: &str) -> IngestStats {
        Ingestor::new(self.config.ingest.clone()).ingest_str(text, &mut self.trie)
    }

    /// Parses and runs one command line, returning the rendered response.
    pub fn execute_line(&self, line: &str) -> KiloResult<String> {
        let command: Command = line.parse()?;
        let response = Dispatcher::new(&self.trie, &self.config.query).execute(&command);
        response.render(self.config.output.format, &self.config.query)
    }

    /// Answers every command line of `input` on `output` until EOF or a quit
    /// command. Blank lines are ignored; failing commands are reported and
    /// the session goes on.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> KiloResult<usize> {
        let mut answered = 0;
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if QUIT_COMMANDS.contains(&trimmed.to_lowercase().as_str()) {
                break;
            }

            match self.execute_line(trimmed) {
                Ok(rendered) => {
                    writeln!(output, "{rendered}")?;
                    answered += 1;
                }
                Err(error @ KiloError::Command(_)) => {
                    self.reporter.report(
                        ErrorContext::new(error, "dispatch").with_details(format!("line: {trimmed}")),
                    );
                }
                Err(error) => return Err(error),
            }
        }
        output.flush()?;
        info!(answered, "Session finished");
        Ok(answered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TracingErrorReporter;
    use std::io::Cursor;

    fn session_with(text: &str) -> Session {
        let mut session = Session::new(KiloConfig::default(), Arc::new(TracingErrorReporter));
        session.load_text(text);
        session
    }

    #[test]
    fn test_run_answers_each_line() {
        let session = session_with("Cat car cart dog cat");
        let input = Cursor::new("search CAT\n\nautocomplete CA\ntopk 1\nquit\nsearch dog\n");
        let mut output = Vec::new();

        let answered = session.run(input, &mut output).unwrap();
        assert_eq!(answered, 3);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "true\ncar, cart, cat\ncat: 2\n"
        );
    }

    #[test]
    fn test_bad_commands_do_not_end_session() {
        let session = session_with("alpha");
        let input = Cursor::new("fly away\ntopk -1\nsearch\nsearch alpha\n");
        let mut output = Vec::new();

        assert_eq!(session.run(input, &mut output).unwrap(), 1);
        assert_eq!(String::from_utf8(output).unwrap(), "true\n");
    }

    #[test]
    fn test_unreadable_source_leaves_empty_index() {
        let mut session = Session::new(KiloConfig::default(), Arc::new(TracingErrorReporter));
        assert!(session.load_source("/no/such/source.txt").is_none());
        assert!(session.trie().is_empty());
        assert_eq!(session.execute_line("autocomplete a").unwrap(), "No words");
    }
}
