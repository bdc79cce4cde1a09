//! Command error module.
//!
//! This module defines error types produced while parsing a query command
//! line into a typed command.

use thiserror::Error;

/// Errors that can occur while parsing a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command line held no tokens.
    #[error("Empty command")]
    Empty,

    /// The verb is not a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The command received the wrong number of arguments.
    #[error("Command '{command}' expects {expected} argument(s), got {actual}")]
    WrongArity {
        /// The command verb
        command: String,
        /// Number of arguments the command takes
        expected: usize,
        /// Number of arguments supplied
        actual: usize,
    },

    /// An argument could not be interpreted.
    #[error("Invalid argument for '{command}': {message}")]
    InvalidArgument {
        /// The command verb
        command: String,
        /// What was wrong with the argument
        message: String,
    },
}
