//! Command line parsing.
//!
//! A command is one line of whitespace separated tokens: a verb followed by
//! a fixed number of arguments.

use std::fmt;
use std::str::FromStr;

use crate::error::command::CommandError;

/// A parsed query command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `search <word>`
    Search(String),
    /// `autocomplete <prefix>`
    AutoComplete(String),
    /// `reverse <suffix>`
    Reverse(String),
    /// `full <prefix> <suffix>`
    Full {
        /// Required start of every word
        prefix: String,
        /// Required end of every word
        suffix: String,
    },
    /// `topk <k>`
    TopK(usize),
    /// `count <word>`
    Count(String),
    /// `stats`
    Stats,
    /// `help`
    Help,
}

impl Command {
    /// The verb naming this command.
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Search(_) => "search",
            Command::AutoComplete(_) => "autocomplete",
            Command::Reverse(_) => "reverse",
            Command::Full { .. } => "full",
            Command::TopK(_) => "topk",
            Command::Count(_) => "count",
            Command::Stats => "stats",
            Command::Help => "help",
        }
    }
}

/// Usage text listing every command.
pub const USAGE: &str = "\
Commands:
  search <word>            exact lookup, prints true or false
  autocomplete <prefix>    words starting with <prefix>
  reverse <suffix>         words ending with <suffix>
  full <prefix> <suffix>   words starting with <prefix> and ending with <suffix>
  topk <k>                 the k most frequent words
  count <word>             occurrences of <word>
  stats                    size of the index
  help                     this text";

fn expect_args<'s, 'a>(
    verb: &str,
    args: &'s [&'a str],
    expected: usize,
) -> Result<&'s [&'a str], CommandError> {
    if args.len() != expected {
        return Err(CommandError::WrongArity {
            command: verb.to_string(),
            expected,
            actual: args.len(),
        });
    }
    Ok(args)
}

fn parse_k(raw: &str) -> Result<usize, CommandError> {
    let invalid = |message: String| CommandError::InvalidArgument {
        command: "topk".to_string(),
        message,
    };
    let k: i64 = raw
        .parse()
        .map_err(|_| invalid(format!("'{raw}' is not an integer")))?;
    if k < 0 {
        return Err(invalid(format!("k must not be negative, got {k}")));
    }
    usize::try_from(k).map_err(|_| invalid(format!("k is too large: {k}")))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().ok_or(CommandError::Empty)?.to_lowercase();
        let args: Vec<&str> = tokens.collect();

        let command = match verb.as_str() {
            "search" => Command::Search(expect_args(&verb, &args, 1)?[0].to_string()),
            "autocomplete" => Command::AutoComplete(expect_args(&verb, &args, 1)?[0].to_string()),
            "reverse" => Command::Reverse(expect_args(&verb, &args, 1)?[0].to_string()),
            "full" => {
                let args = expect_args(&verb, &args, 2)?;
                Command::Full {
                    prefix: args[0].to_string(),
                    suffix: args[1].to_string(),
                }
            }
            "topk" => Command::TopK(parse_k(expect_args(&verb, &args, 1)?[0])?),
            "count" => Command::Count(expect_args(&verb, &args, 1)?[0].to_string()),
            "stats" => {
                expect_args(&verb, &args, 0)?;
                Command::Stats
            }
            "help" => Command::Help,
            _ => return Err(CommandError::UnknownCommand(verb)),
        };
        Ok(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Search(word) | Command::Count(word) => write!(f, "{} {word}", self.verb()),
            Command::AutoComplete(prefix) => write!(f, "{} {prefix}", self.verb()),
            Command::Reverse(suffix) => write!(f, "{} {suffix}", self.verb()),
            Command::Full { prefix, suffix } => write!(f, "{} {prefix} {suffix}", self.verb()),
            Command::TopK(k) => write!(f, "{} {k}", self.verb()),
            Command::Stats | Command::Help => f.write_str(self.verb()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trips_through_parse() {
        let commands = [
            Command::Search("word".into()),
            Command::Full {
                prefix: "ca".into(),
                suffix: "t".into(),
            },
            Command::TopK(3),
            Command::Stats,
        ];
        for command in commands {
            assert_eq!(command.to_string().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn test_verb_is_case_insensitive_but_arguments_are_kept() {
        assert_eq!(
            "SEARCH Hello".parse::<Command>().unwrap(),
            Command::Search("Hello".into())
        );
    }
}
