//! Kilo - Main entrypoint.
//!
//! Loads configuration, initializes logging, builds the word index from a text
//! source and answers query commands read from the command line or stdin.

use clap::{Parser, Subcommand};
use kilo_lib::config::{ConfigLoader, KiloConfig, LogConfig, ENV_PREFIX};
use kilo_lib::error::{ErrorContext, ErrorReporter, KiloError, KiloResult, TracingErrorReporter};
use kilo_lib::session::Session;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Kilo.
#[derive(Parser, Debug)]
#[clap(name = "kilo", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Load a text source, then answer commands read from stdin
    Repl {
        /// Text file to index
        #[clap(value_parser)]
        source: PathBuf,
    },

    /// Load a text source and answer a single command
    Exec {
        /// Text file to index
        #[clap(value_parser)]
        source: PathBuf,

        /// The command and its arguments, e.g. `autocomplete ca`
        #[clap(required = true, num_args = 1.., allow_hyphen_values = true)]
        query: Vec<String>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system. Logs go to stderr, results to stdout.
fn init_logging(log: &LogConfig) -> KiloResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| KiloError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Main entry point for the application.
fn main() -> KiloResult<()> {
    let args = <Args as clap::Parser>::parse();
    let config_loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    // Configuration comes first since it decides how logging is set up
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };
    init_logging(&config.log)?;

    let reporter: Arc<dyn ErrorReporter> = Arc::new(TracingErrorReporter);

    match args.command {
        None => {
            // The first stdin line names the source, the rest are commands
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut source = String::new();
            input.read_line(&mut source)?;

            let mut session = Session::new(config, reporter);
            session.load_source(source.trim());
            session.run(input, io::stdout().lock())?;
            Ok(())
        }
        Some(Command::Repl { source }) => {
            let mut session = Session::new(config, reporter);
            session.load_source(&source);
            session.run(io::stdin().lock(), io::stdout().lock())?;
            Ok(())
        }
        Some(Command::Exec { source, query }) => {
            let mut session = Session::new(config, reporter.clone());
            session.load_source(&source);
            let line = query.join(" ");
            match session.execute_line(&line) {
                Ok(rendered) => {
                    println!("{rendered}");
                    Ok(())
                }
                Err(e) => {
                    reporter.report(ErrorContext::new(e, "dispatch").with_details(line));
                    process::exit(2);
                }
            }
        }
        Some(Command::Validate) => {
            info!("Configuration validated successfully");
            println!("Configuration is valid");
            Ok(())
        }
        Some(Command::GenConfig { output }) => {
            info!("Generating default configuration");
            let default_config = KiloConfig::default();

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| KiloError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}
