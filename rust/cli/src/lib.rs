//! # riffle CLI Library
//!
//! Command-line driver for the riffle packet/deck engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `shuffle`: Build a deck, apply shuffle steps and print the result
//! - `cfg`: Display current configuration settings and their sources
//! - `sets`: List the named rank and suit sets
//!
//! ## Configuration
//!
//! Values are resolved from defaults, then the TOML file named by
//! `RIFFLE_CONFIG`, then `RIFFLE_SEED`, `RIFFLE_COPIES`, `RIFFLE_RANKS`,
//! `RIFFLE_SUITS`, `RIFFLE_PLAN` and `RIFFLE_RANDOM_CARDS`, then command-line flags.

use clap::{Parser, ValueEnum};
use std::io::Write;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
#[macro_use]
mod macros;
pub mod ui;

use cli::{Commands, RiffleCli};
use commands::{handle_cfg_command, handle_sets_command, handle_shuffle_command};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["riffle", "shuffle", "--seed", "42", "pharo"];
/// let code = riffle_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["shuffle", "cfg", "sets"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match RiffleCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    write_or_exit!(out, "{}", e);
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Usage: riffle <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: riffle --help");
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Shuffle {
            seed,
            copies,
            random_cards,
            format,
            steps,
        } => handle_shuffle_command(seed, copies, random_cards, format, steps, out, err),
        Commands::Cfg => handle_cfg_command(out),
        Commands::Sets => handle_sets_command(out),
    };
    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

/// Output format for the `shuffle` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full card names, one per line, packets separated by a rule.
    Text,
    /// Short notation, one bracketed line per packet.
    Short,
    /// Pretty JSON with the seed, plan and packets.
    Json,
}
