//! Command-line argument definitions.

use crate::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "riffle",
    version,
    about = "Cut, riffle and join packets of playing cards"
)]
pub struct RiffleCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a deck, apply shuffle steps and print the result
    Shuffle {
        /// RNG seed (overrides RIFFLE_SEED and the config file)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of identical packets to start from
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        copies: Option<u32>,
        /// Append a deck of this many randomly drawn cards
        #[arg(long)]
        random_cards: Option<usize>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Steps to apply in order: cut, cut:N, riffle, riffle:N, pharo, join
        steps: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// List the named rank and suit sets
    Sets,
}
