//! Lists the named rank and suit sets accepted by `ranks`/`suits` settings.

use crate::error::CliError;
use crate::formatters::{format_rank, format_suit};
use riffle_engine::cards::{rank_set, suit_set};
use std::io::Write;

const RANK_SETS: [&str; 4] = ["french", "face", "royal", "num"];
const SUIT_SETS: [&str; 3] = ["french", "red", "black"];

pub fn handle_sets_command(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Rank sets:")?;
    for name in RANK_SETS {
        let ranks = rank_set(name).unwrap_or_default();
        let items: Vec<String> = ranks.iter().map(format_rank).collect();
        writeln!(out, "  {:<7} {}", name, items.join(" "))?;
    }
    writeln!(out, "Suit sets:")?;
    for name in SUIT_SETS {
        let suits = suit_set(name).unwrap_or_default();
        let items: Vec<String> = suits.iter().map(format_suit).collect();
        writeln!(out, "  {:<7} {}", name, items.join(" "))?;
    }
    Ok(())
}
