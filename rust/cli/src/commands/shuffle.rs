//! Shuffle command handler.
//!
//! Builds a deck from the resolved configuration, optionally adds a second
//! deck of randomly drawn cards, applies the shuffle plan and prints the
//! result. Command-line values override the environment, which overrides
//! the configuration file.

use crate::OutputFormat;
use crate::config;
use crate::error::CliError;
use crate::formatters::format_deck_short;
use crate::ui;
use riffle_engine::deck::Deck;
use std::io::Write;
use tracing::info;

/// Handle the shuffle command.
///
/// # Arguments
///
/// * `seed` - Optional RNG seed; falls back to the configured seed, then a random one
/// * `copies` - Number of identical packets to start from
/// * `random_cards` - Size of an extra deck of random cards appended as its own packet
/// * `format` - Output format for the shuffled deck
/// * `steps` - Shuffle steps (`cut`, `cut:N`, `riffle`, `riffle:N`, `pharo`, `join`)
/// * `out` - Output stream for the shuffled deck
/// * `err` - Error stream for warnings
///
/// # Errors
///
/// Returns `CliError::Config` for an invalid configuration and
/// `CliError::Engine` when a step cannot be applied to the deck.
pub fn handle_shuffle_command(
    seed: Option<u64>,
    copies: Option<u32>,
    random_cards: Option<usize>,
    format: OutputFormat,
    steps: Vec<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = config::load()?;
    if let Some(c) = copies {
        cfg.copies = c;
    }
    if let Some(n) = random_cards {
        cfg.random_cards = n;
    }
    if !steps.is_empty() {
        cfg.plan = steps;
    }
    config::validate(&cfg)?;

    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let options = cfg.deck_options()?;
    let plan = cfg.shuffle_plan()?;

    let mut deck = Deck::with_options(&options, seed)?;
    if cfg.random_cards > 0 {
        let extra = Deck::with_random_cards(
            cfg.random_cards,
            &options.ranks,
            &options.suits,
            seed.wrapping_add(1),
        )?;
        deck.extend(&extra);
    }
    deck.apply_plan(&plan)?;
    info!(seed, plan = %plan, cards = deck.len(), "shuffled deck");

    if deck.packet_count() > 1 {
        ui::display_warning(
            err,
            &format!(
                "deck left in {} packets; add a 'join' step to merge them",
                deck.packet_count()
            ),
        )?;
    }

    match format {
        OutputFormat::Text => writeln!(out, "{}", deck)?,
        OutputFormat::Short => writeln!(out, "{}", format_deck_short(&deck))?,
        OutputFormat::Json => {
            let display = serde_json::json!({
                "seed": seed,
                "plan": plan,
                "packets": deck.packets(),
            });
            let json_str =
                serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
            writeln!(out, "{}", json_str)?;
        }
    }
    Ok(())
}
