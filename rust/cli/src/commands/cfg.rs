//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of every value
//! (default, environment, or configuration file) as pretty JSON:
//!
//! ```json
//! {
//!   "copies": {
//!     "value": 1,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()
        .map_err(|e| CliError::Config(format!("Invalid configuration: {}", e)))?;

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "copies": {
            "value": config.copies,
            "source": sources.copies,
        },
        "ranks": {
            "value": config.ranks,
            "source": sources.ranks,
        },
        "suits": {
            "value": config.suits,
            "source": sources.suits,
        },
        "plan": {
            "value": config.plan,
            "source": sources.plan,
        },
        "random_cards": {
            "value": config.random_cards,
            "source": sources.random_cards,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
