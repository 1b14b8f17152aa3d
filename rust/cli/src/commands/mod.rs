//! Command handler modules for the riffle CLI.
//!
//! Each command lives in its own module with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

pub mod cfg;
pub mod sets;
pub mod shuffle;

pub use cfg::handle_cfg_command;
pub use sets::handle_sets_command;
pub use shuffle::handle_shuffle_command;
