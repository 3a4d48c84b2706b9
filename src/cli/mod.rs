//! Interactive terminal front end.
//!
//! A thin wrapper over the core: prompts gather raw input, the Validator
//! decides, and the store lives for the process lifetime.

mod menu;
pub mod output;

pub use menu::run_cli;

use thiserror::Error;

/// Failures surfaced by the terminal front end itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
