//! Interactive shell: prompts, menu loop, and textual chart rendering.

pub mod menu;
pub mod output;
pub mod prompts;
pub mod render;

use thiserror::Error;

use crate::errors::LedgerError;

pub use menu::run;

/// Errors surfaced while running interactive commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
