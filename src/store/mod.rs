//! Persistence for the append-only transaction ledger.

pub mod csv_store;

pub use csv_store::CsvStore;

use crate::errors::LedgerError;

/// Convenience alias used by storage operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
