//! Ledger domain models and helpers.

pub mod category;
pub mod date_window;
pub mod transaction;

pub use category::Category;
pub use date_window::DateWindow;
pub use transaction::{Transaction, DATE_FORMAT};
