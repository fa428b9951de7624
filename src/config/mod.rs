use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".cashlog";
const TRANSACTIONS_FILE: &str = "transactions.csv";

/// Returns the application-specific data directory, defaulting to `~/.cashlog`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("CASHLOG_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Canonical path of the transactions ledger file.
pub fn transactions_file() -> PathBuf {
    app_data_dir().join(TRANSACTIONS_FILE)
}
