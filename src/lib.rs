#![doc(test(attr(deny(warnings))))]

//! Cashlog records dated transactions into an append-only CSV ledger,
//! summarizes them over a date range, and derives chart tables (cash flow,
//! categorical breakdown, sub-category breakdown, month-over-month
//! cumulative comparison) for display.

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod store;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("cashlog=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Cashlog tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
