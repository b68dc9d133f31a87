#![doc(test(attr(deny(warnings))))]

//! Daily Ledger tracks dated spending of money or calories against a daily
//! limit and reports today's and the trailing week's totals.

pub mod config;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod report;
pub mod time;
pub mod utils;

use std::sync::Once;

pub use errors::{LedgerError, Result};
pub use ledger::{Ledger, Record};

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Daily Ledger tracing initialized.");
    });
}
