//! Dated records, the ledger that owns them, and windowed aggregation.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;
pub mod window;

pub use ledger::Ledger;
pub use record::{parse_date, Record, DATE_FORMAT};
pub use window::StatsWindow;
