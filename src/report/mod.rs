//! Status messages built on top of a ledger's daily remainder.

pub mod calories;
pub mod cash;
pub mod messages;

pub use calories::{calories_remained, CalorieReport};
pub use cash::{today_cash_remained, CashReport};
pub use messages::Messages;
