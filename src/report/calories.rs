use crate::ledger::Ledger;

use super::messages::{render, Messages};

/// Formats a calorie ledger's daily remainder.
#[derive(Debug, Clone, Default)]
pub struct CalorieReport {
    pub messages: Messages,
}

impl CalorieReport {
    pub fn new(messages: Messages) -> Self {
        Self { messages }
    }

    pub fn calories_remained(&self, ledger: &Ledger) -> String {
        let remainder = ledger.today_remainder();
        tracing::debug!(remainder, "calorie report");
        if remainder > 0.0 {
            render(&self.messages.calories_remaining, &remainder.to_string(), "")
        } else {
            self.messages.calories_exhausted.clone()
        }
    }
}

/// Reports today's remaining calories using the built-in messages.
pub fn calories_remained(ledger: &Ledger) -> String {
    CalorieReport::default().calories_remained(ledger)
}
