use crate::{
    currency::{format_fixed, CurrencyTable},
    errors::Result,
    ledger::Ledger,
};

use super::messages::{render, Messages};

const CASH_PRECISION: usize = 2;

/// Formats a money ledger's daily remainder in a chosen currency.
#[derive(Debug, Clone, Default)]
pub struct CashReport {
    pub table: CurrencyTable,
    pub messages: Messages,
}

impl CashReport {
    pub fn new(table: CurrencyTable, messages: Messages) -> Self {
        Self { table, messages }
    }

    pub fn today_cash_remained(&self, ledger: &Ledger, currency_code: &str) -> Result<String> {
        let currency = self.table.lookup(currency_code)?;
        let remainder = ledger.today_remainder();
        let converted = currency.convert(remainder);
        tracing::debug!(currency = %currency.code, remainder, converted, "cash report");

        let message = if remainder > 0.0 {
            render(
                &self.messages.cash_remaining,
                &format_fixed(converted, CASH_PRECISION),
                &currency.name,
            )
        } else if remainder == 0.0 {
            self.messages.cash_exhausted.clone()
        } else {
            render(
                &self.messages.cash_debt,
                &format_fixed(converted.abs(), CASH_PRECISION),
                &currency.name,
            )
        };
        Ok(message)
    }
}

/// Reports today's remaining money using the built-in rates and messages.
pub fn today_cash_remained(ledger: &Ledger, currency_code: &str) -> Result<String> {
    CashReport::default().today_cash_remained(ledger, currency_code)
}
