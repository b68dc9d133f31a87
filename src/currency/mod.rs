use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

pub const RUB_RATE: f64 = 1.00;
pub const USD_RATE: f64 = 73.94;
pub const EURO_RATE: f64 = 89.61;

/// Fixed exchange rate from the ledger's base unit into a display currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub code: String,
    pub rate: f64,
    pub name: String,
}

impl CurrencyRate {
    pub fn new(code: impl Into<String>, rate: f64, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            rate,
            name: name.into(),
        }
    }

    /// Converts an amount expressed in the base unit into this currency.
    pub fn convert(&self, amount: f64) -> f64 {
        amount / self.rate
    }
}

/// Currency code to rate mapping used by the cash report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyTable {
    rates: Vec<CurrencyRate>,
}

impl CurrencyTable {
    pub fn new(rates: Vec<CurrencyRate>) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &[CurrencyRate] {
        &self.rates
    }

    /// Adds `rate`, replacing any entry with the same code.
    pub fn insert(&mut self, rate: CurrencyRate) {
        match self.rates.iter_mut().find(|existing| existing.code == rate.code) {
            Some(existing) => *existing = rate,
            None => self.rates.push(rate),
        }
    }

    pub fn lookup(&self, code: &str) -> Result<&CurrencyRate> {
        self.rates
            .iter()
            .find(|rate| rate.code == code)
            .ok_or_else(|| LedgerError::UnknownCurrency(code.to_string()))
    }
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::new(vec![
            CurrencyRate::new("rub", RUB_RATE, "руб"),
            CurrencyRate::new("usd", USD_RATE, "USD"),
            CurrencyRate::new("eur", EURO_RATE, "Euro"),
        ])
    }
}

/// Renders `value` with exactly `precision` digits after the decimal point.
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_knows_three_currencies() {
        let table = CurrencyTable::default();
        let codes: Vec<_> = table.rates().iter().map(|rate| rate.code.as_str()).collect();
        assert_eq!(codes, ["rub", "usd", "eur"]);
        assert_eq!(table.lookup("usd").unwrap().name, "USD");
        assert_eq!(table.lookup("eur").unwrap().rate, EURO_RATE);
    }

    #[test]
    fn codes_are_case_sensitive() {
        let table = CurrencyTable::default();
        for code in ["USD", "Rub", "EUR"] {
            let err = table.lookup(code).unwrap_err();
            assert!(
                matches!(err, LedgerError::UnknownCurrency(ref got) if got == code),
                "{code} should be unknown"
            );
        }
    }

    #[test]
    fn unknown_code_is_an_error() {
        let err = CurrencyTable::default().lookup("gbp").unwrap_err();
        assert!(matches!(err, LedgerError::UnknownCurrency(ref code) if code == "gbp"));
    }

    #[test]
    fn insert_replaces_existing_code() {
        let mut table = CurrencyTable::default();
        table.insert(CurrencyRate::new("usd", 70.0, "USD"));
        table.insert(CurrencyRate::new("gbp", 100.0, "GBP"));
        assert_eq!(table.rates().len(), 4);
        assert_eq!(table.lookup("usd").unwrap().rate, 70.0);
    }

    #[test]
    fn fixed_formatting_pads_and_rounds() {
        assert_eq!(format_fixed(400.0, 2), "400.00");
        assert_eq!(format_fixed(2.0 / 3.0, 2), "0.67");
        assert_eq!(format_fixed(-1.005, 2), "-1.00");
    }
}
