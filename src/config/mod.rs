use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    currency::CurrencyTable,
    errors::Result,
    report::{CalorieReport, CashReport, Messages},
};

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_ENV: &str = "DAILY_LEDGER_CONFIG";

/// Currency rates and message templates used by the reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currencies: CurrencyTable,
    pub messages: Messages,
}

impl Config {
    pub fn from_json_str(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let config = Self::from_json_str(&data)?;
        tracing::info!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Loads the file named by [`CONFIG_ENV`], or returns defaults when unset.
    pub fn from_env() -> Result<Self> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn cash_report(&self) -> CashReport {
        CashReport::new(self.currencies.clone(), self.messages.clone())
    }

    pub fn calorie_report(&self) -> CalorieReport {
        CalorieReport::new(self.messages.clone())
    }
}
