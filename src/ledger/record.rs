use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{LedgerError, Result},
    time::{Clock, SystemClock},
};

/// Textual date layout accepted when constructing records.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One dated amount of money or calories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    amount: f64,
    comment: String,
    date: NaiveDate,
}

impl Record {
    /// Builds a record dated `date` (`DD.MM.YYYY`), or today when `date` is `None`.
    pub fn new(amount: f64, comment: impl Into<String>, date: Option<&str>) -> Result<Self> {
        Self::with_clock(amount, comment, date, &SystemClock)
    }

    /// Same as [`Record::new`] but reads "today" from `clock`.
    pub fn with_clock(
        amount: f64,
        comment: impl Into<String>,
        date: Option<&str>,
        clock: &dyn Clock,
    ) -> Result<Self> {
        let date = match date {
            Some(raw) => parse_date(raw)?,
            None => clock.today(),
        };
        Ok(Self::on(amount, comment, date))
    }

    pub fn on(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Parses a zero-padded `DD.MM.YYYY` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    if !has_date_shape(raw) {
        return Err(LedgerError::Parse(raw.to_string()));
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .filter(|date| date.year() >= 1)
        .ok_or_else(|| LedgerError::Parse(raw.to_string()))
}

// chrono accepts unpadded fields for %d and %m, the layout here does not.
fn has_date_shape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        })
}
