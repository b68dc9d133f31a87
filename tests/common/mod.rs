#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use daily_ledger::{time::FixedClock, Ledger, Record};

/// Day every fixture treats as "today".
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 2, 16).expect("valid fixture date")
}

pub fn days_ago(days: i64) -> NaiveDate {
    today() - Duration::days(days)
}

pub fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(today()))
}

/// Ledger whose queries resolve "today" to [`today`].
pub fn fixed_ledger(limit: f64) -> Ledger {
    Ledger::with_clock(limit, clock())
}

/// Cash ledger from the usage sample: limit 6000, 5600 spent today.
pub fn sample_cash_ledger() -> Ledger {
    let mut ledger = fixed_ledger(6000.0);
    let clock = clock();
    ledger.add_record(
        Record::with_clock(145.0, "Shopping spree", Some("15.02.2021"), clock.as_ref())
            .expect("valid record"),
    );
    ledger.add_record(
        Record::with_clock(5600.0, "Filling the grocery basket", None, clock.as_ref())
            .expect("valid record"),
    );
    ledger.add_record(
        Record::with_clock(691.0, "Taxi ride", Some("16.02.2021"), clock.as_ref())
            .expect("valid record"),
    );
    ledger
}

/// Calorie ledger from the usage sample: limit 1700, 1284 eaten today.
pub fn sample_calorie_ledger() -> Ledger {
    let mut ledger = fixed_ledger(1700.0);
    ledger.add_record(Record::on(1200.0, "A piece of cake. And another one.", today()));
    ledger.add_record(Record::on(84.0, "Yogurt", today()));
    ledger.add_record(Record::on(1140.0, "A jar of chips.", days_ago(3)));
    ledger
}
