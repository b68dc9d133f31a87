use std::{fmt, sync::Arc};

use chrono::NaiveDate;

use super::{record::Record, window::StatsWindow};
use crate::time::{Clock, SystemClock};

/// Append-only record store for one tracked quantity, bounded by a daily limit.
pub struct Ledger {
    limit: f64,
    records: Vec<Record>,
    clock: Arc<dyn Clock>,
}

impl Ledger {
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, Arc::new(SystemClock))
    }

    pub fn with_clock(limit: f64, clock: Arc<dyn Clock>) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock,
        }
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The clock used to resolve "today" for every query.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    pub fn add_record(&mut self, record: Record) {
        tracing::debug!(
            amount = record.amount(),
            date = %record.date(),
            comment = record.comment(),
            "record added"
        );
        self.records.push(record);
    }

    /// Sum of amounts dated today.
    pub fn today_stats(&self) -> f64 {
        self.stats_on(self.clock.today())
    }

    /// Sum of amounts over the trailing week ending today.
    pub fn week_stats(&self) -> f64 {
        self.week_stats_ending(self.clock.today())
    }

    /// `limit - today_stats()`; negative once the limit is exceeded.
    pub fn today_remainder(&self) -> f64 {
        self.remainder_on(self.clock.today())
    }

    pub fn stats_on(&self, date: NaiveDate) -> f64 {
        self.stats_in(StatsWindow::day(date))
    }

    pub fn week_stats_ending(&self, date: NaiveDate) -> f64 {
        self.stats_in(StatsWindow::week_ending(date))
    }

    pub fn remainder_on(&self, date: NaiveDate) -> f64 {
        self.limit - self.stats_on(date)
    }

    pub fn stats_in(&self, window: StatsWindow) -> f64 {
        let total: f64 = self
            .records
            .iter()
            .filter(|record| window.contains(record.date()))
            .map(Record::amount)
            .sum();
        tracing::debug!(
            after = ?window.after,
            through = %window.through,
            total,
            "window aggregated"
        );
        total
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("limit", &self.limit)
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::FixedClock;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 2, 16).unwrap()
    }

    fn ledger(limit: f64) -> Ledger {
        Ledger::with_clock(limit, Arc::new(FixedClock(today())))
    }

    #[test]
    fn empty_ledger_sums_to_zero() {
        let ledger = ledger(100.0);
        assert!(ledger.is_empty());
        assert_eq!(ledger.today_stats(), 0.0);
        assert_eq!(ledger.week_stats(), 0.0);
        assert_eq!(ledger.today_remainder(), 100.0);
    }

    #[test]
    fn preserves_insertion_order() {
        let mut ledger = ledger(0.0);
        ledger.add_record(Record::on(3.0, "c", today()));
        ledger.add_record(Record::on(1.0, "a", today()));
        ledger.add_record(Record::on(1.0, "a", today()));
        let comments: Vec<_> = ledger.records().iter().map(Record::comment).collect();
        assert_eq!(comments, ["c", "a", "a"]);
        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.today_stats(), 5.0);
    }

    #[test]
    fn undated_records_follow_ledger_clock() {
        let mut ledger = ledger(100.0);
        let record = Record::with_clock(30.0, "lunch", None, ledger.clock()).unwrap();
        assert_eq!(record.date(), today());
        ledger.add_record(record);
        assert_eq!(ledger.today_remainder(), 70.0);
    }

    #[test]
    fn remainder_can_go_negative() {
        let mut ledger = ledger(-10.0);
        ledger.add_record(Record::on(5.0, "over", today()));
        assert_eq!(ledger.today_remainder(), -15.0);
    }

    #[test]
    fn queries_are_idempotent() {
        let mut ledger = ledger(50.0);
        ledger.add_record(Record::on(20.0, "x", today()));
        assert_eq!(ledger.today_stats(), ledger.today_stats());
        assert_eq!(ledger.week_stats(), ledger.week_stats());
        assert_eq!(ledger.today_remainder(), ledger.today_remainder());
    }
}
