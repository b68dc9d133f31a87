use chrono::{Duration, NaiveDate};

const WEEK_DAYS: i64 = 7;

/// Open-closed range of days: `after < date <= through`.
///
/// `after` is `None` when the lower bound falls before the earliest
/// representable date, leaving the window unbounded below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsWindow {
    pub after: Option<NaiveDate>,
    pub through: NaiveDate,
}

impl StatsWindow {
    pub fn new(after: NaiveDate, through: NaiveDate) -> Self {
        Self {
            after: Some(after),
            through,
        }
    }

    /// Window covering only `date`.
    pub fn day(date: NaiveDate) -> Self {
        Self::ending(date, 1)
    }

    /// Trailing week ending on `date` inclusive; the day seven days earlier is excluded.
    pub fn week_ending(date: NaiveDate) -> Self {
        Self::ending(date, WEEK_DAYS)
    }

    fn ending(through: NaiveDate, days: i64) -> Self {
        Self {
            after: through.checked_sub_signed(Duration::days(days)),
            through,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.after.map_or(true, |after| after < date) && date <= self.through
    }
}
