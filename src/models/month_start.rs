use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveTime, TimeDelta, Utc};
use serde::Serialize;
use std::fmt;

/// 00:00:00.000 UTC on the first day of a month.
///
/// Only built through the constructors below, so the day is always 1 and the
/// time always midnight, whatever the caller's local timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct MonthStart(DateTime<Utc>);

impl MonthStart {
    /// `None` when `month` is outside 1..=12 or the year is out of chrono's range.
    pub fn from_ym(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self::from_first_day(first))
    }

    /// Month start of the UTC month `instant` falls in.
    pub fn containing(instant: DateTime<Utc>) -> Self {
        Self::of_date(instant.date_naive())
    }

    /// Month start of the calendar month `date` falls in.
    pub fn of_date(date: NaiveDate) -> Self {
        // day 1 exists in every month
        Self::from_first_day(date.with_day(1).unwrap_or(date))
    }

    fn from_first_day(first: NaiveDate) -> Self {
        Self(first.and_time(NaiveTime::MIN).and_utc())
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// 1-based month.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn next(&self) -> Option<Self> {
        self.0.checked_add_months(Months::new(1)).map(Self)
    }

    pub fn months_before(&self, months: u32) -> Option<Self> {
        self.0.checked_sub_months(Months::new(months)).map(Self)
    }

    /// Last millisecond of this month (`next() - 1ms`).
    pub fn last_instant(&self) -> Option<DateTime<Utc>> {
        self.next()
            .map(|next| next.instant() - TimeDelta::milliseconds(1))
    }
}

/// The `YYYY-MM` month token.
impl fmt::Display for MonthStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
