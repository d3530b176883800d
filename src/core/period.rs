//! Billing periods: `YYYY-MM` tokens, the selectable window bounded by the
//! last completed month, and clamping of arbitrary dates into it.

use crate::models::month_start::MonthStart;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{debug, warn};

static MONTH_TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{4})-([0-9]{2})$").expect("month token pattern"));

/// Parse an exact `YYYY-MM` token. The year range is not checked.
pub fn parse_month_token(text: &str) -> Option<MonthStart> {
    let caps = MONTH_TOKEN_RE.captures(text)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    MonthStart::from_ym(year, month)
}

/// UTC `YYYY-MM` of any instant.
pub fn format_month_token(instant: DateTime<Utc>) -> String {
    MonthStart::containing(instant).to_string()
}

/// Most recent fully elapsed month: the month of `now` minus `lag_months`.
/// Saturates at the month of `now` if the subtraction leaves chrono's range.
pub fn last_completed_month(now: DateTime<Utc>, lag_months: u32) -> MonthStart {
    let current = MonthStart::containing(now);
    current.months_before(lag_months).unwrap_or(current)
}

/// Parse `token`, or use `fallback` when it is missing or malformed.
pub fn month_or_fallback(token: Option<&str>, fallback: MonthStart) -> MonthStart {
    match token {
        Some(raw) => parse_month_token(raw).unwrap_or_else(|| {
            warn!(token = raw, fallback = %fallback, "invalid month token, falling back");
            fallback
        }),
        None => fallback,
    }
}

/// Selected month plus the upper bound users may navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BillingWindow {
    pub month_start: MonthStart,
    pub max_month_start: MonthStart,
    /// Last millisecond of the max month.
    pub max_selectable_instant: DateTime<Utc>,
}

impl BillingWindow {
    pub fn new(selected: MonthStart, max: MonthStart) -> Option<Self> {
        let max_selectable_instant = max.last_instant()?;
        Some(Self {
            month_start: selected,
            max_month_start: max,
            max_selectable_instant,
        })
    }

    pub fn is_selectable(&self, instant: DateTime<Utc>) -> bool {
        instant <= self.max_selectable_instant
    }

    /// Calendar-widget predicate; a day counts from its UTC midnight.
    pub fn is_date_selectable(&self, date: NaiveDate) -> bool {
        self.is_selectable(date.and_time(NaiveTime::MIN).and_utc())
    }

    /// Month start of `instant`, clamped down to the max month.
    pub fn clamp_to_month_start(&self, instant: DateTime<Utc>) -> MonthStart {
        self.clamp(MonthStart::containing(instant))
    }

    pub fn clamp_date(&self, date: NaiveDate) -> MonthStart {
        self.clamp(MonthStart::of_date(date))
    }

    /// The selected month, never past the max month.
    pub fn effective_month(&self) -> MonthStart {
        self.clamp(self.month_start)
    }

    fn clamp(&self, month: MonthStart) -> MonthStart {
        if month > self.max_month_start {
            debug!(month = %month, max = %self.max_month_start, "clamped to max month");
            self.max_month_start
        } else {
            month
        }
    }
}

/// Window for two `YYYY-MM` tokens. `None` if either token is invalid.
pub fn compute_selectable_window(selected: &str, max: &str) -> Option<BillingWindow> {
    let selected = parse_month_token(selected)?;
    let max = parse_month_token(max)?;
    BillingWindow::new(selected, max)
}
