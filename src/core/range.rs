// src/core/range.rs

use crate::core::period::parse_month_token;
use crate::errors::{AppError, AppResult};
use crate::models::date_range::HalfOpenRange;
use crate::models::month_start::MonthStart;
use chrono::{Days, NaiveDate, NaiveTime};
use tracing::debug;

/// Inclusive calendar range -> half-open UTC range.
///
/// `from` starts at its UTC midnight; the end is the UTC midnight of the day
/// after `to`, so the whole of `to` is covered.
pub fn to_half_open(from: NaiveDate, to: NaiveDate) -> AppResult<HalfOpenRange> {
    if from > to {
        return Err(AppError::InvalidRange(format!(
            "start {} is after end {}",
            from, to
        )));
    }

    let day_after = to
        .checked_add_days(Days::new(1))
        .ok_or_else(|| AppError::InvalidRange(format!("no day after {}", to)))?;

    let range = HalfOpenRange {
        from: from.and_time(NaiveTime::MIN).and_utc(),
        to_exclusive: day_after.and_time(NaiveTime::MIN).and_utc(),
    };
    debug!(%from, %to, "inclusive range converted to half-open");
    Ok(range)
}

/// `[month start, next month start)`.
pub fn month_range(month: MonthStart) -> AppResult<HalfOpenRange> {
    let (first, last) = month_bounds(month)?;
    to_half_open(first, last)
}

/// Parse a textual range into inclusive bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (first, last) = if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidRange(
                "start and end must have same format".to_string(),
            ));
        }

        let (first, _) = parse_single(start)?;
        let (_, last) = parse_single(end)?;
        (first, last)
    } else {
        parse_single(r)?
    };

    if first > last {
        return Err(AppError::InvalidRange(format!(
            "start {} is after end {}",
            first, last
        )));
    }

    Ok((first, last))
}

fn parse_single(s: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match s.len() {
        // YYYY
        4 => {
            // i32::from_str would also take "+202" or "-001"
            if !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AppError::InvalidRange(format!("invalid year '{}'", s)));
            }
            let y: i32 = s
                .parse()
                .map_err(|_| AppError::InvalidRange(format!("invalid year '{}'", s)))?;
            let first = MonthStart::from_ym(y, 1)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year '{}'", s)))?;
            let december = MonthStart::from_ym(y, 12)
                .ok_or_else(|| AppError::InvalidRange(format!("invalid year '{}'", s)))?;
            let (_, last) = month_bounds(december)?;
            Ok((first.date(), last))
        }
        // YYYY-MM
        7 => {
            let month = parse_month_token(s).ok_or_else(|| AppError::InvalidMonth(s.to_string()))?;
            month_bounds(month)
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| AppError::InvalidDate(s.to_string()))?;
            Ok((d, d))
        }
        _ => Err(AppError::InvalidRange(format!(
            "unsupported range format '{}'",
            s
        ))),
    }
}

/// First and last calendar day of `month`.
fn month_bounds(month: MonthStart) -> AppResult<(NaiveDate, NaiveDate)> {
    let next = month
        .next()
        .ok_or_else(|| AppError::InvalidRange(format!("no month after {}", month)))?;
    let last = next
        .date()
        .checked_sub_days(Days::new(1))
        .ok_or_else(|| AppError::InvalidRange(format!("no last day for {}", month)))?;
    Ok((month.date(), last))
}
