use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// RFC 3339 instant, or a plain `YYYY-MM-DD` taken at UTC midnight.
pub fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    parse_date(s).map(|d| d.and_time(NaiveTime::MIN).and_utc())
}
