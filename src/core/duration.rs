//! Duration notation conversion: decimal hours <-> "1h30", "1:30", "90m", "1.5".
//!
//! Both directions are pure. Formatting quantizes to whole minutes, so
//! `parse_duration(&format_hours(x))` recovers `x` within one minute.

use crate::models::hours_notation::HoursNotation;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::debug;

/// Rejection returned by [`parse_duration`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Blank input. Callers usually treat this as "unset", not as a mistake.
    #[error("Empty duration")]
    Empty,

    /// Input matched none of the accepted notations. Carries the raw text.
    #[error("Unrecognized duration: '{0}'")]
    Unrecognized(String),
}

// Rules are tried in this order. `[0-9]` instead of `\d` keeps non-ASCII
// digits out.
static DECIMAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?)([0-9]+(?:\.[0-9]+)?)h?$").expect("decimal hours pattern")
});
static HOUR_MINUTE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)([0-9]+)h([0-9]{1,2})$").expect("hour-minute pattern"));
static COLON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(-?)([0-9]+):([0-9]{1,2})$").expect("colon pattern"));
static MINUTES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?)([0-9]+(?:\.[0-9]+)?)m(?:in(?:s)?)?$").expect("minutes pattern")
});

/// Render decimal hours as `{h}h{m}` (or `{h}h` on a whole hour).
///
/// Hours are truncated toward zero and the remainder rounded to the nearest
/// minute; 60 rounded minutes carry into the hour. Negative values keep a
/// leading `-` on the whole quantity (`-1.5` -> `-1h30`). Non-finite input
/// yields an empty string, the "unset" display.
pub fn format_hours(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let magnitude = value.abs();
    let mut whole = magnitude.trunc();
    let mut minutes = ((magnitude - whole) * 60.0).round();

    if minutes >= 60.0 {
        whole += 1.0;
        minutes = 0.0;
    }

    let sign = if value < 0.0 && (whole > 0.0 || minutes > 0.0) {
        "-"
    } else {
        ""
    };

    if minutes > 0.0 {
        format!("{sign}{whole:.0}h{minutes:.0}")
    } else {
        format!("{sign}{whole:.0}h")
    }
}

/// Render decimal hours with two decimals (`1.50`). Empty for non-finite input.
pub fn format_decimal_hours(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let rounded = (value * 100.0).round() / 100.0;
    // avoid "-0.00"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.2}")
}

pub fn render_hours(value: f64, notation: HoursNotation) -> String {
    match notation {
        HoursNotation::HourMinute => format_hours(value),
        HoursNotation::Decimal => format_decimal_hours(value),
    }
}

/// Parse a user-entered duration into decimal hours.
///
/// Input is trimmed, lowercased and a decimal comma becomes a point. Accepted
/// notations, first match wins:
///
/// 1. `1.5`, `1.5h`, `2` - decimal hours
/// 2. `1h30` - hours and minutes (minutes are not capped: `1h90` is 2.5)
/// 3. `1:30` - same as above
/// 4. `90m`, `45min`, `30mins` - minutes
///
/// A leading `-` negates the whole duration. Blank input is
/// [`ParseError::Empty`]; anything else is [`ParseError::Unrecognized`].
pub fn parse_duration(text: &str) -> Result<f64, ParseError> {
    let normalized = text.trim().to_lowercase().replace(',', ".");
    if normalized.is_empty() {
        return Err(ParseError::Empty);
    }

    match match_rules(&normalized) {
        Some(hours) if hours.is_finite() => {
            debug!(input = %text, hours, "parsed duration");
            // no "-0"
            Ok(if hours == 0.0 { 0.0 } else { hours })
        }
        _ => {
            debug!(input = %text, "unrecognized duration");
            Err(ParseError::Unrecognized(text.to_string()))
        }
    }
}

/// Like [`parse_duration`] but blank input is `Ok(None)`.
pub fn parse_optional_duration(text: &str) -> Result<Option<f64>, ParseError> {
    match parse_duration(text) {
        Ok(hours) => Ok(Some(hours)),
        Err(ParseError::Empty) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Total of several entries, as shown on report footers.
/// Blank entries are skipped; the first unrecognized one aborts the sum.
pub fn sum_durations<'a, I>(texts: I) -> Result<f64, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut total = 0.0;
    for text in texts {
        if let Some(hours) = parse_optional_duration(text)? {
            total += hours;
        }
    }
    Ok(total)
}

fn match_rules(normalized: &str) -> Option<f64> {
    if let Some(caps) = DECIMAL_RE.captures(normalized) {
        let hours = literal(&caps[2])?;
        return Some(signed(&caps[1], hours));
    }

    if let Some(caps) = HOUR_MINUTE_RE
        .captures(normalized)
        .or_else(|| COLON_RE.captures(normalized))
    {
        let hours = literal(&caps[2])?;
        let minutes = literal(&caps[3])?;
        return Some(signed(&caps[1], hours + minutes / 60.0));
    }

    if let Some(caps) = MINUTES_RE.captures(normalized) {
        let minutes = literal(&caps[2])?;
        return Some(signed(&caps[1], minutes / 60.0));
    }

    None
}

fn literal(digits: &str) -> Option<f64> {
    digits.parse::<f64>().ok()
}

fn signed(sign: &str, magnitude: f64) -> f64 {
    if sign == "-" { -magnitude } else { magnitude }
}
