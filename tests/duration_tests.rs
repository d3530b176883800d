use getime::core::duration::{
    ParseError, format_decimal_hours, format_hours, parse_duration, parse_optional_duration,
    render_hours, sum_durations,
};
use getime::models::hours_notation::HoursNotation;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_format_hours_basic() {
    assert_eq!(format_hours(1.5), "1h30");
    assert_eq!(format_hours(2.0), "2h");
    assert_eq!(format_hours(0.25), "0h15");
    assert_eq!(format_hours(0.0), "0h");
    assert_eq!(format_hours(8.75), "8h45");
}

#[test]
fn test_format_hours_carries_sixty_minutes() {
    assert_eq!(format_hours(1.9999), "2h");
    assert_eq!(format_hours(0.9999), "1h");
    assert_eq!(format_hours(-1.9999), "-2h");
}

#[test]
fn test_format_hours_rounds_to_minute() {
    // 0.498 min rounds down
    assert_eq!(format_hours(1.0083), "1h");
    // 1/60 h is exactly one minute
    assert_eq!(format_hours(1.0 / 60.0), "0h1");
}

#[test]
fn test_format_hours_negative_truncates_toward_zero() {
    assert_eq!(format_hours(-1.5), "-1h30");
    assert_eq!(format_hours(-0.5), "-0h30");
    assert_eq!(format_hours(-2.0), "-2h");
    // rounds to nothing: no sign
    assert_eq!(format_hours(-0.0001), "0h");
}

#[test]
fn test_format_hours_non_finite_is_empty() {
    assert_eq!(format_hours(f64::NAN), "");
    assert_eq!(format_hours(f64::INFINITY), "");
    assert_eq!(format_hours(f64::NEG_INFINITY), "");
}

#[test]
fn test_format_decimal_hours() {
    assert_eq!(format_decimal_hours(1.5), "1.50");
    assert_eq!(format_decimal_hours(2.0), "2.00");
    assert_eq!(format_decimal_hours(-0.001), "0.00");
    assert_eq!(format_decimal_hours(f64::NAN), "");
    assert_eq!(render_hours(1.5, HoursNotation::Decimal), "1.50");
    assert_eq!(render_hours(1.5, HoursNotation::HourMinute), "1h30");
}

#[test]
fn test_parse_decimal_notation() {
    assert_eq!(parse_duration("1.5"), Ok(1.5));
    assert_eq!(parse_duration("1.5h"), Ok(1.5));
    assert_eq!(parse_duration("2"), Ok(2.0));
    assert_eq!(parse_duration("2h"), Ok(2.0));
    assert_eq!(parse_duration("-0.5"), Ok(-0.5));
}

#[test]
fn test_parse_decimal_comma_case_and_whitespace() {
    assert_eq!(parse_duration("1,5"), Ok(1.5));
    assert_eq!(parse_duration("  1.5H "), Ok(1.5));
    assert_eq!(parse_duration("\t1H30\n"), Ok(1.5));
    assert_eq!(parse_duration("45MIN"), Ok(0.75));
}

#[test]
fn test_parse_hour_minute_notation() {
    assert_eq!(parse_duration("1h30"), Ok(1.5));
    assert_eq!(parse_duration("0h45"), Ok(0.75));
    assert_eq!(parse_duration("2h0"), Ok(2.0));
    assert_close(parse_duration("1h5").unwrap(), 1.0 + 5.0 / 60.0);
}

#[test]
fn test_parse_minutes_overflow_is_tolerated() {
    assert_eq!(parse_duration("1h90"), Ok(2.5));
    assert_eq!(parse_duration("0:90"), Ok(1.5));
}

#[test]
fn test_parse_colon_notation() {
    assert_eq!(parse_duration("1:30"), Ok(1.5));
    assert_eq!(parse_duration("01:30"), Ok(1.5));
    assert_eq!(parse_duration("10:45"), Ok(10.75));
}

#[test]
fn test_parse_minutes_notation() {
    assert_eq!(parse_duration("90m"), Ok(1.5));
    assert_eq!(parse_duration("45min"), Ok(0.75));
    assert_eq!(parse_duration("30mins"), Ok(0.5));
    assert_eq!(parse_duration("7.5m"), Ok(0.125));
}

#[test]
fn test_parse_sign_applies_to_whole_duration() {
    assert_eq!(parse_duration("-1h30"), Ok(-1.5));
    assert_eq!(parse_duration("-0h30"), Ok(-0.5));
    assert_eq!(parse_duration("-1:30"), Ok(-1.5));
    assert_eq!(parse_duration("-30m"), Ok(-0.5));
    assert_eq!(parse_duration("-0"), Ok(0.0));
}

#[test]
fn test_parse_empty_is_distinct_from_error() {
    assert_eq!(parse_duration(""), Err(ParseError::Empty));
    assert_eq!(parse_duration("   "), Err(ParseError::Empty));
    assert_eq!(parse_optional_duration(""), Ok(None));
    assert_eq!(parse_optional_duration("1h"), Ok(Some(1.0)));
}

#[test]
fn test_parse_rejects_unrecognized_input() {
    for bad in [
        "abc", "1h3x", "1:", ":30", "1h300", "1:300", "1.5.2", "1.5 h", "1 h 30", "h30", "--1",
        "1e3", "1min30", "1.h", "٣", "+1",
    ] {
        assert_eq!(
            parse_duration(bad),
            Err(ParseError::Unrecognized(bad.to_string())),
            "input {bad:?}"
        );
    }
    assert!(parse_optional_duration("nope").is_err());
}

#[test]
fn test_parse_rejects_overflowing_literals() {
    // matches the notation but does not fit in an f64
    let huge = "9".repeat(400);
    for bad in [
        huge.clone(),
        format!("-{huge}"),
        format!("{huge}h"),
        format!("{huge}m"),
        format!("{huge}.5min"),
    ] {
        assert_eq!(
            parse_duration(&bad),
            Err(ParseError::Unrecognized(bad.clone())),
            "input of {} chars",
            bad.len()
        );
    }
}

#[test]
fn test_parse_error_keeps_raw_text() {
    let err = parse_duration(" 1h3x ").unwrap_err();
    assert_eq!(err, ParseError::Unrecognized(" 1h3x ".to_string()));
    assert_eq!(err.to_string(), "Unrecognized duration: ' 1h3x '");
}

#[test]
fn test_round_trip_within_one_minute() {
    for i in -2000..2000 {
        let x = i as f64 * 4.9999 + 0.123;
        assert!(x.abs() < 10_000.0);
        let text = format_hours(x);
        let back = parse_duration(&text).unwrap_or_else(|e| panic!("{text}: {e}"));
        assert!(
            (back - x).abs() <= 1.0 / 60.0,
            "x={x} text={text} back={back}"
        );
    }
}

#[test]
fn test_sum_durations() {
    assert_eq!(sum_durations(["1h30", "", "45m"]), Ok(2.25));
    assert_eq!(sum_durations(["1:00", "0.5", "-30m"]), Ok(1.0));
    assert_eq!(sum_durations(Vec::<&str>::new()), Ok(0.0));
    assert_eq!(
        sum_durations(["1h", "oops", "2h"]),
        Err(ParseError::Unrecognized("oops".to_string()))
    );
}
