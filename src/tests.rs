use crate::decorator::CallArgs;
use crate::formatter::{
    format_fractional_seconds, format_offset, format_timestamp_seconds, ordinal_day,
};
use crate::parser::*;
use crate::types::*;
use crate::value::Value;

fn lit(s: &str) -> FormatToken {
    FormatToken::Literal(s.to_string())
}

#[test]
fn test_default_pattern_tokens() {
    let result = parse_date_pattern("YYYY-MM-DD");
    assert_eq!(
        result.tokens,
        vec![
            FormatToken::YearFourDigit,
            lit("-"),
            FormatToken::MonthNumPadded,
            lit("-"),
            FormatToken::DayNumPadded,
        ]
    );
    assert_eq!(result.source, "YYYY-MM-DD");
}

#[test]
fn test_longest_token_wins() {
    let result = parse_date_pattern("MMMM MMM MM M");
    assert_eq!(
        result.tokens,
        vec![
            FormatToken::MonthFullName,
            lit(" "),
            FormatToken::MonthAbbr,
            lit(" "),
            FormatToken::MonthNumPadded,
            lit(" "),
            FormatToken::MonthNum,
        ]
    );

    let result = parse_date_pattern("DDDD DDD Do");
    assert_eq!(
        result.tokens,
        vec![
            FormatToken::DayOfYearPadded,
            lit(" "),
            FormatToken::DayOfYear,
            lit(" "),
            FormatToken::DayOrdinal,
        ]
    );
}

#[test]
fn test_blank_tokens_are_single_tokens() {
    let result = parse_date_pattern("YYY");
    assert_eq!(result.tokens, vec![FormatToken::YearThreeDigit]);

    let result = parse_date_pattern("dd");
    assert_eq!(result.tokens, vec![FormatToken::WeekdayTwoLetter]);

    let result = parse_date_pattern("YYYYY dddd");
    assert_eq!(
        result.tokens,
        vec![
            FormatToken::YearFourDigit,
            lit("Y "),
            FormatToken::WeekdayFullName,
        ]
    );
}

#[test]
fn test_fractional_seconds_cap_at_six() {
    let result = parse_date_pattern("ss.SSSSSSS");
    assert_eq!(
        result.tokens,
        vec![
            FormatToken::SecondNumPadded,
            lit("."),
            FormatToken::FractionalSeconds(6),
            FormatToken::FractionalSeconds(1),
        ]
    );
}

#[test]
fn test_zone_tokens() {
    let result = parse_date_pattern("ZZZ ZZ Z");
    assert_eq!(
        result.tokens,
        vec![
            FormatToken::ZoneName,
            lit(" "),
            FormatToken::OffsetColon,
            lit(" "),
            FormatToken::Offset,
        ]
    );
}

#[test]
fn test_escaped_text() {
    let result = parse_date_pattern("[at] HH");
    assert_eq!(
        result.tokens,
        vec![
            FormatToken::Escaped("at".to_string()),
            lit(" "),
            FormatToken::Hour24Padded,
        ]
    );

    // everything up to the first ']' is escaped, including another '['
    let result = parse_date_pattern("[a[b]");
    assert_eq!(result.tokens, vec![FormatToken::Escaped("a[b".to_string())]);
}

#[test]
fn test_adjacent_literals_merge() {
    let result = parse_date_pattern("hello");
    assert_eq!(result.tokens, vec![FormatToken::Hour12, lit("ello")]);

    let result = parse_date_pattern("Today");
    assert_eq!(
        result.tokens,
        vec![
            lit("To"),
            FormatToken::IsoWeekday,
            FormatToken::AmPmLower,
            lit("y"),
        ]
    );
}

#[test]
fn test_empty_pattern() {
    let result = parse_date_pattern("");
    assert!(result.tokens.is_empty());
}

#[test]
fn test_unclosed_bracket_is_literal() {
    let result = parse_date_pattern("[YYYY");
    assert_eq!(result.tokens, vec![lit("["), FormatToken::YearFourDigit]);

    let result = parse_date_pattern("DD [ok] [");
    assert_eq!(
        result.tokens,
        vec![
            FormatToken::DayNumPadded,
            lit(" "),
            FormatToken::Escaped("ok".to_string()),
            lit(" ["),
        ]
    );
}

#[test]
fn test_escape_stops_at_line_break() {
    let result = parse_date_pattern("[a\nb]");
    assert_eq!(
        result.tokens,
        vec![lit("["), FormatToken::AmPmLower, lit("\nb]")]
    );
}

#[test]
fn test_ordinal_day() {
    assert_eq!(ordinal_day(1), "1st");
    assert_eq!(ordinal_day(2), "2nd");
    assert_eq!(ordinal_day(3), "3rd");
    assert_eq!(ordinal_day(4), "4th");
    assert_eq!(ordinal_day(11), "11th");
    assert_eq!(ordinal_day(12), "12th");
    assert_eq!(ordinal_day(13), "13th");
    assert_eq!(ordinal_day(21), "21st");
    assert_eq!(ordinal_day(22), "22nd");
    assert_eq!(ordinal_day(31), "31st");
}

#[test]
fn test_fractional_seconds_truncate() {
    assert_eq!(format_fractional_seconds(123_456_789, 6), "123456");
    assert_eq!(format_fractional_seconds(123_456_789, 3), "123");
    assert_eq!(format_fractional_seconds(987_654_321, 1), "9");
    assert_eq!(format_fractional_seconds(5_000_000, 3), "005");
    // leap second
    assert_eq!(format_fractional_seconds(1_500_000_000, 6), "999999");
}

#[test]
fn test_offsets() {
    assert_eq!(format_offset(0, ":"), "+00:00");
    assert_eq!(format_offset(5 * 3600 + 30 * 60, ":"), "+05:30");
    assert_eq!(format_offset(-8 * 3600, ""), "-0800");
    assert_eq!(format_offset(-30, ":"), "+00:00");
}

#[test]
fn test_timestamp_seconds() {
    assert_eq!(format_timestamp_seconds(0), "0.0");
    assert_eq!(format_timestamp_seconds(1_641_029_400_000_000), "1641029400.0");
    assert_eq!(format_timestamp_seconds(1_641_029_415_123_456), "1641029415.123456");
    assert_eq!(format_timestamp_seconds(-1_500_000), "-1.5");
}

#[test]
fn test_call_args_keyword_replace_keeps_position() {
    let args = CallArgs::new()
        .kwarg("a", 1)
        .kwarg("b", 2)
        .kwarg("a", 3);
    let keywords: Vec<(&str, &Value)> = args.keywords().collect();
    assert_eq!(keywords, vec![("a", &Value::Int(3)), ("b", &Value::Int(2))]);
    assert_eq!(args.len(), 2);
}

#[test]
fn test_call_args_map_visits_positional_then_keyword() {
    let args = CallArgs::new().arg(1).arg(2).kwarg("k", 3).kwarg("j", 4);
    let mut seen = Vec::new();
    let mapped = args.map(|value| {
        seen.push(value.clone());
        match value {
            Value::Int(n) => Value::Int(n * 10),
            other => other,
        }
    });
    assert_eq!(
        seen,
        vec![Value::Int(1), Value::Int(2), Value::Int(3), Value::Int(4)]
    );
    assert_eq!(mapped.positional(), &[Value::Int(10), Value::Int(20)][..]);
    assert_eq!(mapped.keyword("j"), Some(&Value::Int(40)));
}

#[test]
fn test_value_conversions() {
    assert_eq!(Value::from(None::<i64>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::Str("x".to_string()));
    assert_eq!(
        Value::from(vec![1, 2]),
        Value::List(vec![Value::Int(1), Value::Int(2)])
    );
    assert!(!Value::from(vec![1, 2]).is_temporal());
    assert!(Value::from(chrono::NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()).is_temporal());
}

#[test]
fn test_value_accessors() {
    assert_eq!(Value::from("a").as_str(), Some("a"));
    assert_eq!(Value::Int(3).as_int(), Some(3));
    assert_eq!(Value::Int(3).as_str(), None);
    assert_eq!(Value::Float(0.5).as_float(), Some(0.5));
    assert_eq!(Value::Bool(true).as_bool(), Some(true));
    assert_eq!(Value::from(vec!["x"]).as_list(), Some(&[Value::from("x")][..]));
    assert!(Value::Null.is_null());
    assert_eq!(Value::Null.to_instant(), None);
    assert_eq!(Value::Int(1).kind(), "int");
}
