use winnow::combinator::{alt, delimited};
use winnow::token::{any, literal, take_till, take_while};
use winnow::{ModalResult, Parser};

use crate::types::*;

// Year related parsers
pub fn parse_year(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        literal("YYYY").value(FormatToken::YearFourDigit),
        literal("YYY").value(FormatToken::YearThreeDigit),
        literal("YY").value(FormatToken::YearTwoDigit),
    ))
    .parse_next(input)
}

// Month related parsers
pub fn parse_month(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        literal("MMMM").value(FormatToken::MonthFullName),
        literal("MMM").value(FormatToken::MonthAbbr),
        literal("MM").value(FormatToken::MonthNumPadded),
        literal("M").value(FormatToken::MonthNum),
    ))
    .parse_next(input)
}

// Day related parsers
pub fn parse_day_of_month(input: &mut &str) -> ModalResult<FormatToken> {
    // "Do" must win over "D" followed by a literal 'o'
    alt((
        literal("Do").value(FormatToken::DayOrdinal),
        literal("DDDD").value(FormatToken::DayOfYearPadded),
        literal("DDD").value(FormatToken::DayOfYear),
        literal("DD").value(FormatToken::DayNumPadded),
        literal("D").value(FormatToken::DayNum),
    ))
    .parse_next(input)
}

pub fn parse_weekday(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        literal("dddd").value(FormatToken::WeekdayFullName),
        literal("ddd").value(FormatToken::WeekdayAbbr),
        literal("dd").value(FormatToken::WeekdayTwoLetter),
        literal("d").value(FormatToken::IsoWeekday),
    ))
    .parse_next(input)
}

// Time related parsers
pub fn parse_hour(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        literal("HH").value(FormatToken::Hour24Padded),
        literal("H").value(FormatToken::Hour24),
        literal("hh").value(FormatToken::Hour12Padded),
        literal("h").value(FormatToken::Hour12),
    ))
    .parse_next(input)
}

pub fn parse_minute(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        literal("mm").value(FormatToken::MinuteNumPadded),
        literal("m").value(FormatToken::MinuteNum),
    ))
    .parse_next(input)
}

pub fn parse_second(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        literal("ss").value(FormatToken::SecondNumPadded),
        literal("s").value(FormatToken::SecondNum),
    ))
    .parse_next(input)
}

/// Parse one to six `S` characters as a fractional-second token
pub fn parse_fractional_seconds(input: &mut &str) -> ModalResult<FormatToken> {
    take_while(1..=6, 'S')
        .map(|digits: &str| FormatToken::FractionalSeconds(digits.len() as u8))
        .parse_next(input)
}

pub fn parse_am_pm(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        literal("A").value(FormatToken::AmPmUpper),
        literal("a").value(FormatToken::AmPmLower),
    ))
    .parse_next(input)
}

// Zone and timestamp parsers
pub fn parse_zone(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        literal("ZZZ").value(FormatToken::ZoneName),
        literal("ZZ").value(FormatToken::OffsetColon),
        literal("Z").value(FormatToken::Offset),
    ))
    .parse_next(input)
}

pub fn parse_timestamp(input: &mut &str) -> ModalResult<FormatToken> {
    alt((
        literal("X").value(FormatToken::TimestampSeconds),
        literal("x").value(FormatToken::TimestampMicros),
    ))
    .parse_next(input)
}

pub fn parse_iso_week_date(input: &mut &str) -> ModalResult<FormatToken> {
    literal("W").value(FormatToken::IsoWeekDate).parse_next(input)
}

// Text parsers

/// Parse `[text]` as escaped text. The text may not span a line break; an unclosed `[` backtracks
/// and is read as a literal.
pub fn parse_escaped(input: &mut &str) -> ModalResult<FormatToken> {
    delimited('[', take_till(0.., [']', '\n']), ']')
        .map(|text: &str| FormatToken::Escaped(text.to_string()))
        .parse_next(input)
}

pub fn parse_literal_char(input: &mut &str) -> ModalResult<FormatToken> {
    any.map(|c: char| FormatToken::Literal(c.to_string()))
        .parse_next(input)
}
