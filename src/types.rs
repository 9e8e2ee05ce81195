//! Type definitions for date patterns
//!
//! This module defines the tokens a date pattern is parsed into and the parsed
//! pattern itself.

/// Represents a single token parsed from a date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatToken {
    /// Four-digit, zero-padded year (YYYY)
    YearFourDigit,
    /// Three Ys (YYY); recognized as one token but renders nothing
    YearThreeDigit,
    /// Last two digits of the four-digit year (YY)
    YearTwoDigit,
    /// Full month name, e.g., January (MMMM)
    MonthFullName,
    /// Month abbreviation, e.g., Jan (MMM)
    MonthAbbr,
    /// Zero-padded month number, 01-12 (MM)
    MonthNumPadded,
    /// Month number, 1-12 (M)
    MonthNum,
    /// Zero-padded day of year, 001-366 (DDDD)
    DayOfYearPadded,
    /// Day of year, 1-366 (DDD)
    DayOfYear,
    /// Zero-padded day of month, 01-31 (DD)
    DayNumPadded,
    /// Day of month, 1-31 (D)
    DayNum,
    /// Day of month with an ordinal suffix, e.g., 1st (Do)
    DayOrdinal,
    /// Full weekday name, e.g., Monday (dddd)
    WeekdayFullName,
    /// Weekday abbreviation, e.g., Mon (ddd)
    WeekdayAbbr,
    /// Two ds (dd); recognized as one token but renders nothing
    WeekdayTwoLetter,
    /// ISO weekday number, Monday is 1 (d)
    IsoWeekday,
    /// Zero-padded 24-hour clock hour (HH)
    Hour24Padded,
    /// 24-hour clock hour (H)
    Hour24,
    /// Zero-padded 12-hour clock hour (hh)
    Hour12Padded,
    /// 12-hour clock hour (h)
    Hour12,
    /// Zero-padded minute (mm)
    MinuteNumPadded,
    /// Minute (m)
    MinuteNum,
    /// Zero-padded second (ss)
    SecondNumPadded,
    /// Second (s)
    SecondNum,
    /// Fraction of a second truncated to the given number of digits (S to SSSSSS)
    FractionalSeconds(u8),
    /// Upper-case meridian, AM or PM (A)
    AmPmUpper,
    /// Lower-case meridian, am or pm (a)
    AmPmLower,
    /// Zone name (ZZZ)
    ZoneName,
    /// UTC offset with a colon, e.g., +05:30 (ZZ)
    OffsetColon,
    /// UTC offset without a colon, e.g., +0530 (Z)
    Offset,
    /// Unix timestamp in whole seconds (X)
    TimestampSeconds,
    /// Unix timestamp in microseconds (x)
    TimestampMicros,
    /// ISO week date, e.g., 2021-W52-6 (W)
    IsoWeekDate,
    /// Bracket-escaped text, emitted without the brackets
    Escaped(String),
    /// Run of characters that are not tokens, emitted as is
    Literal(String),
}

/// A parsed date pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePattern {
    /// The pattern text the tokens were parsed from
    pub source: String,
    /// Sequence of tokens in pattern order
    pub tokens: Vec<FormatToken>,
}
