use chrono::{Datelike, Timelike};

use super::names::{DAY_NAMES, MONTH_NAMES, SHORT_DAY_NAMES, SHORT_MONTH_NAMES, ordinal_day};
use crate::instant::Instant;
use crate::types::{DatePattern, FormatToken};

/// Format an instant according to the pattern tokens
pub fn render_instant(instant: &Instant, pattern: &DatePattern) -> String {
    let dt = instant.as_datetime();
    let mut result = String::new();

    for token in &pattern.tokens {
        match token {
            // Date tokens
            FormatToken::YearFourDigit => {
                result.push_str(&format!("{:04}", dt.year()));
            }
            FormatToken::YearThreeDigit | FormatToken::WeekdayTwoLetter => {}
            FormatToken::YearTwoDigit => {
                let year = format!("{:04}", dt.year());
                result.extend(year.chars().skip(2));
            }
            FormatToken::MonthFullName => {
                result.push_str(MONTH_NAMES[dt.month0() as usize]);
            }
            FormatToken::MonthAbbr => {
                result.push_str(SHORT_MONTH_NAMES[dt.month0() as usize]);
            }
            FormatToken::MonthNumPadded => {
                result.push_str(&format!("{:02}", dt.month()));
            }
            FormatToken::MonthNum => {
                result.push_str(&dt.month().to_string());
            }
            FormatToken::DayOfYearPadded => {
                result.push_str(&format!("{:03}", dt.ordinal()));
            }
            FormatToken::DayOfYear => {
                result.push_str(&dt.ordinal().to_string());
            }
            FormatToken::DayNumPadded => {
                result.push_str(&format!("{:02}", dt.day()));
            }
            FormatToken::DayNum => {
                result.push_str(&dt.day().to_string());
            }
            FormatToken::DayOrdinal => {
                result.push_str(&ordinal_day(dt.day()));
            }
            FormatToken::WeekdayFullName => {
                result.push_str(DAY_NAMES[dt.weekday().num_days_from_monday() as usize]);
            }
            FormatToken::WeekdayAbbr => {
                result.push_str(SHORT_DAY_NAMES[dt.weekday().num_days_from_monday() as usize]);
            }
            FormatToken::IsoWeekday => {
                result.push_str(&dt.weekday().number_from_monday().to_string());
            }

            // Time tokens
            FormatToken::Hour24Padded => {
                result.push_str(&format!("{:02}", dt.hour()));
            }
            FormatToken::Hour24 => {
                result.push_str(&dt.hour().to_string());
            }
            FormatToken::Hour12Padded => {
                result.push_str(&format!("{:02}", hour_12(dt.hour())));
            }
            FormatToken::Hour12 => {
                result.push_str(&hour_12(dt.hour()).to_string());
            }
            FormatToken::MinuteNumPadded => {
                result.push_str(&format!("{:02}", dt.minute()));
            }
            FormatToken::MinuteNum => {
                result.push_str(&dt.minute().to_string());
            }
            FormatToken::SecondNumPadded => {
                result.push_str(&format!("{:02}", dt.second()));
            }
            FormatToken::SecondNum => {
                result.push_str(&dt.second().to_string());
            }
            FormatToken::FractionalSeconds(digits) => {
                result.push_str(&format_fractional_seconds(dt.nanosecond(), *digits));
            }
            FormatToken::AmPmUpper => {
                result.push_str(if dt.hour() < 12 { "AM" } else { "PM" });
            }
            FormatToken::AmPmLower => {
                result.push_str(if dt.hour() < 12 { "am" } else { "pm" });
            }

            // Zone and timestamp tokens
            FormatToken::ZoneName => {
                let offset_seconds = dt.offset().local_minus_utc();
                result.push_str("UTC");
                if offset_seconds != 0 {
                    result.push_str(&format_offset(offset_seconds, ":"));
                }
            }
            FormatToken::OffsetColon => {
                result.push_str(&format_offset(dt.offset().local_minus_utc(), ":"));
            }
            FormatToken::Offset => {
                result.push_str(&format_offset(dt.offset().local_minus_utc(), ""));
            }
            FormatToken::TimestampSeconds => {
                result.push_str(&format_timestamp_seconds(dt.timestamp_micros()));
            }
            FormatToken::TimestampMicros => {
                result.push_str(&dt.timestamp_micros().to_string());
            }
            FormatToken::IsoWeekDate => {
                let week = dt.iso_week();
                result.push_str(&format!(
                    "{}-W{:02}-{}",
                    week.year(),
                    week.week(),
                    dt.weekday().number_from_monday()
                ));
            }

            FormatToken::Escaped(text) | FormatToken::Literal(text) => result.push_str(text),
        }
    }

    result
}

/// Hour on a 12-hour clock, where midnight and noon are both 12
fn hour_12(hour: u32) -> u32 {
    if hour == 0 || hour == 12 {
        12
    } else {
        hour % 12
    }
}

/// Format the fraction of a second truncated to `digits` places (at most 6)
pub fn format_fractional_seconds(nanos: u32, digits: u8) -> String {
    let digits = u32::from(digits.clamp(1, 6));
    // a leap second carries nanos past 999_999_999
    let micros = (nanos / 1_000).min(999_999);
    let truncated = micros / 10u32.pow(6 - digits);
    format!("{:0width$}", truncated, width = digits as usize)
}

/// Format a Unix timestamp in microseconds as fractional seconds, e.g. `1641029400.0`
///
/// The value is the correctly rounded `f64` quotient, printed in its shortest round-trip form with
/// at least one fractional digit.
pub fn format_timestamp_seconds(micros: i64) -> String {
    format!("{:?}", micros as f64 / 1_000_000.0)
}

/// Format a UTC offset in seconds as `+HH:MM` or `+HHMM`
pub fn format_offset(offset_seconds: i32, separator: &str) -> String {
    let minutes = offset_seconds / 60;
    let sign = if minutes >= 0 { '+' } else { '-' };
    let total_minutes = minutes.unsigned_abs();
    format!(
        "{sign}{:02}{separator}{:02}",
        total_minutes / 60,
        total_minutes % 60
    )
}
