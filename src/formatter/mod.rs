//! Date formatting module
//!
//! This module renders temporal values with a date pattern. The main entry point is the
//! `format_if_date` function, which formats temporal values and hands every other value back
//! unchanged.

mod datetime;
mod names;

pub use datetime::{
    format_fractional_seconds, format_offset, format_timestamp_seconds, render_instant,
};
pub use names::ordinal_day;

use crate::parser::parse_date_pattern;
use crate::value::Value;

/// Pattern used when the caller does not supply one.
///
/// It only has date tokens, so a date-time loses its time of day:
/// `2022-01-01 09:30` renders as `2022-01-01`, the same as the bare date.
pub const DEFAULT_FORMAT: &str = "YYYY-MM-DD";

/// Format `item` with `pattern` if it is a temporal value
///
/// # Arguments
/// * `item` - Any value
/// * `pattern` - The date pattern, e.g. `YYYY.MM.DD`
///
/// # Returns
/// * `Value::Str` - `item` was a date, date-time, zoned date-time or instant
/// * `item` - `item` was anything else; the pattern is not parsed in this case
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use date_args::{Value, format_if_date};
///
/// let dt = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();
/// assert_eq!(format_if_date(dt.into(), "YYYY.MM.DD"), Value::from("2022.01.01"));
/// assert_eq!(format_if_date(Value::Int(42), "YYYY.MM.DD"), Value::Int(42));
/// ```
pub fn format_if_date(item: Value, pattern: &str) -> Value {
    let Some(instant) = item.to_instant() else {
        return item;
    };

    let parsed = parse_date_pattern(pattern);
    let rendered = instant.render(&parsed);
    log::trace!("formatted {} {} as '{}'", item.kind(), instant, rendered);

    Value::Str(rendered)
}

/// [`format_if_date`] with [`DEFAULT_FORMAT`]
pub fn format_if_date_default(item: Value) -> Value {
    format_if_date(item, DEFAULT_FORMAT)
}
