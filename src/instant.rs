//! Canonical temporal instant
//!
//! Every temporal value is normalized into an [`Instant`] before it is rendered. Naive values are
//! read as UTC, matching how the formatter treats a value that carries no offset.

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::formatter::render_instant;
use crate::parser::parse_date_pattern;
use crate::types::DatePattern;

/// A point in time with a fixed UTC offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Instant(DateTime<FixedOffset>);

impl Instant {
    pub fn new(datetime: DateTime<FixedOffset>) -> Self {
        Self(datetime)
    }

    /// Midnight UTC on the given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_naive(date.and_time(NaiveTime::MIN))
    }

    /// The given wall-clock time read as UTC
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        Self(datetime.and_utc().fixed_offset())
    }

    /// The same instant, keeping the value's own offset
    pub fn from_zoned<Tz: TimeZone>(datetime: DateTime<Tz>) -> Self {
        Self(datetime.fixed_offset())
    }

    pub fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    /// Render this instant with an already parsed pattern
    pub fn render(&self, pattern: &DatePattern) -> String {
        render_instant(self, pattern)
    }

    /// Parse `pattern` and render this instant with it
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use date_args::Instant;
    ///
    /// let date = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    /// assert_eq!(Instant::from_date(date).format("YYYY.MM.DD"), "2022.01.01");
    /// ```
    pub fn format(&self, pattern: &str) -> String {
        self.render(&parse_date_pattern(pattern))
    }
}

impl From<NaiveDate> for Instant {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::from_naive(datetime)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_zoned(datetime)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
