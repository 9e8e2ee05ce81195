//! Dynamic argument values
//!
//! [`Value`] is the argument type of a wrapped callable. Temporal variants are what the formatter
//! renders; every other variant is carried through untouched.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

use crate::instant::Instant;

/// A single argument value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// A list is opaque: temporal values inside it are not formatted
    List(Vec<Value>),
    /// Calendar date without a time of day
    Date(NaiveDate),
    /// Date and time of day without an offset
    DateTime(NaiveDateTime),
    /// Date and time of day with a UTC offset
    Zoned(DateTime<FixedOffset>),
    /// Canonical instant, rendered as is
    Instant(Instant),
}

impl Value {
    /// Checks if the value is one of the variants the formatter renders
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            Value::Date(_) | Value::DateTime(_) | Value::Zoned(_) | Value::Instant(_)
        )
    }

    /// Normalize a temporal value into an [`Instant`]; `None` for anything else
    pub fn to_instant(&self) -> Option<Instant> {
        match self {
            Value::Date(date) => Some(Instant::from_date(*date)),
            Value::DateTime(datetime) => Some(Instant::from_naive(*datetime)),
            Value::Zoned(datetime) => Some(Instant::from_zoned(*datetime)),
            Value::Instant(instant) => Some(*instant),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the variant, used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Zoned(_) => "zoned",
            Value::Instant(_) => "instant",
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

impl From<DateTime<FixedOffset>> for Value {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Value::Zoned(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Zoned(value.fixed_offset())
    }
}

impl From<Instant> for Value {
    fn from(value: Instant) -> Self {
        Value::Instant(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}
