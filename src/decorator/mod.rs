//! Argument-transforming wrapper
//!
//! [`format_date_args`] builds a [`DateArgs`] for a pattern. Wrapping a callable with it yields a
//! [`Wrapped`] that formats every temporal argument of each call before the callable runs, and
//! returns the callable's result untouched.
//!
//! ```
//! use chrono::NaiveDate;
//! use date_args::{CallArgs, Value, format_date_args};
//!
//! let echo = format_date_args("YYYY-MM-DD").wrap("echo", |args: CallArgs| args.get(0).cloned());
//!
//! let dt = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap().and_hms_opt(9, 30, 0).unwrap();
//! let result = echo.call(CallArgs::new().arg(dt));
//! assert_eq!(result, Some(Value::from("2022-01-01")));
//! assert_eq!(echo.name(), "echo");
//! ```

mod args;

pub use args::CallArgs;

use std::fmt;

use crate::config::FormatterConfig;
use crate::formatter::{DEFAULT_FORMAT, format_if_date};

/// Name and documentation of a wrapped callable
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FnMeta {
    pub name: String,
    pub doc: Option<String>,
}

impl FnMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

impl From<&str> for FnMeta {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for FnMeta {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

/// Wrapper factory holding the pattern applied to call arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateArgs {
    pattern: String,
}

/// Build a [`DateArgs`] that formats temporal arguments with `pattern`
///
/// The pattern is parsed on each call that has a temporal argument to format. Characters that are
/// not tokens are copied through, so no pattern is rejected.
pub fn format_date_args(pattern: impl Into<String>) -> DateArgs {
    DateArgs::new(pattern)
}

impl DateArgs {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn from_config(config: &FormatterConfig) -> Self {
        Self::new(config.default_format.clone())
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Format every positional argument, then every keyword value
    pub fn transform(&self, args: CallArgs) -> CallArgs {
        args.map(|value| format_if_date(value, &self.pattern))
    }

    /// Wrap `f`, copying `meta` onto the wrapper
    pub fn wrap<F>(&self, meta: impl Into<FnMeta>, f: F) -> Wrapped<F> {
        let meta = meta.into();
        log::debug!("wrapping '{}' with date pattern '{}'", meta.name, self.pattern);
        Wrapped {
            meta,
            args: self.clone(),
            inner: f,
        }
    }
}

impl Default for DateArgs {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}

/// A callable whose temporal arguments are formatted before each call
pub struct Wrapped<F> {
    meta: FnMeta,
    args: DateArgs,
    inner: F,
}

impl<F> Wrapped<F> {
    /// Format the arguments, then invoke the wrapped callable once
    ///
    /// The result, including a callable's own `Result`, is returned exactly as the callable
    /// produced it.
    pub fn call<R>(&self, args: CallArgs) -> R
    where
        F: Fn(CallArgs) -> R,
    {
        let args = self.args.transform(args);
        log::trace!("calling '{}' with {} arguments", self.meta.name, args.len());
        (self.inner)(args)
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.meta.doc.as_deref()
    }

    pub fn meta(&self) -> &FnMeta {
        &self.meta
    }

    pub fn pattern(&self) -> &str {
        self.args.pattern()
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F> fmt::Debug for Wrapped<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapped")
            .field("meta", &self.meta)
            .field("pattern", &self.args.pattern)
            .finish_non_exhaustive()
    }
}

/// Wrap a function item, taking the wrapper's name from the function's identifier
///
/// ```
/// use date_args::{CallArgs, DateArgs, wraps};
///
/// fn count(args: CallArgs) -> usize {
///     args.len()
/// }
///
/// let wrapped = wraps!(DateArgs::default(), count, "Counts its arguments.");
/// assert_eq!(wrapped.name(), "count");
/// assert_eq!(wrapped.doc(), Some("Counts its arguments."));
/// ```
#[macro_export]
macro_rules! wraps {
    ($args:expr, $f:ident) => {
        $args.wrap(stringify!($f), $f)
    };
    ($args:expr, $f:ident, $doc:expr) => {
        $args.wrap($crate::FnMeta::new(stringify!($f)).with_doc($doc), $f)
    };
}
