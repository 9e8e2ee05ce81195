//! Date pattern parsing module
//!
//! This module is responsible for parsing date patterns such as `YYYY-MM-DD` and converting them into
//! a [`DatePattern`](crate::types::DatePattern) token list.
//! The main entry point is the `parse_date_pattern` function.

mod combinators;
mod pattern;
mod tokens;

pub use pattern::parse_date_pattern;
