pub mod config;
pub mod decorator;
pub mod error;
pub mod formatter;
pub mod instant;
pub mod parser;
pub mod types;
pub mod value;

// Main API
pub use config::FormatterConfig;
pub use decorator::{CallArgs, DateArgs, FnMeta, Wrapped, format_date_args};
pub use error::ConfigError;
pub use formatter::{DEFAULT_FORMAT, format_if_date, format_if_date_default};
pub use instant::Instant;
pub use parser::parse_date_pattern;
pub use types::*;
pub use value::Value;

#[cfg(test)]
mod tests;
