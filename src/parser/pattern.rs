use winnow::Parser;

use crate::parser::combinators::parse_pattern_tokens;
use crate::types::*;

/// Parse a date pattern
///
/// This is the main public API entry point of this module. It accepts a pattern string and returns the
/// parsed DatePattern structure. Every pattern parses: characters that are not tokens, including an
/// unclosed `[`, become literals.
///
/// # Arguments
/// * `pattern` - The pattern string to parse
///
/// # Returns
/// * `DatePattern` - The tokens in pattern order
///
/// # Examples
/// ```
/// use date_args::parser::parse_date_pattern;
/// use date_args::types::FormatToken;
///
/// let pattern = parse_date_pattern("YYYY.MM.DD");
/// assert_eq!(pattern.tokens[0], FormatToken::YearFourDigit);
/// ```
pub fn parse_date_pattern(pattern: &str) -> DatePattern {
    let mut input = pattern;

    // the literal fallback accepts any character, so only the end of input stops the parser
    let tokens = parse_pattern_tokens
        .parse_next(&mut input)
        .unwrap_or_else(|e| {
            log::warn!("keeping pattern '{pattern}' as literal text: {e:?}");
            vec![FormatToken::Literal(pattern.to_string())]
        });

    DatePattern {
        source: pattern.to_string(),
        tokens,
    }
}
