use winnow::combinator::{alt, repeat};
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::*;

/// Parse a single token from the pattern string
pub fn parse_single_token(input: &mut &str) -> ModalResult<FormatToken> {
    let group1_calendar = alt((parse_year, parse_month, parse_day_of_month, parse_weekday));

    let group2_clock = alt((
        parse_hour,
        parse_minute,
        parse_second,
        parse_fractional_seconds,
        parse_am_pm,
    ));

    let group3_zone_timestamp = alt((parse_zone, parse_timestamp, parse_iso_week_date));

    let mut parser = alt((
        parse_escaped,
        group1_calendar,
        group2_clock,
        group3_zone_timestamp,
        parse_literal_char,
    ));

    parser.parse_next(input)
}

/// Parse a whole pattern into tokens, merging adjacent literal characters
pub fn parse_pattern_tokens(input: &mut &str) -> ModalResult<Vec<FormatToken>> {
    let raw: Vec<FormatToken> = repeat(0.., parse_single_token).parse_next(input)?;
    Ok(merge_literals(raw))
}

fn merge_literals(tokens: Vec<FormatToken>) -> Vec<FormatToken> {
    let mut merged: Vec<FormatToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let (FormatToken::Literal(next), Some(FormatToken::Literal(run))) =
            (&token, merged.last_mut())
        {
            run.push_str(next);
            continue;
        }
        merged.push(token);
    }
    merged
}
