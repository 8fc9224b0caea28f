// src/parsers.rs
use std::{fmt::Display, str::FromStr};

use word_counter_core::error::{PresentationError, PresentationResult};

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Parse an integer typed at a menu prompt; blank input takes `default`.
///
/// # Errors
/// Returns [`PresentationError::InvalidNumber`] when the text is not an integer.
pub fn parse_int_or(field: &str, input: &str, default: i64) -> PresentationResult<i64> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(default);
    }
    input.parse().map_err(|_| PresentationError::InvalidNumber {
        field: field.to_owned(),
        value: input.to_owned(),
    })
}
