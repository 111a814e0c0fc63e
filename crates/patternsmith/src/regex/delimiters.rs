//! # Pattern Delimiters
//!
//! The delimited form of a pattern is `/pattern/`. The engines themselves take
//! bare patterns, so the delimiters are stripped again before compilation.

use crate::errors::{PSResult, PatternError};

/// The leading and trailing delimiter character.
pub const DELIMITER: char = '/';

/// Wrap a bare pattern in delimiters.
///
/// ## Arguments
/// * `pattern` - the bare pattern text.
///
/// ## Returns
/// `/pattern/`.
pub fn wrap(pattern: &str) -> String {
    let mut delimited = String::with_capacity(pattern.len() + 2);
    delimited.push(DELIMITER);
    delimited.push_str(pattern);
    delimited.push(DELIMITER);
    delimited
}

/// Strip the delimiters from a delimited pattern.
///
/// Only the outermost pair is removed; delimiters inside the pattern are
/// expected to be escaped already.
///
/// ## Arguments
/// * `delimited` - a pattern of the form `/pattern/`.
///
/// ## Returns
/// The bare pattern, or [`PatternError::MissingDelimiters`].
pub fn strip(delimited: &str) -> PSResult<&str> {
    delimited
        .strip_prefix(DELIMITER)
        .and_then(|rest| rest.strip_suffix(DELIMITER))
        .ok_or_else(|| PatternError::MissingDelimiters(delimited.to_string()))
}
