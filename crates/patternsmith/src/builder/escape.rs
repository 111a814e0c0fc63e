//! # Literal Escaping
//!
//! Every literal handed to a [`crate::PatternBuilder`] passes through
//! [`escape`], so user text always matches verbatim.

use crate::regex::delimiters::DELIMITER;

/// Characters prefixed with `\` by [`escape`], besides [`DELIMITER`].
///
/// This is the `regex` crate's metacharacter set (a superset of what
/// `fancy_regex::escape` covers) plus `=`, `!` and `:`, which take part in
/// group syntax like `(?:`, `(?=` and `(?!`.
///
/// `<` and `>` are not escaped: they are literals to both engines, and
/// `\<` / `\>` are word-boundary assertions in `regex`.
pub const ESCAPED_CHARS: &[char] = &[
    '\\', '.', '+', '*', '?', '(', ')', '|', '[', ']', '{', '}', '^', '$', '#', '&', '-', '~', '=',
    '!', ':',
];

/// Is `c` escaped by [`escape`]?
pub fn needs_escape(c: char) -> bool {
    c == DELIMITER || ESCAPED_CHARS.contains(&c)
}

/// Quote regex metacharacters and the delimiter in a literal.
///
/// ## Arguments
/// * `value` - the literal text.
///
/// ## Returns
/// A pattern matching exactly `value`.
pub fn escape(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len());
    for c in value.chars() {
        if needs_escape(c) {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted
}
