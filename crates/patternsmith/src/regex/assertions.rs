//! # Look-Around Handling
//!
//! Neither engine accepts a quantified look-around assertion, while the
//! builder produces them (see [`crate::PatternBuilder::non`]). A quantified
//! assertion is rewritten here before compilation:
//!
//! * a minimum of zero (`?`, `*`, `{0}`, `{0,n}`) never constrains a match;
//!   the assertion is dropped.
//! * a minimum of one or more (`+`, `{n}`, `{n,}`, `{n,m}`) is the assertion
//!   applied once; the quantifier is dropped.
//!
//! Escapes and character classes are skipped while scanning. Capture groups
//! inside a dropped assertion are dropped with it.

use std::borrow::Cow;

/// Look-around group openers.
const LOOK_AROUND: &[&[u8]] = &[b"(?=", b"(?!", b"(?<=", b"(?<!"];

fn is_look_around(
    bytes: &[u8],
    at: usize,
) -> bool {
    LOOK_AROUND
        .iter()
        .any(|opener| bytes[at..].starts_with(opener))
}

/// Index just past the character class opening at `open`.
fn class_end(
    bytes: &[u8],
    open: usize,
) -> Option<usize> {
    let mut ix = open + 1;
    if bytes.get(ix) == Some(&b'^') {
        ix += 1;
    }
    // a leading `]` is a literal.
    if bytes.get(ix) == Some(&b']') {
        ix += 1;
    }

    let mut depth = 1;
    while ix < bytes.len() {
        match bytes[ix] {
            b'\\' => ix += 1,
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(ix + 1);
                }
            }
            _ => {}
        }
        ix += 1;
    }
    None
}

/// Index of the `)` closing the group opening at `open`.
fn group_close(
    bytes: &[u8],
    open: usize,
) -> Option<usize> {
    let mut depth = 0;
    let mut ix = open;
    while ix < bytes.len() {
        match bytes[ix] {
            b'\\' => ix += 2,
            b'[' => ix = class_end(bytes, ix)?,
            b'(' => {
                depth += 1;
                ix += 1;
            }
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(ix);
                }
                ix += 1;
            }
            _ => ix += 1,
        }
    }
    None
}

/// A quantifier: its length in bytes, and its minimum count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Quantifier {
    len: usize,
    min: u64,
}

fn quantifier_at(
    bytes: &[u8],
    at: usize,
) -> Option<Quantifier> {
    let (len, min) = match bytes.get(at)? {
        b'?' | b'*' => (1, 0),
        b'+' => (1, 1),
        b'{' => {
            let close = at + bytes[at..].iter().position(|&b| b == b'}')?;
            let body = core::str::from_utf8(&bytes[at + 1..close]).ok()?;
            let (min, max) = match body.split_once(',') {
                Some((min, max)) => (min, max),
                None => (body, body),
            };
            let min = min.parse::<u64>().ok()?;
            if !max.is_empty() {
                max.parse::<u64>().ok()?;
            }
            (close + 1 - at, min)
        }
        _ => return None,
    };

    // lazy / possessive suffix.
    let suffix = matches!(bytes.get(at + len), Some(b'?' | b'+')) as usize;
    Some(Quantifier {
        len: len + suffix,
        min,
    })
}

/// Rewrite quantified look-around assertions into a form the engines accept.
///
/// ## Arguments
/// * `pattern` - a bare pattern.
///
/// ## Returns
/// The pattern, borrowed when nothing needed rewriting.
pub fn normalize_quantified_assertions(pattern: &str) -> Cow<'_, str> {
    let bytes = pattern.as_bytes();
    let mut normalized = String::new();
    let mut copied = 0;

    let mut ix = 0;
    while ix < bytes.len() {
        match bytes[ix] {
            b'\\' => ix += 2,
            b'[' => match class_end(bytes, ix) {
                Some(end) => ix = end,
                None => break,
            },
            b'(' if is_look_around(bytes, ix) => {
                let Some(close) = group_close(bytes, ix) else {
                    break;
                };
                let Some(quantifier) = quantifier_at(bytes, close + 1) else {
                    // unquantified; keep scanning inside it.
                    ix += 1;
                    continue;
                };

                normalized.push_str(&pattern[copied..ix]);
                if quantifier.min > 0 {
                    normalized.push_str(&normalize_quantified_assertions(&pattern[ix..=close]));
                }
                ix = close + 1 + quantifier.len;
                copied = ix;
            }
            _ => ix += 1,
        }
    }

    if copied == 0 {
        return Cow::Borrowed(pattern);
    }
    normalized.push_str(&pattern[copied..]);
    Cow::Owned(normalized)
}

/// Does the pattern use syntax only `fancy_regex` supports?
///
/// That is look-around assertions, and backreferences (`\1`, `\k<name>`).
pub fn requires_fancy(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();

    let mut ix = 0;
    while ix < bytes.len() {
        match bytes[ix] {
            b'\\' => {
                if matches!(bytes.get(ix + 1), Some(b'1'..=b'9' | b'k')) {
                    return true;
                }
                ix += 2;
            }
            b'[' => match class_end(bytes, ix) {
                Some(end) => ix = end,
                None => return false,
            },
            b'(' if is_look_around(bytes, ix) => return true,
            _ => ix += 1,
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_assertions_dropped() {
        assert_eq!(normalize_quantified_assertions("foo(?!bar)?baz"), "foobaz");
        assert_eq!(normalize_quantified_assertions("(?=a)*b"), "b");
        assert_eq!(normalize_quantified_assertions("(?<!x){0}y"), "y");
        assert_eq!(normalize_quantified_assertions("(?<=x){0,3}y"), "y");
        assert_eq!(normalize_quantified_assertions("(?=x)??y"), "y");
        assert_eq!(normalize_quantified_assertions(r"^a(?!\)\?)?$"), "^a$");
    }

    #[test]
    fn test_required_assertions_unquantified() {
        assert_eq!(normalize_quantified_assertions("(?!x)+y"), "(?!x)y");
        assert_eq!(normalize_quantified_assertions("(?=x){2}y"), "(?=x)y");
        assert_eq!(normalize_quantified_assertions("(?=x){1,}y"), "(?=x)y");
        assert_eq!(normalize_quantified_assertions("(?=x){1,4}?y"), "(?=x)y");
    }

    #[test]
    fn test_nested_assertions() {
        assert_eq!(normalize_quantified_assertions("(?=a(?!b)?)c"), "(?=a)c");
        assert_eq!(normalize_quantified_assertions("(?=a(?!b)?)+c"), "(?=a)c");
        assert_eq!(normalize_quantified_assertions("(?=a(?!b)?)?c"), "c");
    }

    #[test]
    fn test_unchanged_patterns_are_borrowed() {
        for pattern in [
            "",
            r"(ab)?c+",
            r"(?:ab)?",
            r"a(?!b)c",
            r"\(?!x)?",
            r"[(?!x)?]",
            r"[]?(?!x)?]",
            r"(?!x",
            r"x{2}",
        ] {
            let normalized = normalize_quantified_assertions(pattern);
            assert!(
                matches!(normalized, Cow::Borrowed(p) if p == pattern),
                "{pattern:?}"
            );
        }
    }

    #[test]
    fn test_requires_fancy() {
        assert!(requires_fancy(r"a(?=b)"));
        assert!(requires_fancy(r"(?<!a)b"));
        assert!(requires_fancy(r"(a)\1"));
        assert!(requires_fancy(r"(?<n>a)\k<n>"));

        assert!(!requires_fancy(r"a+(?:b)?"));
        assert!(!requires_fancy(r"\\1"));
        assert!(!requires_fancy(r"\(?=a)"));
        assert!(!requires_fancy(r"[(?=a)]"));
        assert!(!requires_fancy(r"\d{2}"));
    }
}
