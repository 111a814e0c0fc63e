//! # Literal-or-Sub-Pattern Arguments

use core::fmt::Debug;

use crate::builder::PatternBuilder;

/// A composer closure, run against a fresh nested [`PatternBuilder`].
pub type Composer<'a> = Box<dyn FnOnce(&mut PatternBuilder) + 'a>;

/// An argument which is either literal text or a nested sub-pattern.
///
/// Operations accepting a `Fragment` (see [`PatternBuilder::any`])
/// escape a [`Fragment::Literal`], and compose a [`Fragment::SubPattern`]
/// in a fresh nested builder.
pub enum Fragment<'a> {
    /// Literal text, matched verbatim.
    Literal(String),

    /// A composer for a nested sub-pattern.
    SubPattern(Composer<'a>),
}

impl<'a> Fragment<'a> {
    /// Build a [`Fragment::Literal`].
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Self::Literal(value.into())
    }

    /// Build a [`Fragment::SubPattern`].
    ///
    /// ## Arguments
    /// * `composer` - populates the nested builder.
    pub fn sub<F>(composer: F) -> Self
    where
        F: FnOnce(&mut PatternBuilder) + 'a,
    {
        Self::SubPattern(Box::new(composer))
    }
}

impl From<&str> for Fragment<'_> {
    fn from(value: &str) -> Self {
        Self::Literal(value.to_string())
    }
}

impl From<String> for Fragment<'_> {
    fn from(value: String) -> Self {
        Self::Literal(value)
    }
}

impl From<char> for Fragment<'_> {
    fn from(value: char) -> Self {
        Self::Literal(value.to_string())
    }
}

impl Debug for Fragment<'_> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Self::SubPattern(_) => f.write_str("SubPattern(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions() {
        let frag: Fragment = "a.b".into();
        assert!(matches!(frag, Fragment::Literal(ref v) if v == "a.b"));

        let frag: Fragment = String::from("x").into();
        assert!(matches!(frag, Fragment::Literal(ref v) if v == "x"));

        let frag: Fragment = '@'.into();
        assert!(matches!(frag, Fragment::Literal(ref v) if v == "@"));

        let frag = Fragment::sub(|b| {
            b.digit();
        });
        assert!(matches!(frag, Fragment::SubPattern(_)));
    }

    #[test]
    fn test_debug() {
        let literal = Fragment::literal("q");
        assert_eq!(format!("{literal:?}"), r#"Literal("q")"#);

        let sub = Fragment::sub(|b| {
            b.word();
        });
        assert_eq!(format!("{sub:?}"), "SubPattern(..)");
    }

    #[test]
    fn test_sub_pattern_borrows() {
        let suffix = String::from(".com");
        let frag = Fragment::sub(|b| {
            b.words().exact(&suffix);
        });

        let mut builder = PatternBuilder::new();
        builder.fragment(frag);
        assert_eq!(builder.without_delimiters(), r"\w+\.com");
    }
}
