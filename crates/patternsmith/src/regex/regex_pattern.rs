//! # Regex Pattern Labeled Wrapper

use crate::{
    errors::PSResult,
    regex::{
        ErrorWrapper,
        RegexWrapper,
        assertions::{normalize_quantified_assertions, requires_fancy},
        delimiters,
    },
};

/// Labeled wrapper for regex patterns.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum RegexPattern {
    /// This is a basic regex pattern, without extensions.
    Basic(String),

    /// This is a regex pattern that requires regex extensions.
    #[cfg(feature = "fancy")]
    Fancy(String),
}

impl<S: AsRef<str>> From<S> for RegexPattern {
    fn from(pattern: S) -> Self {
        Self::classify(pattern.as_ref())
    }
}

impl RegexPattern {
    /// Label a bare pattern by the engine it needs.
    ///
    /// Quantified look-around is normalized first; see
    /// [`normalize_quantified_assertions`].
    ///
    /// ## Arguments
    /// * `pattern` - a bare pattern.
    ///
    /// ## Returns
    /// `Fancy` for look-around or backreferences (when the ``fancy`` feature
    /// is enabled), `Basic` otherwise.
    pub fn classify(pattern: &str) -> Self {
        let pattern = normalize_quantified_assertions(pattern).into_owned();
        let fancy = requires_fancy(&pattern);

        cfg_if::cfg_if! {
            if #[cfg(feature = "fancy")] {
                if fancy {
                    log::debug!("using fancy_regex for {pattern:?}");
                    return Self::Fancy(pattern);
                }
            } else {
                if fancy {
                    log::debug!("{pattern:?} needs fancy_regex, but the fancy feature is disabled");
                }
            }
        }
        Self::Basic(pattern)
    }

    /// Strip the delimiters from a delimited pattern, and label it.
    ///
    /// This is the entry point for patterns in the delimited form, such as
    /// the output of [`crate::PatternBuilder::regex`].
    ///
    /// ## Arguments
    /// * `delimited` - a pattern of the form `/pattern/`.
    ///
    /// ## Returns
    /// The labeled pattern, or [`crate::PatternError::MissingDelimiters`].
    pub fn from_delimited(delimited: &str) -> PSResult<Self> {
        delimiters::strip(delimited).map(Self::classify)
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(pattern) => pattern,
            #[cfg(feature = "fancy")]
            Self::Fancy(pattern) => pattern,
        }
    }

    /// Compile the regex pattern into a `RegexWrapper`.
    ///
    /// ## Returns
    /// A `Result` containing the compiled `RegexWrapper` or an `ErrorWrapper`.
    pub fn compile(&self) -> Result<RegexWrapper, ErrorWrapper> {
        match self {
            Self::Basic(pattern) => regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
            #[cfg(feature = "fancy")]
            Self::Fancy(pattern) => fancy_regex::Regex::new(pattern)
                .map(RegexWrapper::from)
                .map_err(ErrorWrapper::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::PatternError;

    #[test]
    fn test_classify_basic() {
        let pattern: RegexPattern = r"\w+@\w+".into();
        assert_eq!(pattern, RegexPattern::Basic(r"\w+@\w+".to_string()));
        assert_eq!(pattern.as_str(), r"\w+@\w+");

        let re = pattern.compile().unwrap();
        assert!(re.is_basic());
        assert_eq!(re.as_str(), r"\w+@\w+");
    }

    #[test]
    fn test_classify_normalizes_optional_assertion() {
        let pattern = RegexPattern::classify("foo(?!bar)?baz");
        assert_eq!(pattern, RegexPattern::Basic("foobaz".to_string()));
    }

    #[cfg(feature = "fancy")]
    #[test]
    fn test_classify_fancy() {
        let pattern = RegexPattern::classify("foo(?!bar)+");
        assert_eq!(pattern, RegexPattern::Fancy("foo(?!bar)".to_string()));

        let re = pattern.compile().unwrap();
        assert!(re.is_fancy());
        assert!(re.is_match("foobaz").unwrap());
        assert!(!re.is_match("foobar").unwrap());

        let re = RegexPattern::from(r"(a)\1").compile().unwrap();
        assert!(re.is_match("xaa").unwrap());
        assert!(!re.is_match("ab").unwrap());
    }

    #[cfg(not(feature = "fancy"))]
    #[test]
    fn test_look_around_without_fancy() {
        let pattern = RegexPattern::classify("foo(?!bar)");
        assert_eq!(pattern, RegexPattern::Basic("foo(?!bar)".to_string()));
        assert!(pattern.compile().is_err());
    }

    #[test]
    fn test_basic_rejects_look_around() {
        let err = RegexPattern::Basic(r"foo(?!bar)".to_string())
            .compile()
            .unwrap_err();
        assert!(matches!(err, ErrorWrapper::Basic(_)));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexPattern::from(r"(foo").compile().is_err());
        assert!(RegexPattern::from(r"foo)").compile().is_err());
    }

    #[test]
    fn test_from_delimited() {
        let pattern = RegexPattern::from_delimited(r"/a\/b(?!c)?/").unwrap();
        assert_eq!(pattern.as_str(), r"a\/b");

        let err = RegexPattern::from_delimited(r"a\/b").unwrap_err();
        assert!(matches!(err, PatternError::MissingDelimiters(ref p) if p == r"a\/b"));
    }
}
