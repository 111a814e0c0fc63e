//! # Regex Wrapper
//! This modules provides mechanisms to mix `regex` and `fancy_regex` types.

use core::ops::Range;

/// Error wrapper for regex engines.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub enum ErrorWrapper {
    /// Error from `regex`.
    Basic(regex::Error),

    /// Error from `fancy_regex`.
    #[cfg(feature = "fancy")]
    Fancy(fancy_regex::Error),
}

impl From<regex::Error> for ErrorWrapper {
    fn from(err: regex::Error) -> Self {
        Self::Basic(err)
    }
}

#[cfg(feature = "fancy")]
impl From<fancy_regex::Error> for ErrorWrapper {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Fancy(err)
    }
}

impl core::fmt::Display for ErrorWrapper {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        match self {
            Self::Basic(err) => core::fmt::Display::fmt(err, f),
            #[cfg(feature = "fancy")]
            Self::Fancy(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

impl core::error::Error for ErrorWrapper {}

/// Wrapper for compiled regex.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    #[cfg(feature = "fancy")]
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

#[cfg(feature = "fancy")]
impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Basic`?
    ///
    /// ## Returns
    /// `true` if it wraps a `regex::Regex`, `false` otherwise.
    pub fn is_basic(&self) -> bool {
        match self {
            Self::Basic(_) => true,
            #[cfg(feature = "fancy")]
            Self::Fancy(_) => false,
        }
    }

    /// Is this `Fancy`?
    ///
    /// ## Returns
    /// `true` if it wraps a `fancy_regex::Regex`, `false` otherwise.
    pub fn is_fancy(&self) -> bool {
        match self {
            Self::Basic(_) => false,
            #[cfg(feature = "fancy")]
            Self::Fancy(_) => true,
        }
    }

    /// Get the underlying regex pattern.
    ///
    /// ## Returns
    /// The regex pattern string slice.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            #[cfg(feature = "fancy")]
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Does the regex match anywhere in the haystack?
    ///
    /// The `fancy_regex` engine can fail at match time (backtrack limits);
    /// the `regex` engine never does.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// `true` on at least one match.
    pub fn is_match(
        &self,
        haystack: &str,
    ) -> Result<bool, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex.is_match(haystack)),
            #[cfg(feature = "fancy")]
            Self::Fancy(regex) => regex.is_match(haystack).map_err(ErrorWrapper::from),
        }
    }

    /// Find the leftmost-first match.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    ///
    /// ## Returns
    /// The byte range of the first match, if any.
    pub fn find(
        &self,
        haystack: &str,
    ) -> Result<Option<Range<usize>>, ErrorWrapper> {
        match self {
            Self::Basic(regex) => Ok(regex.find(haystack).map(|m| m.range())),
            #[cfg(feature = "fancy")]
            Self::Fancy(regex) => regex
                .find(haystack)
                .map(|m| m.map(|m| m.start()..m.end()))
                .map_err(ErrorWrapper::from),
        }
    }
}
