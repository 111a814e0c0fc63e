//! # Error Types

use crate::regex::ErrorWrapper;

/// Errors from patternsmith operations.
///
/// Composing a pattern never fails; these surface when a finished pattern is
/// handed to the regex engine.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The regex engine rejected the assembled pattern.
    #[error("invalid pattern syntax in {pattern:?}: {source}")]
    InvalidPatternSyntax {
        /// The pattern text, without delimiters.
        pattern: String,

        /// The unmodified engine error.
        source: ErrorWrapper,
    },

    /// The regex engine failed while matching a subject.
    ///
    /// Only the backtracking engine can fail at match time.
    #[error("matching {pattern:?} failed: {source}")]
    MatchFailed {
        /// The pattern text, without delimiters.
        pattern: String,

        /// The unmodified engine error.
        source: ErrorWrapper,
    },

    /// A delimited pattern did not start and end with the delimiter.
    #[error("pattern is not wrapped in delimiters: {0:?}")]
    MissingDelimiters(String),
}

/// Result type for patternsmith operations.
pub type PSResult<T> = core::result::Result<T, PatternError>;
