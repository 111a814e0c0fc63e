//! # `patternsmith` Fluent Regex Builder
//!
//! Build regular expressions by chaining calls instead of writing regex syntax.
//!
//! See:
//! * [`PatternBuilder`] to compose a pattern.
//! * [`Fragment`] for operations which take either a literal or a sub-pattern.
//! * [`regex`] for the engine wrappers patterns are evaluated with.
//!
//! ```rust
//! use patternsmith::PatternBuilder;
//!
//! let mut email = PatternBuilder::new();
//! email
//!     .begin()
//!     .one_or_more_with(|b| {
//!         b.word().or_exact(".");
//!     })
//!     .exact("@")
//!     .word()
//!     .one_or_more()
//!     .one_or_more_with(|b| {
//!         b.maybe(".").word();
//!     })
//!     .end();
//!
//! assert_eq!(email.without_delimiters(), r"^(\w|\.)+@\w+((?:\.)?\w)+$");
//! assert!(email.test("foo@bar.baz.co").unwrap());
//! assert!(!email.test("fooxbar.baz.co").unwrap());
//! ```
//!
//! ## Composition
//!
//! Every `*_with` operation runs its closure against a fresh, empty
//! [`PatternBuilder`], takes the nested pattern text, wraps it, and appends
//! it to the parent. The nested builder is dropped afterwards.
//!
//! Composition never fails, and never validates. A malformed pattern
//! (an unclosed [`PatternBuilder::group`], a quantifier with nothing to
//! repeat) is only reported when it is handed to the engine by
//! [`PatternBuilder::test`] or [`PatternBuilder::compile`].
//!
//! ## Crate Features
//!
//! #### feature: ``fancy`` (default)
//!
//! Patterns using look-around or backreferences are compiled with
//! ``fancy-regex``; everything else uses the [`::regex`] crate.
//!
//! Without this feature, such patterns fail with
//! [`PatternError::InvalidPatternSyntax`].
//!
//! Quantified look-around, as produced by [`PatternBuilder::non`], is
//! normalized before compilation in either case; see
//! [`regex::assertions`].
#![warn(missing_docs, unused)]

pub mod builder;
pub mod errors;
pub mod regex;

#[doc(inline)]
pub use builder::{Fragment, PatternBuilder, escape};
#[doc(inline)]
pub use errors::{PSResult, PatternError};

/// Start a new, empty [`PatternBuilder`].
///
/// ## Returns
/// A builder with an empty pattern.
pub fn matching() -> PatternBuilder {
    PatternBuilder::new()
}
