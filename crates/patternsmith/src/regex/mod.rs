//! # Regex Engine Wrappers
//!
//! Assembled patterns are evaluated by an external engine. The [`regex`] crate
//! handles everything it can; patterns needing look-around or backreferences
//! go to ``fancy_regex`` when the ``fancy`` feature is enabled.
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern for [`regex`] only.
//!   * [`RegexPattern::Fancy`] - a pattern for ``fancy_regex`` only.
//!   * [`RegexPattern::classify`] - pick the label from the pattern syntax.
//! * Wrapping Compiled Regex - [`RegexWrapper`]
//! * Delimiter convention - [`delimiters`]
//! * Quantified look-around - [`assertions`]

pub mod assertions;
pub mod delimiters;
pub mod regex_pattern;
pub mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::RegexPattern;
#[doc(inline)]
pub use regex_wrapper::{ErrorWrapper, RegexWrapper};
