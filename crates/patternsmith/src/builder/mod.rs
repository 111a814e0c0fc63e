//! # Pattern Builder
//!
//! * [`PatternBuilder`] - the fluent, append-only pattern buffer.
//! * [`Fragment`] - literal-or-sub-pattern arguments.
//! * [`escape()`] - the literal escaping policy.

pub mod escape;
pub mod fragment;
pub mod pattern_builder;

#[doc(inline)]
pub use escape::escape;
#[doc(inline)]
pub use fragment::{Composer, Fragment};
#[doc(inline)]
pub use pattern_builder::PatternBuilder;
