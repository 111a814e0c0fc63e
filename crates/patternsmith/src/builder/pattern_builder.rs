//! # Fluent Pattern Builder

use core::fmt::Display;

use crate::{
    builder::{Fragment, escape},
    errors::{PSResult, PatternError},
    regex::{RegexPattern, RegexWrapper, delimiters},
};

/// Fluent, append-only regex pattern builder.
///
/// Each operation appends one fragment to the pattern and returns the
/// builder, so calls chain. The order of calls is the order of the pattern;
/// nothing already appended is ever edited.
///
/// Operations named `*_with` take a closure instead of a literal. The
/// closure populates a fresh nested builder, whose pattern is wrapped
/// (per operation) and appended in one step.
///
/// ```rust
/// use patternsmith::PatternBuilder;
///
/// let mut builder = PatternBuilder::new();
/// builder.exact("my name is: ").group_with(|b| {
///     b.exact("foo").or().exact("bar");
/// });
///
/// assert_eq!(builder.without_delimiters(), r"my name is\: (foo|bar)");
/// assert_eq!(builder.regex(), r"/my name is\: (foo|bar)/");
/// assert!(builder.test("my name is: bar").unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PatternBuilder {
    expression: String,
}

impl PatternBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw pattern text, without escaping.
    ///
    /// ## Arguments
    /// * `regex` - pattern syntax to append as-is.
    pub fn append(
        &mut self,
        regex: &str,
    ) -> &mut Self {
        self.expression.push_str(regex);
        self
    }

    /// Quote regex metacharacters in a literal; see [`escape()`].
    pub fn escape(value: &str) -> String {
        escape(value)
    }

    /// Run `composer` against a fresh builder, and wrap its pattern.
    fn compose<F>(
        composer: F,
        open: &str,
        close: &str,
    ) -> String
    where
        F: FnOnce(&mut PatternBuilder),
    {
        let mut nested = PatternBuilder::new();
        composer(&mut nested);

        let inner = nested.without_delimiters();
        let mut wrapped = String::with_capacity(open.len() + inner.len() + close.len());
        wrapped.push_str(open);
        wrapped.push_str(inner);
        wrapped.push_str(close);
        wrapped
    }

    fn append_composed<F>(
        &mut self,
        composer: F,
        open: &str,
        close: &str,
    ) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        let composed = Self::compose(composer, open, close);
        self.append(&composed)
    }

    /// Match the start of the subject: `^`.
    pub fn begin(&mut self) -> &mut Self {
        self.append("^")
    }

    /// Match the end of the subject: `$`.
    pub fn end(&mut self) -> &mut Self {
        self.append("$")
    }

    /// Match a literal string verbatim.
    ///
    /// ## Arguments
    /// * `value` - the literal; metacharacters are escaped.
    pub fn exact(
        &mut self,
        value: &str,
    ) -> &mut Self {
        let value = escape(value);
        self.append(&value)
    }

    /// Alias for [`Self::exact`].
    pub fn find(
        &mut self,
        value: &str,
    ) -> &mut Self {
        self.exact(value)
    }

    /// Append a nested sub-pattern, unwrapped.
    ///
    /// Alternations inside the nested pattern are not scoped; use
    /// [`Self::group_with`] for that.
    pub fn exact_with<F>(
        &mut self,
        composer: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.append_composed(composer, "", "")
    }

    /// Append a [`Fragment`]: literals as [`Self::exact`],
    /// sub-patterns as [`Self::exact_with`].
    pub fn fragment(
        &mut self,
        fragment: Fragment<'_>,
    ) -> &mut Self {
        match fragment {
            Fragment::Literal(value) => self.exact(&value),
            Fragment::SubPattern(composer) => self.exact_with(composer),
        }
    }

    /// Optionally match a literal: `(?:value)?`.
    pub fn maybe(
        &mut self,
        value: &str,
    ) -> &mut Self {
        let value = escape(value);
        self.append("(?:").append(&value).append(")?")
    }

    /// Optionally match a nested sub-pattern: `(?:...)?`.
    pub fn maybe_with<F>(
        &mut self,
        composer: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.append_composed(composer, "(?:", ")?")
    }

    /// Negative look-ahead on a literal: `(?!value)?`.
    ///
    /// The assertion is optional, so it never rules out a match by itself:
    /// `foo(?!bar)?baz` matches `foobaz` and not `foobarbaz`. Neither engine
    /// accepts a quantified assertion; it is normalized when the pattern is
    /// compiled (see [`crate::regex::assertions`]), the buffer is unchanged.
    ///
    /// ```rust
    /// use patternsmith::PatternBuilder;
    ///
    /// let mut builder = PatternBuilder::new();
    /// builder.exact("foo").non("bar").exact("baz");
    ///
    /// assert_eq!(builder.without_delimiters(), "foo(?!bar)?baz");
    /// assert!(builder.test("foobaz").unwrap());
    /// assert!(!builder.test("foobarbaz").unwrap());
    /// ```
    pub fn non(
        &mut self,
        value: &str,
    ) -> &mut Self {
        let value = escape(value);
        self.append("(?!").append(&value).append(")?")
    }

    /// A word character: `\w`.
    pub fn word(&mut self) -> &mut Self {
        self.append(r"\w")
    }

    /// One or more word characters: `\w+`.
    pub fn words(&mut self) -> &mut Self {
        self.append(r"\w+")
    }

    /// A non-word character: `\W`.
    pub fn non_word(&mut self) -> &mut Self {
        self.append(r"\W")
    }

    /// A digit: `\d`.
    pub fn digit(&mut self) -> &mut Self {
        self.append(r"\d")
    }

    /// A non-digit: `\D`.
    pub fn non_digit(&mut self) -> &mut Self {
        self.append(r"\D")
    }

    /// A whitespace character: `\s`.
    pub fn space(&mut self) -> &mut Self {
        self.append(r"\s")
    }

    /// A non-whitespace character: `\S`.
    pub fn non_space(&mut self) -> &mut Self {
        self.append(r"\S")
    }

    /// A bare alternation point: `|`.
    ///
    /// The following operations supply the right-hand branch.
    pub fn or(&mut self) -> &mut Self {
        self.append("|")
    }

    /// Alternation with a literal right-hand branch: `|value`.
    pub fn or_exact(
        &mut self,
        value: &str,
    ) -> &mut Self {
        self.or().exact(value)
    }

    /// Alternation with a grouped sub-pattern branch: `|(...)`.
    pub fn or_with<F>(
        &mut self,
        composer: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.or().group_with(composer)
    }

    /// Alternation with a [`Fragment`] branch: literals as [`Self::or_exact`],
    /// sub-patterns as [`Self::or_with`].
    pub fn or_fragment(
        &mut self,
        fragment: Fragment<'_>,
    ) -> &mut Self {
        match fragment {
            Fragment::Literal(value) => self.or_exact(&value),
            Fragment::SubPattern(composer) => self.or_with(composer),
        }
    }

    /// Match any one of the values.
    ///
    /// The first value is appended with [`Self::fragment`]; each following
    /// value with [`Self::or_fragment`]. No values is a no-op.
    ///
    /// ```rust
    /// use patternsmith::{Fragment, PatternBuilder};
    ///
    /// let mut builder = PatternBuilder::new();
    /// builder.any(["foo", "b.r"]);
    /// assert_eq!(builder.without_delimiters(), r"foo|b\.r");
    ///
    /// let mut builder = PatternBuilder::new();
    /// builder.any([
    ///     Fragment::sub(|b| {
    ///         b.digit().one_or_more();
    ///     }),
    ///     Fragment::sub(|b| {
    ///         b.words();
    ///     }),
    ///     Fragment::literal("?"),
    /// ]);
    /// assert_eq!(builder.without_delimiters(), r"\d+|(\w+)|\?");
    /// ```
    pub fn any<'a, I>(
        &mut self,
        values: I,
    ) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment<'a>>,
    {
        let mut values = values.into_iter();

        let Some(first) = values.next() else {
            return self;
        };
        self.fragment(first.into());

        for value in values {
            self.or_fragment(value.into());
        }
        self
    }

    /// Open a group: `(`.
    ///
    /// Must be closed later by [`Self::group_end`]; an unbalanced group
    /// is only reported when the pattern is evaluated.
    pub fn group(&mut self) -> &mut Self {
        self.append("(")
    }

    /// Close a group opened by [`Self::group`]: `)`.
    pub fn group_end(&mut self) -> &mut Self {
        self.append(")")
    }

    /// Group a nested sub-pattern: `(...)`.
    pub fn group_with<F>(
        &mut self,
        composer: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.append_composed(composer, "(", ")")
    }

    /// Repeat the preceding atom one or more times: `+`.
    pub fn one_or_more(&mut self) -> &mut Self {
        self.append("+")
    }

    /// Group a nested sub-pattern and repeat it one or more times: `(...)+`.
    pub fn one_or_more_with<F>(
        &mut self,
        composer: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.group_with(composer).one_or_more()
    }

    /// Repeat the preceding atom zero or more times: `*`.
    pub fn zero_or_more(&mut self) -> &mut Self {
        self.append("*")
    }

    /// Group a nested sub-pattern and repeat it zero or more times: `(...)*`.
    pub fn zero_or_more_with<F>(
        &mut self,
        composer: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.group_with(composer).zero_or_more()
    }

    /// Repeat the preceding atom exactly `n` times: `{n}`.
    pub fn repeat(
        &mut self,
        n: usize,
    ) -> &mut Self {
        let quantifier = format!("{{{n}}}");
        self.append(&quantifier)
    }

    /// Group a nested sub-pattern and repeat it exactly `n` times: `(...){n}`.
    pub fn repeat_with<F>(
        &mut self,
        n: usize,
        composer: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut PatternBuilder),
    {
        self.group_with(composer).repeat(n)
    }

    /// Get the pattern, without delimiters.
    pub fn without_delimiters(&self) -> &str {
        &self.expression
    }

    /// Get the pattern wrapped in delimiters: `/pattern/`.
    pub fn regex(&self) -> String {
        delimiters::wrap(&self.expression)
    }

    /// Compile the pattern.
    ///
    /// The delimited form is labeled with [`RegexPattern::from_delimited`]:
    /// quantified look-around is normalized, and the engine is picked from
    /// the remaining syntax.
    ///
    /// ## Returns
    /// The compiled [`RegexWrapper`], or
    /// [`PatternError::InvalidPatternSyntax`] carrying the engine error.
    pub fn compile(&self) -> PSResult<RegexWrapper> {
        RegexPattern::from_delimited(&self.regex())?
            .compile()
            .map_err(|source| PatternError::InvalidPatternSyntax {
                pattern: self.expression.clone(),
                source,
            })
    }

    /// Test whether the pattern matches anywhere in `subject`.
    ///
    /// Matching is unanchored unless [`Self::begin`] / [`Self::end`]
    /// were used. The builder is not modified.
    ///
    /// ## Arguments
    /// * `subject` - the string to search.
    ///
    /// ## Returns
    /// `true` on at least one match; an error if the engine rejects the
    /// pattern or fails while matching.
    pub fn test(
        &self,
        subject: &str,
    ) -> PSResult<bool> {
        let regex = self.compile()?;
        log::trace!("testing {:?} against {subject:?}", regex.as_str());

        regex
            .is_match(subject)
            .map_err(|source| PatternError::MatchFailed {
                pattern: self.expression.clone(),
                source,
            })
    }
}

impl Display for PatternBuilder {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.write_str(&self.regex())
    }
}
