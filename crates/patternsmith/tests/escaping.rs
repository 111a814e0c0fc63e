#![allow(missing_docs)]

use patternsmith::PatternBuilder;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn exact_literal_matches_itself(text in "\\PC{0,40}") {
        let mut matcher = PatternBuilder::new();
        matcher.exact(&text);

        let suffixed = format!("{text}x");
        let prefixed = format!("x{text}");

        prop_assert!(matcher.test(&text).unwrap());
        prop_assert!(matcher.test(&suffixed).unwrap());
        prop_assert!(matcher.test(&prefixed).unwrap());
    }

    #[test]
    fn anchored_literal_matches_only_itself(text in "\\PC{0,40}") {
        let mut matcher = PatternBuilder::new();
        matcher.begin().exact(&text).end();

        let continued = format!("{text}\nmore");

        prop_assert!(matcher.test(&text).unwrap());
        prop_assert!(!matcher.test(&continued).unwrap());
    }

    #[test]
    fn metacharacter_literals_match_verbatim(
        text in "[.\\\\+*?\\[\\]^$(){}=!<>|:#/&~-]{1,20}",
    ) {
        let mut matcher = PatternBuilder::new();
        matcher.begin().exact(&text).end();

        let compiled = matcher.compile().unwrap();
        prop_assert!(compiled.is_basic());
        prop_assert!(matcher.test(&text).unwrap());
    }

    #[test]
    fn non_never_rejects_by_itself(
        head in "[a-z]{0,8}",
        excluded in "\\PC{1,8}",
        tail in "[a-z]{0,8}",
    ) {
        let mut matcher = PatternBuilder::new();
        matcher.begin().exact(&head).non(&excluded).exact(&tail).end();

        let subject = format!("{head}{tail}");
        prop_assert!(matcher.test(&subject).unwrap());
    }

    #[test]
    fn delimited_form_wraps_bare_form(text in "\\PC{0,40}") {
        let mut matcher = PatternBuilder::new();
        matcher.maybe(&text).word().one_or_more();

        let bare = matcher.without_delimiters().to_string();
        let delimited = format!("/{bare}/");
        prop_assert_eq!(matcher.without_delimiters(), bare.as_str());
        prop_assert_eq!(matcher.regex(), delimited);
    }
}
