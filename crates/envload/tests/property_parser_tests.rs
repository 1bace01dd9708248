//! Property-based tests for env line parsing and typed coercion.
//!
//! Test coverage:
//! - Well-formed `KEY=value` lines bind the trimmed value exactly.
//! - Quoted values lose exactly their first and last characters.
//! - Blank, comment, and separator-less lines never produce an entry.
//! - Integer and boolean accessors agree with the stored text.

use proptest::prelude::*;

use envload::{Entry, LineOutcome, MemoryEnv, accessors, parse_line};

/// Strategy for environment variable names.
fn key_strategy() -> impl Strategy<Value = String> {
    "[A-Z_][A-Z0-9_]{0,24}".prop_map(String::from)
}

/// Strategy for unquoted values: no leading quote, no surrounding whitespace.
fn plain_value_strategy() -> impl Strategy<Value = String> {
    "([a-zA-Z0-9:/._@=#-]([a-zA-Z0-9 :/._@=#'\"-]{0,30}[a-zA-Z0-9:/._@=#-])?)?"
        .prop_map(String::from)
}

/// Strategy for padding around keys and values.
fn padding_strategy() -> impl Strategy<Value = String> {
    "[ \t]{0,3}".prop_map(String::from)
}

proptest! {
    #[test]
    fn prop_plain_pair_binds_trimmed_value(
        key in key_strategy(),
        value in plain_value_strategy(),
        pad_a in padding_strategy(),
        pad_b in padding_strategy(),
        pad_c in padding_strategy(),
        pad_d in padding_strategy(),
    ) {
        let line = format!("{pad_a}{key}{pad_b}={pad_c}{value}{pad_d}");
        prop_assert_eq!(parse_line(&line), LineOutcome::Entry(Entry::new(key, value)));
    }

    #[test]
    fn prop_quoted_value_loses_first_and_last_char(
        key in key_strategy(),
        inner in "[a-zA-Z0-9 ]{0,30}",
        quote in prop_oneof![Just('"'), Just('\'')],
    ) {
        // Spaces inside the quotes survive because the quotes shield them from trimming.
        let line = format!("{key}={quote}{inner}{quote}");
        prop_assert_eq!(parse_line(&line), LineOutcome::Entry(Entry::new(key, inner)));
    }

    #[test]
    fn prop_comment_lines_are_ignored(body in "[^\n\r]{0,40}", pad in padding_strategy()) {
        let line = format!("{pad}#{body}");
        prop_assert_eq!(parse_line(&line), LineOutcome::Comment);
    }

    #[test]
    fn prop_lines_without_separator_are_skipped(text in "[a-zA-Z0-9_ .:-]{1,40}") {
        let outcome = parse_line(&text);
        prop_assert!(
            outcome == LineOutcome::NoSeparator || outcome == LineOutcome::Blank,
            "unexpected outcome {:?}",
            outcome
        );
    }

    #[test]
    fn prop_get_int_matches_stored_integer(key in key_strategy(), n in any::<i64>(), default in any::<i64>()) {
        let store: MemoryEnv = [(key.clone(), n.to_string())].into_iter().collect();
        prop_assert_eq!(accessors::get_int_from(&store, &key, default), n);
    }

    #[test]
    fn prop_get_int_non_numeric_falls_back(key in key_strategy(), text in "[a-zA-Z ]{1,12}", default in any::<i64>()) {
        let store: MemoryEnv = [(key.clone(), text)].into_iter().collect();
        prop_assert_eq!(accessors::get_int_from(&store, &key, default), default);
    }

    #[test]
    fn prop_get_bool_unrecognized_keeps_default(
        key in key_strategy(),
        text in "[a-z]{2,8}",
        default in any::<bool>(),
    ) {
        prop_assume!(text != "true" && text != "false");
        let store: MemoryEnv = [(key.clone(), text)].into_iter().collect();
        prop_assert_eq!(accessors::get_bool_from(&store, &key, default), default);
    }
}
