//! Line parser for env files.
//!
//! Responsibilities:
//! - Classify a single line as blank, comment, malformed, or a key/value entry.
//! - Apply trimming and the naive quote strip to entries.
//!
//! Does NOT handle:
//! - File I/O or path resolution (see loader/builder.rs).
//! - Writing to an environment store.
//!
//! Invariants:
//! - Parsing never fails. Lines without `=` are reported as `NoSeparator`
//!   and the caller skips them.
//! - Only the first `=` splits; later ones belong to the value.
//! - A value starting with a quote character loses its first and last
//!   characters whether or not the last one is a matching quote.

use crate::constants::{COMMENT_PREFIX, KEY_VALUE_SEPARATOR, QUOTE_CHARS};

/// One key/value pair parsed from a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// What a single line turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Empty or whitespace-only.
    Blank,
    /// Starts with `#` after trimming.
    Comment,
    /// Has content but no `=`.
    NoSeparator,
    Entry(Entry),
}

/// Parse one line of an env file.
pub fn parse_line(line: &str) -> LineOutcome {
    let line = line.trim();

    if line.is_empty() {
        return LineOutcome::Blank;
    }
    if line.starts_with(COMMENT_PREFIX) {
        return LineOutcome::Comment;
    }

    let Some((key, value)) = line.split_once(KEY_VALUE_SEPARATOR) else {
        return LineOutcome::NoSeparator;
    };

    LineOutcome::Entry(Entry::new(key.trim(), strip_quotes(value.trim())))
}

/// Parse every line of `input`, keeping only entries, in file order.
///
/// Duplicate keys are all returned; applying them in order gives
/// last-write-wins.
pub fn parse_str(input: &str) -> Vec<Entry> {
    input
        .lines()
        .filter_map(|line| match parse_line(line) {
            LineOutcome::Entry(entry) => Some(entry),
            _ => None,
        })
        .collect()
}

/// Drop the first and last characters when the value opens with a quote.
///
/// A lone quote character yields the empty string. Characters, not bytes,
/// are removed so the result is always valid UTF-8.
pub(crate) fn strip_quotes(value: &str) -> &str {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if QUOTE_CHARS.contains(&first) => {
            chars.next_back();
            chars.as_str()
        }
        _ => value,
    }
}
