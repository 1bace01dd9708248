//! Typed lookups with default fallback.
//!
//! Responsibilities:
//! - Read string, boolean, and integer values from any `EnvStore`.
//! - Fall back to a caller-supplied default when a key is absent or its
//!   value cannot be coerced.
//! - Provide the fail-fast `must_get_from` for required keys.
//!
//! Does NOT handle:
//! - Mutating the store; every function here is a pure read.
//! - Trimming stored values. `" 42"` is not an integer.
//!
//! Invariants:
//! - Only `must_get_from` can fail, and it fails by panicking.

use crate::constants::{FALSE_VALUES, TRUE_VALUES};
use crate::store::EnvStore;

/// Return the value bound to `key`, or `default` when absent.
pub fn get_from<S: EnvStore + ?Sized>(store: &S, key: &str, default: &str) -> String {
    store.lookup(key).unwrap_or_else(|| default.to_string())
}

/// Interpret a value as a boolean, case-insensitively.
///
/// `1`, `t`, `true` are true and `0`, `f`, `false` are false. Anything else
/// is `None`.
pub fn parse_bool(value: &str) -> Option<bool> {
    let lowered = value.to_lowercase();
    if TRUE_VALUES.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_VALUES.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Return the boolean bound to `key`, or `default` when absent or unrecognized.
pub fn get_bool_from<S: EnvStore + ?Sized>(store: &S, key: &str, default: bool) -> bool {
    store
        .lookup(key)
        .and_then(|value| parse_bool(&value))
        .unwrap_or(default)
}

/// Return the base-10 integer bound to `key`, or `default` when absent or unparsable.
pub fn get_int_from<S: EnvStore + ?Sized>(store: &S, key: &str, default: i64) -> i64 {
    store
        .lookup(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// Return the value bound to `key`.
///
/// # Panics
///
/// Panics with `environment variable {key} not found` when `key` is absent.
/// This is meant for required configuration at startup and is not a
/// recoverable error.
#[track_caller]
pub fn must_get_from<S: EnvStore + ?Sized>(store: &S, key: &str) -> String {
    match store.lookup(key) {
        Some(value) => value,
        None => panic!("environment variable {} not found", key),
    }
}
