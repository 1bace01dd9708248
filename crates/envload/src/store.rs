//! Environment store abstraction.
//!
//! Responsibilities:
//! - Define the `EnvStore` capability that the loader writes to and the
//!   accessors read from.
//! - Provide `ProcessEnv`, backed by the real process environment.
//! - Provide `MemoryEnv`, an in-memory store for tests and sandboxed loads.
//!
//! Does NOT handle:
//! - Parsing env files (see parser.rs).
//! - Type coercion of stored values (see accessors.rs).
//!
//! Invariants:
//! - Both stores reject the same keys and values: empty keys, keys containing
//!   `=`, and NUL anywhere. `std::env::set_var` panics on these, so they are
//!   checked before the write.
//! - Errors never include the rejected value.

use std::collections::BTreeMap;
use std::collections::btree_map;

use thiserror::Error;

/// Reasons a store refuses a binding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("environment variable name is empty")]
    EmptyKey,

    #[error("environment variable name {key:?} contains '='")]
    KeyContainsSeparator { key: String },

    #[error("environment variable name {key:?} contains a NUL character")]
    KeyContainsNul { key: String },

    /// SAFETY: only the key is reported, the value may be a secret.
    #[error("value for environment variable {key:?} contains a NUL character")]
    ValueContainsNul { key: String },
}

/// Check that `key`/`value` can be bound in a process environment.
pub fn validate_binding(key: &str, value: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::EmptyKey);
    }
    if key.contains('=') {
        return Err(StoreError::KeyContainsSeparator {
            key: key.to_string(),
        });
    }
    if key.contains('\0') {
        return Err(StoreError::KeyContainsNul {
            key: key.to_string(),
        });
    }
    if value.contains('\0') {
        return Err(StoreError::ValueContainsNul {
            key: key.to_string(),
        });
    }
    Ok(())
}

/// A string-keyed table of configuration values.
///
/// The loader only ever adds or overwrites bindings; nothing in this crate
/// removes them.
pub trait EnvStore {
    /// Return the value bound to `key`, if any.
    fn lookup(&self, key: &str) -> Option<String>;

    /// Bind `key` to `value`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// The real process environment.
///
/// Writes are not synchronized. Loading while other threads read or write the
/// environment is a data race; callers in multi-threaded programs must
/// serialize access themselves.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        // Non-UTF-8 values are converted lossily.
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_binding(key, value)?;
        // SAFETY: key and value were validated above so `set_var` cannot panic.
        // This crate assumes a single-threaded caller during loads (see the type docs).
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// An in-memory store that never touches the process environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Iterate over bindings in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.vars.iter()
    }
}

impl EnvStore for MemoryEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        validate_binding(key, value)?;
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
