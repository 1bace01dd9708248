//! Load `KEY=value` files into the process environment.
//!
//! This crate reads simple env files (one `KEY=value` per line, `#` comments,
//! optional surrounding quotes) and binds each entry in the process
//! environment, then offers typed lookups with default fallback.
//!
//! ```no_run
//! envload::load("").expect("failed to load .env");
//!
//! let host = envload::get("APP_HOST", "127.0.0.1");
//! let port = envload::get_int("APP_PORT", 8080);
//! let debug = envload::get_bool("APP_DEBUG", false);
//! let secret = envload::must_get("APP_SECRET");
//! # let _ = (host, port, debug, secret);
//! ```
//!
//! The free functions work on the real process environment. To load into or
//! read from something else, use [`EnvLoader::load_into`] and the `*_from`
//! functions in [`accessors`] with any [`EnvStore`], such as [`MemoryEnv`].
//!
//! The process environment is global and unsynchronized: do not call
//! [`load`] while other threads read or write environment variables.

pub mod accessors;
pub mod constants;
mod loader;
mod parser;
mod store;

pub use loader::{EnvLoader, LoadError, LoadErrorKind, LoadReport};
pub use parser::{Entry, LineOutcome, parse_line, parse_str};
pub use store::{EnvStore, MemoryEnv, ProcessEnv, StoreError, validate_binding};

/// Load `filename` into the process environment.
///
/// An empty `filename` reads `.env` from the current working directory.
///
/// # Errors
///
/// Returns a [`LoadError`] when the path cannot be resolved, the file cannot
/// be opened or read, or a key cannot be set. Lines without `=` are skipped
/// silently.
pub fn load(filename: &str) -> Result<(), LoadError> {
    EnvLoader::new().with_path(filename).load().map(|_| ())
}

/// Return the value of `key` in the process environment, or `default`.
pub fn get(key: &str, default: &str) -> String {
    accessors::get_from(&ProcessEnv, key, default)
}

/// Return `key` as a boolean, or `default` when unset or not one of
/// `1`/`t`/`true`/`0`/`f`/`false` (any case).
pub fn get_bool(key: &str, default: bool) -> bool {
    accessors::get_bool_from(&ProcessEnv, key, default)
}

/// Return `key` as a base-10 integer, or `default` when unset or unparsable.
pub fn get_int(key: &str, default: i64) -> i64 {
    accessors::get_int_from(&ProcessEnv, key, default)
}

/// Return the value of `key` in the process environment.
///
/// # Panics
///
/// Panics with `environment variable {key} not found` when `key` is unset.
/// Use this only for configuration the program cannot run without.
#[track_caller]
pub fn must_get(key: &str) -> String {
    accessors::must_get_from(&ProcessEnv, key)
}
