//! Env file loader.
//!
//! Responsibilities:
//! - Resolve the env file path, defaulting to `.env` in the working directory.
//! - Read the file line by line and apply each entry to an `EnvStore`.
//! - Report recoverable failures as `LoadError`.
//!
//! Does NOT handle:
//! - Line syntax (see parser.rs).
//! - Typed reads of the loaded values (see accessors.rs).
//!
//! Invariants / Assumptions:
//! - Nothing is written to the store before the file has been opened.
//! - Later bindings overwrite earlier ones, within a file and across loads.
//! - A failure mid-file leaves bindings from earlier lines in place.

mod builder;
mod error;
mod report;

#[cfg(test)]
mod tests;

pub use builder::EnvLoader;
pub use error::{LoadError, LoadErrorKind};
pub use report::LoadReport;
