//! Error types for env file loading.
//!
//! Responsibilities:
//! - Define the recoverable failures of a load: path resolution, open,
//!   read, and store writes.
//! - Expose a fieldless `LoadErrorKind` for callers that only branch on the
//!   category.
//!
//! Does NOT handle:
//! - Missing required keys. `must_get` panics instead of returning an error.
//! - Malformed lines. Lines without `=` are skipped, not reported.
//!
//! Invariants:
//! - All variants include the absolute path that was being loaded.
//! - Errors NEVER include values read from the file, only keys and line numbers.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur while loading an env file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The filename could not be made absolute (e.g. the working directory is gone).
    #[error("Failed to resolve absolute path for {path}")]
    PathResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to open env file at {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An I/O error while reading after the file was opened.
    ///
    /// Bindings from lines before `line` have already been applied.
    #[error("Failed to read env file at {path} (line {line})")]
    ScanFailure {
        path: PathBuf,
        line: usize,
        #[source]
        source: io::Error,
    },

    /// The store refused a binding.
    ///
    /// SAFETY: only the key is reported, never the value.
    #[error("Failed to set environment variable {key:?} from {path} (line {line})")]
    EnvSet {
        key: String,
        path: PathBuf,
        line: usize,
        #[source]
        source: StoreError,
    },
}

/// The category of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadErrorKind {
    PathResolution,
    FileOpen,
    ScanFailure,
    EnvSet,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::PathResolution { .. } => LoadErrorKind::PathResolution,
            LoadError::FileOpen { .. } => LoadErrorKind::FileOpen,
            LoadError::ScanFailure { .. } => LoadErrorKind::ScanFailure,
            LoadError::EnvSet { .. } => LoadErrorKind::EnvSet,
        }
    }

    /// Whether this is an open failure caused by the file not existing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LoadError::FileOpen { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
