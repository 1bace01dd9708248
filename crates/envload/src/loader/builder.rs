//! Env file loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` that picks the file to read.
//! - Resolve the file to an absolute path, open it, and apply its entries
//!   to a store.
//!
//! Does NOT handle:
//! - Line classification (delegated to parser.rs).
//! - Reading typed values back (see accessors.rs).
//!
//! Invariants / Assumptions:
//! - An unset or empty path means `.env` relative to the working directory.
//! - The file handle is owned by `load_into` and dropped on every return path.
//! - Values are never logged; keys appear at trace level only.
//! - Invalid UTF-8 is decoded lossily per line; only I/O errors stop a load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::error::LoadError;
use super::report::LoadReport;
use crate::constants::DEFAULT_ENV_FILE;
use crate::parser::{LineOutcome, parse_line};
use crate::store::{EnvStore, ProcessEnv};

/// Loads `KEY=value` files into an environment store.
#[derive(Debug, Clone, Default)]
pub struct EnvLoader {
    path: Option<PathBuf>,
}

impl EnvLoader {
    /// Create a loader that reads `.env` from the working directory.
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Read `path` instead of the default file. An empty path keeps the default.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Go back to reading `.env` from the working directory.
    pub fn with_default_path(mut self) -> Self {
        self.path = None;
        self
    }

    /// The path as configured, before resolution.
    pub fn path(&self) -> &Path {
        match &self.path {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => Path::new(DEFAULT_ENV_FILE),
        }
    }

    /// Resolve the configured path against the current working directory.
    pub fn resolve_path(&self) -> Result<PathBuf, LoadError> {
        let path = self.path();
        std::path::absolute(path).map_err(|source| LoadError::PathResolution {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load into the process environment.
    ///
    /// # Errors
    ///
    /// See [`EnvLoader::load_into`].
    pub fn load(&self) -> Result<LoadReport, LoadError> {
        self.load_into(&mut ProcessEnv)
    }

    /// Load into `store`, overwriting existing bindings for every key in the file.
    ///
    /// # Errors
    ///
    /// - `PathResolution` if the path cannot be made absolute.
    /// - `FileOpen` if the file is missing or unreadable. The store is untouched.
    /// - `ScanFailure` if reading fails part way with an I/O error.
    /// - `EnvSet` if the store rejects a key or value.
    ///
    /// Lines without `=` are skipped and counted in the report, not reported as errors.
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD and the line is still bound.
    pub fn load_into<S: EnvStore + ?Sized>(&self, store: &mut S) -> Result<LoadReport, LoadError> {
        let path = self.resolve_path()?;

        let file = File::open(&path).map_err(|source| LoadError::FileOpen {
            path: path.clone(),
            source,
        })?;

        let mut report = LoadReport::new(path.clone());
        let mut reader = BufReader::new(file);
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| LoadError::ScanFailure {
                    path: path.clone(),
                    line: line_no + 1,
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = String::from_utf8_lossy(strip_line_ending(&buf));

            match parse_line(&line) {
                LineOutcome::Blank => {
                    tracing::trace!(line = line_no, reason = "blank", "Skipping env line");
                    report.record_blank();
                }
                LineOutcome::Comment => {
                    tracing::trace!(line = line_no, reason = "comment", "Skipping env line");
                    report.record_comment();
                }
                LineOutcome::NoSeparator => {
                    tracing::trace!(line = line_no, reason = "missing '='", "Skipping env line");
                    report.record_skipped();
                }
                LineOutcome::Entry(entry) => {
                    store
                        .set(&entry.key, &entry.value)
                        .map_err(|source| LoadError::EnvSet {
                            key: entry.key.clone(),
                            path: path.clone(),
                            line: line_no,
                            source,
                        })?;
                    tracing::trace!(line = line_no, key = %entry.key, "Bound env var");
                    report.record_bound();
                }
            }
        }

        tracing::debug!(
            path = %path.display(),
            bound = report.bound(),
            skipped = report.skipped(),
            comments = report.comments(),
            blank = report.blank(),
            "Loaded env file"
        );

        Ok(report)
    }
}

/// Drop a trailing `\n` or `\r\n`.
fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
