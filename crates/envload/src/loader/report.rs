//! Summary of a completed load.

use std::path::{Path, PathBuf};

/// What a successful load did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    path: PathBuf,
    bound: usize,
    skipped: usize,
    comments: usize,
    blank: usize,
}

impl LoadReport {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self {
            path,
            bound: 0,
            skipped: 0,
            comments: 0,
            blank: 0,
        }
    }

    /// Absolute path of the file that was read.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of bindings written. Duplicate keys count once per line.
    pub fn bound(&self) -> usize {
        self.bound
    }

    /// Number of lines skipped for lacking `=`.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Number of full-line comments.
    pub fn comments(&self) -> usize {
        self.comments
    }

    /// Number of empty or whitespace-only lines.
    pub fn blank(&self) -> usize {
        self.blank
    }

    pub(crate) fn record_bound(&mut self) {
        self.bound += 1;
    }

    pub(crate) fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub(crate) fn record_comment(&mut self) {
        self.comments += 1;
    }

    pub(crate) fn record_blank(&mut self) {
        self.blank += 1;
    }
}
