// src/session.rs

//! Capture files for subprocess output.
//!
//! Every capture file is created in the session's temp directory with the
//! session prefix and is deleted when its [`CaptureFile`] handle drops, so a
//! phase never leaves its files behind, whichever way it returns.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::errors::Result;
use crate::fs::FileSystem;

/// Prefix shared by every run, so a later run can sweep what an aborted one
/// left behind.
pub const DEFAULT_PREFIX: &str = "brewup-";

#[derive(Debug, Clone)]
pub struct TempSession {
    dir: PathBuf,
    prefix: String,
}

impl TempSession {
    /// Session in `dir` using [`DEFAULT_PREFIX`].
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self::with_prefix(dir, DEFAULT_PREFIX)
    }

    pub fn with_prefix(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Allocate a new, empty, uniquely named capture file.
    pub fn capture(&self) -> Result<CaptureFile> {
        let file = tempfile::Builder::new()
            .prefix(&self.prefix)
            .tempfile_in(&self.dir)
            .with_context(|| format!("creating capture file in {:?}", self.dir))?;
        debug!(path = %file.path().display(), "capture file created");
        Ok(CaptureFile { file })
    }

    /// Remove empty files left behind with this session's prefix.
    ///
    /// Best effort: failures are logged, and files with content are kept.
    /// Returns how many files were removed.
    pub fn sweep_empty_leftovers(&self, fs: &dyn FileSystem) -> usize {
        let entries = match fs.read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(dir = %self.dir.display(), error = %err, "cannot list temp dir for sweep");
                return 0;
            }
        };

        let mut removed = 0;
        for path in entries {
            let matches_prefix = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(&self.prefix));
            if !matches_prefix || !fs.is_file(&path) {
                continue;
            }

            match fs.file_len(&path) {
                Ok(0) => match fs.remove_file(&path) {
                    Ok(()) => removed += 1,
                    Err(err) => warn!(path = %path.display(), error = %err, "sweep failed"),
                },
                Ok(len) => debug!(path = %path.display(), len, "keeping non-empty leftover"),
                Err(err) => warn!(path = %path.display(), error = %err, "sweep failed"),
            }
        }

        debug!(removed, "temp dir sweep finished");
        removed
    }
}

/// One capture file. Deleted on drop.
#[derive(Debug)]
pub struct CaptureFile {
    file: NamedTempFile,
}

impl CaptureFile {
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Read what the subprocess wrote.
    pub fn read(&self, fs: &dyn FileSystem) -> Result<String> {
        Ok(fs.read_to_string(self.path())?)
    }
}
