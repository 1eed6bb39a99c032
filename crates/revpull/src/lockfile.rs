//! Run lock handling (`<output>.lock`)
//!
//! An advisory single-instance guard tied to the output path. The marker's
//! mere existence is the signal; all runs must cooperate via the same
//! convention. Acquisition is scoped: dropping the guard removes the
//! marker, so it is released on success, early stop, and fatal error alike.

use crate::error::{Error, Result};
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Location of the lock marker for an output path
pub fn lock_path(output: &Path) -> PathBuf {
    let mut os = output.as_os_str().to_os_string();
    os.push(".lock");
    PathBuf::from(os)
}

/// Exclusive run guard over an output destination
#[derive(Debug)]
pub struct RunLock {
    path: PathBuf,
    released: bool,
}

impl RunLock {
    /// Acquire the lock for `output`.
    ///
    /// Fails with [`Error::AlreadyRunning`] if the marker already exists.
    /// Creation uses `create_new`, so two concurrent acquisitions cannot
    /// both succeed.
    pub fn acquire(output: &Path) -> Result<Self> {
        let path = lock_path(output);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                // Timestamp is for operator debugging only; existence is the signal.
                let _ = writeln!(file, "locked at {}", Utc::now().to_rfc3339());
                debug!(lock = %path.display(), "acquired run lock");
                Ok(Self {
                    path,
                    released: false,
                })
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {
                Err(Error::AlreadyRunning(path))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Release the lock explicitly. Idempotent; `Drop` covers the
    /// remaining exit paths.
    pub fn release(mut self) {
        self.remove_marker();
    }

    fn remove_marker(&mut self) {
        if self.released {
            return;
        }
        self.released = true;

        match fs::remove_file(&self.path) {
            Ok(()) => debug!(lock = %self.path.display(), "released run lock"),
            Err(err) if err.kind() == ErrorKind::NotFound => {}
            Err(err) => {
                warn!(lock = %self.path.display(), error = %err, "failed to remove run lock")
            }
        }
    }
}

impl Drop for RunLock {
    fn drop(&mut self) {
        self.remove_marker();
    }
}
