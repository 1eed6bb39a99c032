//! Error types for revpull
//!
//! All errors are designed to be user-facing with clear messages and
//! suggestions where recovery is possible.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for revpull operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for revpull operations
#[derive(Error, Debug)]
pub enum Error {
    /// A page fetch failed after exhausting the retry budget
    #[error("Fetching page {page} failed after {attempts} attempt(s): {last_error}. Check your network connection and SerpApi quota, then re-run to resume from the saved output.")]
    FetchFailed {
        page: usize,
        attempts: u32,
        /// Last underlying cause. Plain field rather than `#[source]`
        /// because `anyhow::Error` does not implement `std::error::Error`.
        last_error: anyhow::Error,
    },

    /// Another run already holds the lock for this output
    #[error("Lock file '{}' already exists. Another run may be writing to this output; delete the lock file if it is stale.", .0.display())]
    AlreadyRunning(PathBuf),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// CSV read/write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection.")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
