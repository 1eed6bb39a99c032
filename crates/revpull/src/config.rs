//! Run configuration
//!
//! One immutable `RunConfig` describes a whole run. It is built once by the
//! CLI layer and passed by reference into the driver; nothing in the core
//! mutates it.

use crate::error::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// Run Configuration Constants
// ============================================================================

/// Sample location used when no `data_id` is given (the Google Maps
/// `data_id` of Nelson Mandela Park).
pub const DEFAULT_DATA_ID: &str = "0x47c60b883f0a74c7:0xe0f0efd82b7899e9";

/// Default review language.
pub const DEFAULT_LOCALE: &str = "en";

/// Default upper bound on fetched pages.
pub const DEFAULT_MAX_PAGES: usize = 10;

/// Default output CSV path.
pub const DEFAULT_OUTPUT: &str = "reviews_output.csv";

/// Default pause between page requests, in seconds.
pub const DEFAULT_PAUSE_SECS: f64 = 1.2;

/// Default retry budget per page fetch.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Configuration for one harvesting run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Google Maps `data_id` of the location to fetch reviews for
    pub data_id: String,

    /// Review language (SerpApi `hl` parameter)
    pub hl: String,

    /// Maximum number of pages to fetch (exclusive upper bound on fetch
    /// attempts: at most `max_pages` pages are requested)
    pub max_pages: usize,

    /// Output CSV path; the lock marker lives at `<output>.lock`
    pub output: PathBuf,

    /// Pause between page requests
    pub pause: Duration,

    /// Retry budget for a single page fetch
    pub max_attempts: u32,

    /// SerpApi credential
    pub api_key: String,
}

impl RunConfig {
    /// Create a config with the default run parameters
    pub fn new(data_id: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            data_id: data_id.into(),
            hl: DEFAULT_LOCALE.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            output: PathBuf::from(DEFAULT_OUTPUT),
            pause: Duration::from_secs_f64(DEFAULT_PAUSE_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            api_key: api_key.into(),
        }
    }

    /// Check the run parameters before starting
    pub fn validate(&self) -> Result<()> {
        if self.data_id.is_empty() {
            return Err(Error::config("data_id must not be empty"));
        }
        if self.max_pages == 0 {
            return Err(Error::config("max_pages must be a positive integer"));
        }
        if self.max_attempts == 0 {
            return Err(Error::config("retry budget must allow at least one attempt"));
        }
        if self.api_key.is_empty() {
            return Err(Error::config(
                "SerpApi key is empty. Set SERPAPI_KEY in the environment or a .env file, or pass --api-key",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> RunConfig {
        RunConfig::new("0x1:0x2", "secret")
    }

    #[test]
    fn test_defaults() {
        let config = valid_config();
        assert_eq!(config.hl, DEFAULT_LOCALE);
        assert_eq!(config.max_pages, DEFAULT_MAX_PAGES);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_pages() {
        let mut config = valid_config();
        config.max_pages = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        let mut config = valid_config();
        config.max_attempts = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_key() {
        let mut config = valid_config();
        config.api_key = String::new();
        assert!(config.validate().is_err());
    }
}
