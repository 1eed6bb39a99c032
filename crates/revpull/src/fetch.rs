//! Page fetching with bounded exponential-backoff retry
//!
//! The remote call is an opaque capability behind [`ReviewSource`]; the
//! retry policy wraps any implementation. Backoff is deterministic
//! (`2^(attempt-1)` seconds, no jitter), which keeps it testable with a
//! paused tokio clock.

use crate::api::types::ReviewPage;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, warn};

/// A source of review pages
///
/// `cursor` is the opaque continuation token from the previous page;
/// `None` requests the first page.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    async fn fetch_page(&self, cursor: Option<&str>) -> anyhow::Result<ReviewPage>;
}

/// Fetch one page, retrying failed attempts with exponential backoff.
///
/// Waits `2^(attempt-1)` seconds after each failed attempt before retrying.
/// The final attempt's failure propagates immediately as
/// [`Error::FetchFailed`] carrying the last underlying cause. `page` is
/// only used for diagnostics.
pub async fn fetch_with_retry(
    source: &dyn ReviewSource,
    cursor: Option<&str>,
    max_attempts: u32,
    page: usize,
) -> Result<ReviewPage> {
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match source.fetch_page(cursor).await {
            Ok(result) => return Ok(result),
            Err(err) => {
                warn!(page, attempt, max_attempts, error = %err, "page fetch attempt failed");
                last_error = Some(err);

                if attempt < max_attempts {
                    // Shift is capped so an absurd retry budget cannot overflow.
                    let backoff = Duration::from_secs(1u64 << (attempt - 1).min(16));
                    debug!(page, backoff_secs = backoff.as_secs(), "backing off before retry");
                    tokio::time::sleep(backoff).await;
                }
            }
        }
    }

    Err(Error::FetchFailed {
        page,
        attempts: max_attempts,
        last_error: last_error
            .unwrap_or_else(|| anyhow::anyhow!("retry budget allowed no attempts")),
    })
}
