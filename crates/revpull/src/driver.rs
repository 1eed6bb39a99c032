//! Pagination driver
//!
//! Orchestrates fetch → normalize → store across pages, threading the
//! provider's opaque cursor from one page into the next request. Pages are
//! fetched and merged strictly sequentially: no page is requested before
//! the previous page's batch is durably merged.
//!
//! Termination is normal (not an error) when a page comes back with no
//! reviews, when the pagination block carries no next cursor, or when the
//! configured page budget is reached. A fetch failure that survives the
//! retry budget aborts the run; the lock guard still releases on that path.

use crate::config::RunConfig;
use crate::error::Result;
use crate::fetch::{fetch_with_retry, ReviewSource};
use crate::lockfile::RunLock;
use crate::normalize::{normalize, ReviewRow};
use crate::progress;
use crate::store;
use tracing::{info, warn};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// At least one batch was stored; `rows` is the final deduplicated count
    Completed { rows: usize },

    /// The loop finished without ever storing a batch — a successful but
    /// empty result, distinct from failure
    NoData,
}

/// Run one harvest: acquire the lock, page through the source, merge each
/// batch, and finish with a full-table dedup pass.
pub async fn run(config: &RunConfig, source: &dyn ReviewSource) -> Result<RunOutcome> {
    config.validate()?;

    // Scoped acquisition: the guard's Drop releases the marker on every
    // exit path below, including the `?` ones.
    let lock = RunLock::acquire(&config.output)?;

    let pb = progress::page_bar(config.max_pages as u64);
    let mut cursor: Option<String> = None;
    let mut got_any = false;

    for page in 1..=config.max_pages {
        let result = fetch_with_retry(source, cursor.as_deref(), config.max_attempts, page).await?;
        pb.set_position(page as u64);

        if page == 1 {
            if let Some(place_info) = &result.place_info {
                // Observational only; does not affect control flow.
                info!(place_info = %place_info, "place metadata");
            }
        }

        if result.reviews.is_empty() {
            info!(page, "no reviews returned, probably the end of results");
            break;
        }

        let batch: Vec<ReviewRow> = result.reviews.iter().map(normalize).collect();
        let total = store::merge_batch(&batch, &config.output)?;
        got_any = true;
        info!(page, batch = batch.len(), total, "merged page into output");

        match result.next_page_token() {
            Some(token) => cursor = Some(token.to_string()),
            None => {
                info!(page, "no next page token, no more pages");
                break;
            }
        }

        if !config.pause.is_zero() {
            tokio::time::sleep(config.pause).await;
        }
    }

    pb.finish_and_clear();

    let outcome = if got_any {
        // Defensive full-table pass; per-batch merging already maintains
        // the uniqueness invariant for this run's writes.
        let rows = store::dedup_file(&config.output)?;
        info!(rows, file = %config.output.display(), "run complete");
        RunOutcome::Completed { rows }
    } else {
        warn!("no reviews collected, check the data_id and your provider limits");
        RunOutcome::NoData
    };

    lock.release();
    Ok(outcome)
}
