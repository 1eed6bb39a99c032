//! revpull — incremental Google Maps reviews harvester
//!
//! Pages through SerpApi's `google_maps_reviews` engine for a single
//! location and persists normalized rows to a CSV file, merging and
//! deduplicating on every batch so an interrupted run can simply be
//! re-run. A lock marker next to the output keeps concurrent runs off the
//! same file.
//!
//! # Overview
//!
//! - **Fetch**: `revpull fetch --data-id <ID>` pages through the reviews
//!   of one location, with bounded exponential-backoff retry per page.
//! - **Dedup**: `revpull dedup --file <CSV>` re-runs the full-table
//!   deduplication pass on an existing output.

pub mod api;
pub mod config;
pub mod driver;
pub mod error;
pub mod fetch;
pub mod lockfile;
pub mod logging;
pub mod normalize;
pub mod progress;
pub mod store;

// Re-export commonly used types
pub use config::RunConfig;
pub use driver::RunOutcome;
pub use error::{Error, Result};

use clap::{Parser, Subcommand};

/// revpull - incremental reviews harvester
#[derive(Parser, Debug)]
#[command(name = "revpull")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch reviews for a location into a CSV file
    Fetch {
        /// Google Maps data_id of the location (from the !1s...:0x...
        /// segment of a Maps URL)
        #[arg(long, default_value = config::DEFAULT_DATA_ID)]
        data_id: String,

        /// Review language (hl parameter)
        #[arg(long, default_value = config::DEFAULT_LOCALE)]
        hl: String,

        /// Maximum number of pages to fetch
        #[arg(long, default_value_t = config::DEFAULT_MAX_PAGES)]
        max_pages: usize,

        /// Output CSV path
        #[arg(short, long, default_value = config::DEFAULT_OUTPUT)]
        output: String,

        /// Pause between page requests, in seconds
        #[arg(long, default_value_t = config::DEFAULT_PAUSE_SECS)]
        pause: f64,

        /// Retry budget per page fetch
        #[arg(long, default_value_t = config::DEFAULT_MAX_ATTEMPTS)]
        retries: u32,

        /// SerpApi key (read from SERPAPI_KEY, .env supported)
        #[arg(long, env = "SERPAPI_KEY", hide_env_values = true, default_value = "")]
        api_key: String,

        /// SerpApi endpoint override, mainly for testing
        #[arg(long, env = "SERPAPI_BASE_URL", default_value = api::client::DEFAULT_BASE_URL, hide = true)]
        base_url: String,
    },

    /// Deduplicate an existing output CSV by review_id
    Dedup {
        /// CSV file to deduplicate in place
        #[arg(short, long)]
        file: String,
    },
}
