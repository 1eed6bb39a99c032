//! SerpApi integration
//!
//! Wire types and the HTTP client for the `google_maps_reviews` engine.

pub mod client;
pub mod types;

pub use client::SerpApiClient;
pub use types::{Pagination, RawReview, ReviewPage};
