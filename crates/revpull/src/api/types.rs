//! Wire types for the reviews search API
//!
//! The response is treated as a black box exposing three optional pieces:
//! a list of raw review records, a pagination block with the next cursor,
//! and a one-time `place_info` block on the first page.

use serde::Deserialize;

/// One page of results from the reviews search API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReviewPage {
    /// Raw review records; absent or empty means end of results
    #[serde(default)]
    pub reviews: Vec<RawReview>,

    /// Pagination block carrying the opaque continuation token
    #[serde(default)]
    pub serpapi_pagination: Option<Pagination>,

    /// Place metadata, only meaningful on the first page
    #[serde(default)]
    pub place_info: Option<serde_json::Value>,
}

impl ReviewPage {
    /// Cursor for the next page, if any.
    ///
    /// An empty token counts as absent.
    pub fn next_page_token(&self) -> Option<&str> {
        self.serpapi_pagination
            .as_ref()
            .and_then(|p| p.next_page_token.as_deref())
            .filter(|token| !token.is_empty())
    }
}

/// Pagination block of a search response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// A review record as returned by the provider
///
/// The provider guarantees none of these fields, so all are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReview {
    #[serde(default)]
    pub review_id: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    /// Possibly truncated review text
    #[serde(default)]
    pub snippet: Option<String>,

    /// Full review text, not always present
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub iso_date: Option<String>,

    #[serde(default)]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_page_token_absent() {
        let page = ReviewPage::default();
        assert_eq!(page.next_page_token(), None);

        let page = ReviewPage {
            serpapi_pagination: Some(Pagination {
                next_page_token: None,
            }),
            ..Default::default()
        };
        assert_eq!(page.next_page_token(), None);
    }

    #[test]
    fn test_next_page_token_empty_counts_as_absent() {
        let page = ReviewPage {
            serpapi_pagination: Some(Pagination {
                next_page_token: Some(String::new()),
            }),
            ..Default::default()
        };
        assert_eq!(page.next_page_token(), None);
    }

    #[test]
    fn test_decode_minimal_response() {
        let page: ReviewPage = serde_json::from_str(r#"{"search_metadata": {"id": "abc"}}"#)
            .expect("minimal response should decode");
        assert!(page.reviews.is_empty());
        assert!(page.place_info.is_none());
        assert_eq!(page.next_page_token(), None);
    }

    #[test]
    fn test_decode_full_response() {
        let body = r#"{
            "place_info": {"title": "Nelson Mandela Park"},
            "reviews": [
                {"review_id": "r1", "rating": 4.0, "snippet": "Nice", "iso_date": "2024-05-01T00:00:00Z", "language": "en"},
                {"rating": 5.0, "text": "Great park"}
            ],
            "serpapi_pagination": {"next_page_token": "tok123"}
        }"#;
        let page: ReviewPage = serde_json::from_str(body).expect("full response should decode");
        assert_eq!(page.reviews.len(), 2);
        assert_eq!(page.reviews[0].review_id.as_deref(), Some("r1"));
        assert_eq!(page.reviews[1].review_id, None);
        assert_eq!(page.next_page_token(), Some("tok123"));
        assert!(page.place_info.is_some());
    }
}
