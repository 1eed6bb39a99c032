//! Record normalization
//!
//! Maps a raw provider record to the canonical row schema. Never fails:
//! missing fields become `None` or an empty string.

use crate::api::types::RawReview;
use serde::{Deserialize, Serialize};

/// The normalized, schema-fixed representation of one review
///
/// `review_id` is the identity key used for deduplication at persistence
/// time; the provider does not guarantee it is present or unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    pub review_id: Option<String>,
    pub rating: Option<f64>,
    pub text: String,
    pub iso_date: Option<String>,
    pub language: Option<String>,
}

/// Normalize a raw review into a canonical row.
///
/// Text selection order is fixed: first non-empty of {snippet, text},
/// else the empty string.
pub fn normalize(raw: &RawReview) -> ReviewRow {
    let text = raw
        .snippet
        .as_deref()
        .filter(|s| !s.is_empty())
        .or_else(|| raw.text.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or_default()
        .to_string();

    ReviewRow {
        review_id: raw.review_id.clone(),
        rating: raw.rating,
        text,
        iso_date: raw.iso_date.clone(),
        language: raw.language.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_preferred_over_text() {
        let raw = RawReview {
            snippet: Some("short".to_string()),
            text: Some("long".to_string()),
            ..Default::default()
        };
        assert_eq!(normalize(&raw).text, "short");
    }

    #[test]
    fn test_empty_snippet_falls_back_to_text() {
        let raw = RawReview {
            snippet: Some(String::new()),
            text: Some("long".to_string()),
            ..Default::default()
        };
        assert_eq!(normalize(&raw).text, "long");
    }

    #[test]
    fn test_missing_both_yields_empty_string() {
        let raw = RawReview::default();
        let row = normalize(&raw);
        assert_eq!(row.text, "");
        assert_eq!(row.review_id, None);
        assert_eq!(row.rating, None);
    }

    #[test]
    fn test_fields_pass_through() {
        let raw = RawReview {
            review_id: Some("r42".to_string()),
            rating: Some(4.5),
            snippet: Some("Lovely".to_string()),
            text: None,
            iso_date: Some("2024-05-01T00:00:00Z".to_string()),
            language: Some("en".to_string()),
        };
        let row = normalize(&raw);
        assert_eq!(row.review_id.as_deref(), Some("r42"));
        assert_eq!(row.rating, Some(4.5));
        assert_eq!(row.iso_date.as_deref(), Some("2024-05-01T00:00:00Z"));
        assert_eq!(row.language.as_deref(), Some("en"));
    }
}
