//! Integration tests for the SerpApi client
//!
//! Validates request shape (engine, data_id, hl, api_key, cursor handling)
//! and response decoding against a mock server.

use revpull::api::SerpApiClient;
use revpull::fetch::ReviewSource;
use revpull::RunConfig;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> SerpApiClient {
    let mut config = RunConfig::new("0xabc:0xdef", "test-key");
    config.hl = "nl".to_string();
    SerpApiClient::new(&config)
        .expect("client should build")
        .with_base_url(base_url)
}

fn page_body(ids: &[&str], next_token: Option<&str>) -> serde_json::Value {
    serde_json::json!({
        "reviews": ids
            .iter()
            .map(|id| serde_json::json!({
                "review_id": id,
                "rating": 4.0,
                "snippet": format!("review {id}"),
                "iso_date": "2024-05-01T00:00:00Z",
                "language": "nl"
            }))
            .collect::<Vec<_>>(),
        "serpapi_pagination": { "next_page_token": next_token }
    })
}

#[tokio::test]
async fn first_page_request_carries_engine_and_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("engine", "google_maps_reviews"))
        .and(query_param("data_id", "0xabc:0xdef"))
        .and(query_param("hl", "nl"))
        .and(query_param("api_key", "test-key"))
        .and(query_param_is_missing("next_page_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["r1", "r2"], Some("tokA"))))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client.fetch_page(None).await.expect("fetch should succeed");

    assert_eq!(page.reviews.len(), 2);
    assert_eq!(page.reviews[0].review_id.as_deref(), Some("r1"));
    assert_eq!(page.next_page_token(), Some("tokA"));
}

#[tokio::test]
async fn cursor_is_sent_as_next_page_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("next_page_token", "tokA"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&["r3"], None)))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client
        .fetch_page(Some("tokA"))
        .await
        .expect("fetch should succeed");

    assert_eq!(page.reviews.len(), 1);
    assert_eq!(page.next_page_token(), None);
}

#[tokio::test]
async fn place_info_is_exposed() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "place_info": { "title": "Nelson Mandela Park", "rating": 4.5 },
        "reviews": [],
    });

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client.fetch_page(None).await.expect("fetch should succeed");

    assert!(page.reviews.is_empty());
    let place_info = page.place_info.expect("place_info should be present");
    assert_eq!(place_info["title"], "Nelson Mandela Park");
}

#[tokio::test]
async fn server_error_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_page(None).await;

    assert!(result.is_err());
}
