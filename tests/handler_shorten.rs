mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_shorten_returns_created_link() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let response = server
        .post("/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "url": "https://example.com/some/long/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let short_id = body["short_id"].as_str().unwrap();
    assert_eq!(short_id.len(), 8);
    assert_eq!(body["original_url"], "https://example.com/some/long/path");
    assert_eq!(
        body["short_url"],
        format!("{}/r/{}", common::TEST_BASE_URL, short_id)
    );
}

#[tokio::test]
async fn test_shorten_preserves_url_verbatim() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    // No trailing slash is added and the query string survives untouched.
    let body = common::shorten(&server, &token, "https://example.com?q=1&r=2").await;

    assert_eq!(body["original_url"], "https://example.com?q=1&r=2");
}

#[tokio::test]
async fn test_shorten_same_url_twice_mints_distinct_ids() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let first = common::shorten(&server, &token, "https://example.com").await;
    let second = common::shorten(&server, &token, "https://example.com").await;

    assert_ne!(first["short_id"], second["short_id"]);
}

#[tokio::test]
async fn test_shorten_invalid_url_bad_request() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let response = server
        .post("/shorten")
        .authorization_bearer(&token)
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_shorten_non_http_scheme_bad_request() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    for url in ["javascript:alert(1)", "ftp://example.com/file", "file:///etc/passwd"] {
        let response = server
            .post("/shorten")
            .authorization_bearer(&token)
            .json(&json!({ "url": url }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_shorten_without_token_unauthorized() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
