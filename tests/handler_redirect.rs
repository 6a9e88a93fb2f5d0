mod common;

use axum::http::{header, StatusCode};
use futures::future::join_all;

#[tokio::test]
async fn test_redirect_found_with_exact_location() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let created = common::shorten(&server, &token, "https://example.com").await;
    let short_id = created["short_id"].as_str().unwrap();

    let response = server.get(&format!("/r/{short_id}")).await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header(header::LOCATION), "https://example.com");
}

#[tokio::test]
async fn test_redirect_requires_no_auth() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let created = common::shorten(&server, &token, "https://example.com/page").await;
    let short_id = created["short_id"].as_str().unwrap();

    // No Authorization header on the redirect request.
    let response = server.get(&format!("/r/{short_id}")).await;

    response.assert_status(StatusCode::FOUND);
}

#[tokio::test]
async fn test_redirect_unknown_short_id_not_found() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let created = common::shorten(&server, &token, "https://example.com").await;
    let short_id = created["short_id"].as_str().unwrap();

    let response = server.get("/r/missing1").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );

    // The miss records nothing against existing links.
    let analytics = server
        .get(&format!("/analytics/{short_id}"))
        .authorization_bearer(&token)
        .await;
    analytics.assert_status_ok();
    assert_eq!(analytics.json::<serde_json::Value>()["total_clicks"], 0);
}

#[tokio::test]
async fn test_redirect_queues_click_notification() {
    let (state, mut rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let created = common::shorten(&server, &token, "https://example.com").await;
    let short_id = created["short_id"].as_str().unwrap();

    server
        .get(&format!("/r/{short_id}"))
        .await
        .assert_status(StatusCode::FOUND);

    let notification = rx.recv().await.unwrap();
    assert_eq!(notification.short_id, short_id);
    assert_eq!(notification.click_count, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_redirects_count_every_click() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let created = common::shorten(&server, &token, "https://example.com").await;
    let short_id = created["short_id"].as_str().unwrap().to_string();

    const CLICKS: usize = 50;
    let path = format!("/r/{short_id}");
    let requests = (0..CLICKS).map(|_| async { server.get(&path).await });
    for response in join_all(requests).await {
        response.assert_status(StatusCode::FOUND);
    }

    let analytics = server
        .get(&format!("/analytics/{short_id}"))
        .authorization_bearer(&token)
        .await;
    analytics.assert_status_ok();
    assert_eq!(
        analytics.json::<serde_json::Value>()["total_clicks"],
        CLICKS as u64
    );
}
