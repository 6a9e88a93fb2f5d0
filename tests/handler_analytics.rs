mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_analytics_zero_for_fresh_link() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let created = common::shorten(&server, &token, "https://example.com").await;
    let short_id = created["short_id"].as_str().unwrap();

    let response = server
        .get(&format!("/analytics/{short_id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["short_id"], *short_id);
    assert_eq!(body["total_clicks"], 0);
}

#[tokio::test]
async fn test_analytics_reflects_recorded_clicks() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let created = common::shorten(&server, &token, "https://example.com").await;
    let short_id = created["short_id"].as_str().unwrap();

    for _ in 0..3 {
        server
            .get(&format!("/r/{short_id}"))
            .await
            .assert_status(StatusCode::FOUND);
    }

    let response = server
        .get(&format!("/analytics/{short_id}"))
        .authorization_bearer(&token)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["total_clicks"], 3);
}

#[tokio::test]
async fn test_analytics_unknown_short_id_not_found() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let token = common::register_and_login(&server, "alice@example.com", "pw123456").await;

    let response = server
        .get("/analytics/missing1")
        .authorization_bearer(&token)
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_analytics_foreign_link_forbidden() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);
    let alice = common::register_and_login(&server, "alice@example.com", "pw123456").await;
    let bob = common::register_and_login(&server, "bob@example.com", "pw123456").await;

    let created = common::shorten(&server, &alice, "https://example.com").await;
    let short_id = created["short_id"].as_str().unwrap();

    let response = server
        .get(&format!("/analytics/{short_id}"))
        .authorization_bearer(&bob)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "forbidden"
    );
}

#[tokio::test]
async fn test_analytics_without_token_unauthorized() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);

    let response = server.get("/analytics/abc123xy").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
