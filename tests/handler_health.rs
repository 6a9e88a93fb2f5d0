mod common;

#[tokio::test]
async fn test_health_reports_healthy() {
    let (state, _rx) = common::create_test_state();
    let server = common::create_server(state);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["click_queue"]["status"], "ok");
    assert_eq!(body["checks"]["websocket"]["status"], "ok");
}

#[tokio::test]
async fn test_health_degraded_when_worker_gone() {
    let (state, rx) = common::create_test_state();
    // Dropping the receiver closes the notification channel, as if the
    // fan-out worker had died.
    drop(rx);

    let server = common::create_server(state);
    let response = server.get("/health").await;

    response.assert_status(axum::http::StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<serde_json::Value>()["checks"]["click_queue"]["status"],
        "error"
    );
}
