#![allow(dead_code)]

use axum::http::StatusCode;
use axum::Router;
use axum_test::TestServer;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc;

use linkpulse::application::services::{AuthService, ClickService, LinkService};
use linkpulse::domain::click_event::ClickNotification;
use linkpulse::infrastructure::persistence::{
    MemoryClickRepository, MemoryLinkRepository, MemoryUserRepository,
};
use linkpulse::realtime::RealtimePublisher;
use linkpulse::routes::app_router;
use linkpulse::state::AppState;

pub const TEST_SECRET: &str = "test-token-secret";
pub const TEST_BASE_URL: &str = "http://localhost:3000";

// Minimum bcrypt cost keeps the test suite fast.
const TEST_BCRYPT_COST: u32 = 4;

/// Builds an application state backed by fresh in-memory repositories.
///
/// The returned receiver is the fan-out worker's end of the notification
/// channel; tests exercising the realtime path spawn the worker on it,
/// others just keep it alive.
pub fn create_test_state() -> (AppState, mpsc::Receiver<ClickNotification>) {
    let user_repository = Arc::new(MemoryUserRepository::new());
    let link_repository = Arc::new(MemoryLinkRepository::new());
    let click_repository = Arc::new(MemoryClickRepository::new());

    let auth_service = Arc::new(
        AuthService::new(user_repository, TEST_SECRET, 3600, TEST_BCRYPT_COST).unwrap(),
    );
    let link_service = Arc::new(LinkService::new(
        link_repository.clone(),
        TEST_BASE_URL.to_string(),
    ));
    let click_service = Arc::new(ClickService::new(link_repository, click_repository));

    let publisher = Arc::new(RealtimePublisher::new());
    let (notify_tx, notify_rx) = mpsc::channel(100);

    let state = AppState {
        auth_service,
        link_service,
        click_service,
        publisher,
        notify_tx,
    };

    (state, notify_rx)
}

pub fn create_app(state: AppState) -> Router {
    app_router(state, None)
}

pub fn create_server(state: AppState) -> TestServer {
    TestServer::new(create_app(state)).unwrap()
}

/// Registers an account and returns a bearer token for it.
pub async fn register_and_login(server: &TestServer, email: &str, password: &str) -> String {
    server
        .post("/register")
        .json(&json!({ "email": email, "password": password }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    response.assert_status_ok();

    response.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Creates a short link and returns the response body.
pub async fn shorten(server: &TestServer, token: &str, url: &str) -> serde_json::Value {
    let response = server
        .post("/shorten")
        .authorization_bearer(token)
        .json(&json!({ "url": url }))
        .await;
    response.assert_status(StatusCode::CREATED);

    response.json::<serde_json::Value>()
}
