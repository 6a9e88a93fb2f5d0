//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /register`               - Create an account (public)
//! - `POST /login`                  - Obtain a bearer token (public)
//! - `GET  /r/{short_id}`           - Short link redirect (public)
//! - `GET  /ws`                     - Live analytics WebSocket (token in query)
//! - `GET  /health`                 - Health check (public)
//! - `POST /shorten`                - Create a short link (Bearer token)
//! - `GET  /links`                  - List own links (Bearer token)
//! - `GET  /analytics/{short_id}`   - Click total (Bearer token)
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **CORS** - dashboard origin allowance
//! - **Authentication** - Bearer token on the protected subset

use crate::api;
use crate::api::handlers::{health_handler, login_handler, redirect_handler, register_handler};
use crate::api::middleware::{auth, cors, tracing};
use crate::realtime::ws::ws_handler;
use crate::state::AppState;
use axum::routing::{get, post};
use axum::{middleware, Router};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `frontend_origin` - origin allowed by CORS; `None` allows any origin
///   (local development)
pub fn app_router(state: AppState, frontend_origin: Option<&str>) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .route("/r/{short_id}", get(redirect_handler))
        .route("/ws", get(ws_handler))
        .route("/health", get(health_handler))
        .merge(protected)
        .with_state(state)
        .layer(cors::layer(frontend_origin))
        .layer(tracing::layer())
}
