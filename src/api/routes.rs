//! API route configuration.
//!
//! All routes here require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{analytics_handler, links_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Owner-scoped routes, protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `POST /shorten`               - Create a short link
/// - `GET  /links`                 - List the caller's links
/// - `GET  /analytics/{short_id}`  - Click total for one of the caller's links
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(links_handler))
        .route("/analytics/{short_id}", get(analytics_handler))
}
