//! Handler for link shortening endpoint.

use axum::{extract::State, http::StatusCode, Extension, Json};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /shorten` (Bearer token required)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "id": 1,
///   "short_id": "aZ3kQ9xY",
///   "original_url": "https://example.com/some/long/path",
///   "short_url": "http://localhost:8080/r/aZ3kQ9xY",
///   "created_at": "..."
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: URL is malformed or not http/https
/// - **401 Unauthorized**: missing or invalid token
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(AuthUser(owner_id)): Extension<AuthUser>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state.link_service.shorten(owner_id, &payload.url).await?;
    let short_url = state.link_service.short_url(&link);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            id: link.id,
            short_id: link.short_id,
            original_url: link.original_url,
            short_url,
            created_at: link.created_at,
        }),
    ))
}
