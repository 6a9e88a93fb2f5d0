//! Handler for the link listing endpoint.

use axum::{extract::State, Extension, Json};

use crate::api::dto::links::LinkItem;
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the authenticated user's links, most recent first.
///
/// # Endpoint
///
/// `GET /links` (Bearer token required)
///
/// # Response
///
/// ```json
/// [
///   {
///     "id": 2,
///     "short_id": "aZ3kQ9xY",
///     "original_url": "https://example.com",
///     "short_url": "http://localhost:8080/r/aZ3kQ9xY",
///     "created_at": "..."
///   }
/// ]
/// ```
///
/// Only links owned by the caller appear; an account with no links gets an
/// empty array.
pub async fn links_handler(
    State(state): State<AppState>,
    Extension(AuthUser(owner_id)): Extension<AuthUser>,
) -> Result<Json<Vec<LinkItem>>, AppError> {
    let links = state.link_service.list_by_owner(owner_id).await?;

    let links = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link);
            LinkItem::from_link(link, short_url)
        })
        .collect();

    Ok(Json(links))
}
