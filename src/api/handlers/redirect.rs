//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::domain::click_event::ClickNotification;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short id to its original URL.
///
/// # Endpoint
///
/// `GET /r/{short_id}` (public, no authentication)
///
/// # Request Flow
///
/// 1. Resolve the short id (404 if unknown)
/// 2. Record the click in the ledger
/// 3. Queue a notification for the owner's dashboards (fire-and-forget)
/// 4. Return `302 Found` with the stored URL, byte for byte
///
/// # Click Tracking
///
/// The click commits before the redirect is sent, so analytics already
/// reflect it by the time the browser follows the Location header. The
/// dashboard notification goes to a bounded channel; if the queue is full
/// the update is dropped and dashboards catch up on the next click.
///
/// # Errors
///
/// Returns 404 Not Found if the short id doesn't exist. A ledger failure is
/// logged but does not block the redirect.
pub async fn redirect_handler(
    Path(short_id): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.get_by_short_id(&short_id).await?;

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let referer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    match state
        .click_service
        .record_for_link(&link, user_agent, referer)
        .await
    {
        Ok(click_count) => {
            let _ = state.notify_tx.try_send(ClickNotification {
                owner_id: link.owner_id,
                short_id: link.short_id.clone(),
                click_count,
            });
        }
        Err(e) => {
            tracing::error!(short_id = %link.short_id, error = %e, "failed to record click");
        }
    }

    // 302 per the public contract; axum's Redirect only offers 303/307/308.
    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, link.original_url)],
    ))
}
