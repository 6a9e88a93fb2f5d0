//! Handler for per-link analytics.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde_json::json;

use crate::api::dto::analytics::AnalyticsResponse;
use crate::api::middleware::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the aggregate click count for one of the caller's links.
///
/// # Endpoint
///
/// `GET /analytics/{short_id}` (Bearer token required)
///
/// # Response
///
/// ```json
/// { "short_id": "aZ3kQ9xY", "total_clicks": 42 }
/// ```
///
/// A link that exists but was never clicked reports zero.
///
/// # Errors
///
/// - **404 Not Found**: no link carries the short id
/// - **403 Forbidden**: the link exists but belongs to another user
pub async fn analytics_handler(
    State(state): State<AppState>,
    Extension(AuthUser(owner_id)): Extension<AuthUser>,
    Path(short_id): Path<String>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let link = state.link_service.get_by_short_id(&short_id).await?;

    if link.owner_id != owner_id {
        return Err(AppError::forbidden(
            "Link belongs to another user",
            json!({ "short_id": short_id }),
        ));
    }

    let total_clicks = state.click_service.get_total(link.id).await?;

    Ok(Json(AnalyticsResponse {
        short_id: link.short_id,
        total_clicks,
    }))
}
