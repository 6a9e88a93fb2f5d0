//! DTOs for the analytics endpoint.

use serde::Serialize;

/// Aggregate click count for one link.
#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub short_id: String,
    pub total_clicks: u64,
}
