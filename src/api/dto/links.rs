//! DTOs for the link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Link;

/// One link in a listing. The list endpoint returns a bare array of these.
#[derive(Debug, Serialize)]
pub struct LinkItem {
    pub id: i64,
    pub short_id: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
}

impl LinkItem {
    pub fn from_link(link: Link, short_url: String) -> Self {
        Self {
            id: link.id,
            short_id: link.short_id,
            original_url: link.original_url,
            short_url,
            created_at: link.created_at,
        }
    }
}
