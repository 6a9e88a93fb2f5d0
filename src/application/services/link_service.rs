//! Link service: short id minting and link retrieval.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_short_id;
use crate::utils::url_validator::validate_url;

/// How many random short ids to try before giving up on a create.
const MAX_GENERATION_ATTEMPTS: u32 = 10;

/// Service for minting and resolving short links.
///
/// The target URL is validated but stored verbatim: whatever string the owner
/// submitted is exactly what the redirect replays later. Short ids come from
/// a random generator; collisions are resolved by retrying with a fresh id,
/// relying on the repository's uniqueness constraint as the arbiter.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: LinkRepository> LinkService<R> {
    pub fn new(repository: Arc<R>, base_url: String) -> Self {
        Self {
            repository,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Creates a short link for a URL on behalf of its owner.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is malformed or uses a
    /// scheme other than http/https.
    /// Returns [`AppError::Internal`] if every generation attempt collided.
    pub async fn shorten(&self, owner_id: i64, url: &str) -> Result<Link, AppError> {
        validate_url(url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "url": url })))?;

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let short_id = generate_short_id();

            match self
                .repository
                .create(NewLink {
                    short_id: short_id.clone(),
                    original_url: url.to_string(),
                    owner_id,
                })
                .await
            {
                Ok(link) => {
                    tracing::info!(
                        short_id = %link.short_id,
                        owner_id,
                        attempt,
                        "short link created"
                    );
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(%short_id, attempt, "short id collision, retrying");
                    continue;
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Exhausted short id generation attempts",
            json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
        ))
    }

    /// Resolves a short id to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link carries the short id.
    pub async fn get_by_short_id(&self, short_id: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_id": short_id }))
            })
    }

    /// Lists an owner's links, most recent first.
    pub async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Renders the public redirect URL for a link.
    pub fn short_url(&self, link: &Link) -> String {
        format!("{}/r/{}", self.base_url, link.short_id)
    }
}
