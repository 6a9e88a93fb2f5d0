//! Click service: click recording and per-link totals.

use std::sync::Arc;

use crate::domain::entities::{Link, NewClick};
use crate::domain::repositories::{ClickRepository, LinkRepository};
use crate::error::AppError;

/// Service for recording redirect clicks and reading per-link totals.
///
/// Recording goes through the click repository's ledger, so the returned
/// running total reflects this click exactly once even when many redirects
/// for the same link land at the same time.
pub struct ClickService<L: LinkRepository, C: ClickRepository> {
    links: Arc<L>,
    clicks: Arc<C>,
}

impl<L: LinkRepository, C: ClickRepository> ClickService<L, C> {
    pub fn new(links: Arc<L>, clicks: Arc<C>) -> Self {
        Self { links, clicks }
    }

    /// Records one click against a resolved link and returns the new total.
    pub async fn record_for_link(
        &self,
        link: &Link,
        user_agent: Option<String>,
        referer: Option<String>,
    ) -> Result<u64, AppError> {
        let total = self
            .clicks
            .record(NewClick {
                link_id: link.id,
                user_agent,
                referer,
            })
            .await?;

        metrics::counter!("clicks_recorded_total").increment(1);
        tracing::debug!(short_id = %link.short_id, total, "click recorded");

        Ok(total)
    }

    /// Resolves a short id and records a click against it.
    ///
    /// Returns the link together with the post-click total.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short id is unknown.
    pub async fn record_click(
        &self,
        short_id: &str,
        user_agent: Option<String>,
        referer: Option<String>,
    ) -> Result<(Link, u64), AppError> {
        let link = self
            .links
            .find_by_short_id(short_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    "Short link not found",
                    serde_json::json!({ "short_id": short_id }),
                )
            })?;

        let total = self
            .record_for_link(&link, user_agent, referer)
            .await?;

        Ok((link, total))
    }

    /// Returns the click total for a link id, zero if never clicked.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link carries the id.
    pub async fn get_total(&self, link_id: i64) -> Result<u64, AppError> {
        if self.links.find_by_id(link_id).await?.is_none() {
            return Err(AppError::not_found(
                "Short link not found",
                serde_json::json!({ "link_id": link_id }),
            ));
        }

        self.clicks.total(link_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockClickRepository, MockLinkRepository};
    use chrono::Utc;

    fn link(id: i64, short_id: &str) -> Link {
        Link {
            id,
            short_id: short_id.to_string(),
            original_url: "https://example.com".to_string(),
            owner_id: 1,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_record_click_resolves_and_records() {
        let mut links = MockLinkRepository::new();
        links
            .expect_find_by_short_id()
            .withf(|short_id| short_id == "abc123xy")
            .times(1)
            .returning(|_| Ok(Some(link(7, "abc123xy"))));

        let mut clicks = MockClickRepository::new();
        clicks
            .expect_record()
            .withf(|new_click: &NewClick| new_click.link_id == 7)
            .times(1)
            .returning(|_| Ok(3));

        let service = ClickService::new(Arc::new(links), Arc::new(clicks));
        let (resolved, total) = service.record_click("abc123xy", None, None).await.unwrap();

        assert_eq!(resolved.id, 7);
        assert_eq!(total, 3);
    }

    #[tokio::test]
    async fn test_record_click_unknown_short_id() {
        let mut links = MockLinkRepository::new();
        links
            .expect_find_by_short_id()
            .times(1)
            .returning(|_| Ok(None));

        let service = ClickService::new(Arc::new(links), Arc::new(MockClickRepository::new()));
        let result = service.record_click("missing1", None, None).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_record_for_link_passes_metadata() {
        let mut clicks = MockClickRepository::new();
        clicks
            .expect_record()
            .withf(|new_click: &NewClick| {
                new_click.user_agent.as_deref() == Some("test-agent")
                    && new_click.referer.as_deref() == Some("https://referrer.example")
            })
            .times(1)
            .returning(|_| Ok(1));

        let service = ClickService::new(Arc::new(MockLinkRepository::new()), Arc::new(clicks));
        let total = service
            .record_for_link(
                &link(1, "abc123xy"),
                Some("test-agent".to_string()),
                Some("https://referrer.example".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(total, 1);
    }

    #[tokio::test]
    async fn test_get_total_delegates() {
        let mut links = MockLinkRepository::new();
        links
            .expect_find_by_id()
            .withf(|link_id| *link_id == 9)
            .times(1)
            .returning(|_| Ok(Some(link(9, "abc123xy"))));

        let mut clicks = MockClickRepository::new();
        clicks
            .expect_total()
            .withf(|link_id| *link_id == 9)
            .times(1)
            .returning(|_| Ok(12));

        let service = ClickService::new(Arc::new(links), Arc::new(clicks));

        assert_eq!(service.get_total(9).await.unwrap(), 12);
    }

    #[tokio::test]
    async fn test_get_total_unknown_link_not_found() {
        let mut links = MockLinkRepository::new();
        links.expect_find_by_id().times(1).returning(|_| Ok(None));

        let service = ClickService::new(Arc::new(links), Arc::new(MockClickRepository::new()));
        let result = service.get_total(99).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }
}
