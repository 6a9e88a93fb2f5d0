//! Background worker draining click notifications into the publisher.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::click_event::ClickNotification;
use crate::realtime::publisher::RealtimePublisher;

/// Drains the notification channel and fans each update out to dashboards.
///
/// Runs as a single task for the lifetime of the server: one consumer means
/// updates reach the publisher in the order they were queued. Redirects that
/// raced on the way into the channel are handled by the publisher's per-link
/// high-water mark, so per-link totals reaching a dashboard never decrease.
/// Exits when every sender is dropped, which happens during shutdown.
pub async fn run_notify_worker(
    mut rx: mpsc::Receiver<ClickNotification>,
    publisher: Arc<RealtimePublisher>,
) {
    tracing::info!("notify worker started");

    while let Some(notification) = rx.recv().await {
        publisher.publish(&notification);
    }

    tracing::info!("notify worker stopped");
}
