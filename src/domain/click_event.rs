//! Click notification model for realtime fan-out.

/// An in-memory notification describing a freshly recorded click.
///
/// Produced by the redirect handler after the ledger write commits and sent
/// over a bounded channel to the fan-out worker, which pushes the new total
/// to the owner's connected dashboards. Decoupling the HTTP response from
/// the WebSocket fan-out keeps redirects fast.
///
/// # Usage Flow
///
/// 1. Created in the redirect handler after the click is durably recorded
/// 2. Sent to the channel (non-blocking; dropped if the queue is full)
/// 3. Consumed by [`crate::realtime::run_notify_worker`]
/// 4. Delivered as a [`crate::realtime::ClickUpdate`] to each dashboard
#[derive(Debug, Clone)]
pub struct ClickNotification {
    pub owner_id: i64,
    pub short_id: String,
    pub click_count: u64,
}
