//! Registry of live dashboard connections.

use std::collections::HashSet;

use dashmap::DashMap;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::domain::click_event::ClickNotification;
use crate::realtime::message::ClickUpdate;

/// Queue depth of each connection's outbound buffer.
///
/// A slow socket only ever loses its own intermediate updates; the final
/// total still arrives because later updates keep being queued as slots
/// free up.
pub const CONNECTION_QUEUE_CAPACITY: usize = 32;

struct ConnectionHandle {
    owner_id: i64,
    sender: mpsc::Sender<ClickUpdate>,
}

/// Owner-indexed registry of connected dashboards.
///
/// One user may hold several connections (multiple tabs); each gets every
/// update for that user's links. Delivery uses `try_send` so a stalled
/// connection can never block the fan-out worker or its siblings.
///
/// Concurrent redirects for the same link can enqueue their notifications
/// out of order: nothing synchronizes the gap between a ledger increment and
/// the enqueue that follows it. A per-link high-water mark closes that gap
/// on the delivery side, so a dashboard never sees a count lower than one it
/// already received.
pub struct RealtimePublisher {
    connections: DashMap<Uuid, ConnectionHandle>,
    owner_index: DashMap<i64, HashSet<Uuid>>,
    high_water: DashMap<String, u64>,
}

impl RealtimePublisher {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
            owner_index: DashMap::new(),
            high_water: DashMap::new(),
        }
    }

    /// Registers a connection for an owner and returns its id.
    pub fn register(&self, owner_id: i64, sender: mpsc::Sender<ClickUpdate>) -> Uuid {
        let connection_id = Uuid::new_v4();

        self.connections
            .insert(connection_id, ConnectionHandle { owner_id, sender });
        self.owner_index
            .entry(owner_id)
            .or_default()
            .insert(connection_id);

        metrics::gauge!("ws_connections").increment(1.0);
        tracing::debug!(owner_id, %connection_id, "dashboard connected");

        connection_id
    }

    /// Removes a connection from the registry.
    ///
    /// Safe to call twice; the second call is a no-op.
    pub fn unregister(&self, connection_id: Uuid) {
        let Some((_, handle)) = self.connections.remove(&connection_id) else {
            return;
        };

        if let Some(mut ids) = self.owner_index.get_mut(&handle.owner_id) {
            ids.remove(&connection_id);
        }
        self.owner_index
            .remove_if(&handle.owner_id, |_, ids| ids.is_empty());

        metrics::gauge!("ws_connections").decrement(1.0);
        tracing::debug!(owner_id = handle.owner_id, %connection_id, "dashboard disconnected");
    }

    /// Delivers a click notification to every connection of the link's owner.
    ///
    /// A notification whose count is at or below the link's high-water mark
    /// is stale (its redirect lost the race to the channel) and is dropped;
    /// the higher total it was superseded by has already been delivered.
    /// Connections whose receiver is gone are unregistered on the spot; a
    /// full queue drops this update for that connection only.
    pub fn publish(&self, notification: &ClickNotification) {
        {
            let mut watermark = self
                .high_water
                .entry(notification.short_id.clone())
                .or_insert(0);
            if notification.click_count <= *watermark {
                tracing::debug!(
                    short_id = %notification.short_id,
                    click_count = notification.click_count,
                    watermark = *watermark,
                    "stale click count, dropping"
                );
                return;
            }
            *watermark = notification.click_count;
        }

        let connection_ids: Vec<Uuid> = match self.owner_index.get(&notification.owner_id) {
            Some(ids) => ids.iter().copied().collect(),
            None => return,
        };

        let update = ClickUpdate {
            link_id: notification.short_id.clone(),
            click_count: notification.click_count,
        };

        for connection_id in connection_ids {
            let Some(handle) = self.connections.get(&connection_id) else {
                continue;
            };

            match handle.sender.try_send(update.clone()) {
                Ok(()) => {
                    metrics::counter!("click_updates_published").increment(1);
                }
                Err(mpsc::error::TrySendError::Full(_)) => {
                    tracing::warn!(%connection_id, "dashboard queue full, dropping update");
                }
                Err(mpsc::error::TrySendError::Closed(_)) => {
                    drop(handle);
                    self.unregister(connection_id);
                }
            }
        }
    }

    /// Number of currently registered connections.
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }
}

impl Default for RealtimePublisher {
    fn default() -> Self {
        Self::new()
    }
}
