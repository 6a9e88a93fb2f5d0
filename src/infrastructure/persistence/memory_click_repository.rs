//! In-memory click ledger.

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// Per-link ledger: the event log plus a cached running total.
///
/// The total is bumped while the event lock is held, so the two can never be
/// observed out of sync. Reads of the total stay lock-free. The lock is a
/// plain std mutex held only for the in-memory append, never across an await
/// point.
#[derive(Default)]
struct LinkLedger {
    total: AtomicU64,
    events: Mutex<Vec<Click>>,
}

/// Concurrent in-memory implementation of [`ClickRepository`].
pub struct MemoryClickRepository {
    ledgers: DashMap<i64, Arc<LinkLedger>>,
    next_id: AtomicI64,
}

impl MemoryClickRepository {
    pub fn new() -> Self {
        Self {
            ledgers: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn ledger(&self, link_id: i64) -> Arc<LinkLedger> {
        self.ledgers.entry(link_id).or_default().clone()
    }
}

impl Default for MemoryClickRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClickRepository for MemoryClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<u64, AppError> {
        let ledger = self.ledger(new_click.link_id);

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let click = Click {
            id,
            link_id: new_click.link_id,
            clicked_at: Utc::now(),
            user_agent: new_click.user_agent,
            referer: new_click.referer,
        };

        let mut events = ledger
            .events
            .lock()
            .map_err(|_| AppError::internal("Click ledger lock poisoned", serde_json::json!({})))?;
        events.push(click);
        let total = ledger.total.fetch_add(1, Ordering::SeqCst) + 1;
        drop(events);

        Ok(total)
    }

    async fn total(&self, link_id: i64) -> Result<u64, AppError> {
        Ok(self
            .ledgers
            .get(&link_id)
            .map(|entry| entry.value().total.load(Ordering::SeqCst))
            .unwrap_or(0))
    }
}
