//! In-memory link repository.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Concurrent in-memory implementation of [`LinkRepository`].
///
/// The short id index is the uniqueness constraint; entries are never
/// removed, so a short id can never be reissued.
pub struct MemoryLinkRepository {
    links: DashMap<i64, Link>,
    short_id_index: DashMap<String, i64>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
            short_id_index: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.short_id_index.entry(new_link.short_id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Short id already exists",
                json!({ "short_id": new_link.short_id }),
            )),
            Entry::Vacant(vacant) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let link = Link {
                    id,
                    short_id: new_link.short_id,
                    original_url: new_link.original_url,
                    owner_id: new_link.owner_id,
                    created_at: Utc::now(),
                };
                self.links.insert(id, link.clone());
                vacant.insert(id);
                Ok(link)
            }
        }
    }

    async fn find_by_short_id(&self, short_id: &str) -> Result<Option<Link>, AppError> {
        let id = match self.short_id_index.get(short_id) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.links.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(&id).map(|entry| entry.value().clone()))
    }

    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self
            .links
            .iter()
            .filter(|entry| entry.value().owner_id == owner_id)
            .map(|entry| entry.value().clone())
            .collect();

        // Ids are assigned in insertion order; timestamps alone may tie.
        links.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(links)
    }
}
