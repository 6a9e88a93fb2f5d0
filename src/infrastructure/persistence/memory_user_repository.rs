//! In-memory user repository.

use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde_json::json;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Concurrent in-memory implementation of [`UserRepository`].
///
/// The email index doubles as the uniqueness constraint: insertion goes
/// through its entry API, so two concurrent registrations for the same email
/// cannot both succeed.
pub struct MemoryUserRepository {
    users: DashMap<i64, User>,
    email_index: DashMap<String, i64>,
    next_id: AtomicI64,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            email_index: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: NewUser) -> Result<User, AppError> {
        match self.email_index.entry(new_user.email.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Email already registered",
                json!({ "email": new_user.email }),
            )),
            Entry::Vacant(vacant) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let user = User {
                    id,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    created_at: Utc::now(),
                };
                self.users.insert(id, user.clone());
                vacant.insert(id);
                Ok(user)
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let id = match self.email_index.get(email) {
            Some(entry) => *entry.value(),
            None => return Ok(None),
        };
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "$2b$04$hashhashhashhashhashha".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let repo = MemoryUserRepository::new();

        let user = repo.create(new_user("alice@example.com")).await.unwrap();
        assert_eq!(user.email, "alice@example.com");

        let found = repo.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.unwrap().id, user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email_conflicts() {
        let repo = MemoryUserRepository::new();

        repo.create(new_user("alice@example.com")).await.unwrap();
        let result = repo.create(new_user("alice@example.com")).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_distinct_emails_get_distinct_ids() {
        let repo = MemoryUserRepository::new();

        let a = repo.create(new_user("a@example.com")).await.unwrap();
        let b = repo.create(new_user("b@example.com")).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_find_unknown_returns_none() {
        let repo = MemoryUserRepository::new();

        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
        assert!(repo.find_by_id(999).await.unwrap().is_none());
    }
}
