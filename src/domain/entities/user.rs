//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered user.
///
/// Emails are stored lowercase so lookups are case-insensitive. Only the
/// bcrypt hash of the password is ever persisted.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user.
///
/// The email must already be normalized (trimmed, lowercased) and the
/// password already hashed by the auth service.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}
