//! Authentication service: registration, login, and token verification.

use std::sync::Arc;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::entities::NewUser;
use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Minimum accepted password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// JWT claims carried by issued bearer tokens.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id.
    sub: String,
    /// Issued at (Unix timestamp).
    iat: i64,
    /// Expiration time (Unix timestamp).
    exp: i64,
}

/// Service for user registration and bearer token authentication.
///
/// Passwords are hashed with bcrypt (salted, cost-configurable) before
/// storage; plaintext never reaches a repository or a log line. Tokens are
/// stateless HS256 JWTs whose subject is the user id, so verifying a token
/// needs no storage round-trip and a token can never grant access to another
/// user's links.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
    bcrypt_cost: u32,
    /// Hash verified when login hits an unknown email, so response timing
    /// does not reveal whether an account exists.
    dummy_hash: String,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository for account storage
    /// - `token_secret` - HS256 signing secret; tokens are invalidated when it changes
    /// - `token_ttl_seconds` - lifetime of issued tokens
    /// - `bcrypt_cost` - bcrypt work factor (4..=31)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the bcrypt cost is rejected by the
    /// hasher.
    pub fn new(
        repository: Arc<R>,
        token_secret: &str,
        token_ttl_seconds: i64,
        bcrypt_cost: u32,
    ) -> Result<Self, AppError> {
        let dummy_hash = bcrypt::hash("placeholder-password", bcrypt_cost)
            .map_err(|e| AppError::internal("Failed to initialize password hasher", json!({ "reason": e.to_string() })))?;

        Ok(Self {
            repository,
            encoding_key: EncodingKey::from_secret(token_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(token_secret.as_bytes()),
            token_ttl: Duration::seconds(token_ttl_seconds),
            bcrypt_cost,
            dummy_hash,
        })
    }

    /// Registers a new user.
    ///
    /// The email is trimmed and lowercased before storage, making duplicate
    /// detection case-insensitive.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed email or a password
    /// shorter than 8 characters.
    /// Returns [`AppError::Conflict`] if the email is already registered.
    pub async fn register(&self, email: &str, password: &str) -> Result<User, AppError> {
        let email = normalize_email(email)?;

        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(AppError::bad_request(
                "Password must be at least 8 characters",
                json!({ "min_length": MIN_PASSWORD_LENGTH }),
            ));
        }

        let password_hash = bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|e| AppError::internal("Failed to hash password", json!({ "reason": e.to_string() })))?;

        self.repository
            .create(NewUser {
                email,
                password_hash,
            })
            .await
    }

    /// Authenticates credentials and issues a bearer token.
    ///
    /// Unknown email and wrong password produce the same error body, and a
    /// dummy bcrypt verification runs in the unknown-email case so the two
    /// paths cost the same.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the credentials do not match.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let email = normalize_email(email)?;

        let user = self.repository.find_by_email(&email).await?;

        let verified = match &user {
            Some(user) => bcrypt::verify(password, &user.password_hash).unwrap_or(false),
            None => {
                let _ = bcrypt::verify(password, &self.dummy_hash);
                false
            }
        };

        if !verified {
            return Err(invalid_credentials());
        }

        // user is Some here; verified can only be true after a real hash check
        let user = user.ok_or_else(invalid_credentials)?;

        self.issue_token(user.id)
    }

    /// Issues a signed token for a user id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token(&self, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.token_ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal("Failed to sign token", json!({ "reason": e.to_string() })))
    }

    /// Verifies a bearer token and returns the authenticated user id.
    ///
    /// Used by the HTTP auth middleware and by the WebSocket upgrade handler.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, forged, or expired
    /// tokens.
    pub fn verify_token(&self, token: &str) -> Result<i64, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Token expired" }),
                ),
                _ => AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid token" })),
            },
        )?;

        data.claims
            .sub
            .parse::<i64>()
            .map_err(|_| AppError::unauthorized("Unauthorized", json!({ "reason": "Invalid token" })))
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid credentials", json!({}))
}

/// Trims and lowercases an email, rejecting obviously malformed input.
fn normalize_email(email: &str) -> Result<String, AppError> {
    let email = email.trim().to_lowercase();

    if !validator::ValidateEmail::validate_email(&email) {
        return Err(AppError::bad_request(
            "Invalid email address",
            json!({ "email": email }),
        ));
    }

    Ok(email)
}
