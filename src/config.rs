//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Required Variables
//!
//! - `TOKEN_SECRET` - HS256 signing secret for bearer tokens
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base URL used in `short_url` fields
//!   (default: `http://localhost:3000`)
//! - `TOKEN_TTL_SECONDS` - Bearer token lifetime (default: 86400, i.e. 24h)
//! - `BCRYPT_COST` - Password hashing work factor (default: 12)
//! - `FRONTEND_ORIGIN` - Origin allowed by CORS (default: any origin)
//! - `NOTIFY_QUEUE_CAPACITY` - Click notification buffer size (default: 1024)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Public base URL prefixed to short ids in API responses.
    pub base_url: String,
    /// HS256 signing secret for bearer tokens. Must be non-empty; rotating it
    /// invalidates every outstanding token.
    pub token_secret: String,
    /// Bearer token lifetime in seconds.
    pub token_ttl_seconds: i64,
    /// bcrypt work factor for password hashing.
    pub bcrypt_cost: u32,
    /// Origin allowed by CORS. `None` allows any origin (local development).
    pub frontend_origin: Option<String>,
    /// Click notification buffer size between the redirect path and the
    /// fan-out worker.
    pub notify_queue_capacity: usize,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `TOKEN_SECRET` is missing.
    pub fn from_env() -> Result<Self> {
        let token_secret = env::var("TOKEN_SECRET").context("TOKEN_SECRET must be set")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let token_ttl_seconds = env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        let bcrypt_cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(12);

        let frontend_origin = env::var("FRONTEND_ORIGIN").ok().filter(|v| !v.is_empty());

        let notify_queue_capacity = env::var("NOTIFY_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1024);

        Ok(Self {
            listen_addr,
            base_url,
            token_secret,
            token_ttl_seconds,
            bcrypt_cost,
            frontend_origin,
            notify_queue_capacity,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `token_secret` is empty
    /// - `token_ttl_seconds` is not positive
    /// - `bcrypt_cost` is outside the hasher's accepted range
    /// - `notify_queue_capacity` is out of range
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` or `base_url` is malformed
    pub fn validate(&self) -> Result<()> {
        if self.token_secret.is_empty() {
            anyhow::bail!("TOKEN_SECRET must not be empty");
        }

        if self.token_ttl_seconds <= 0 {
            anyhow::bail!(
                "TOKEN_TTL_SECONDS must be positive, got {}",
                self.token_ttl_seconds
            );
        }

        if !(4..=31).contains(&self.bcrypt_cost) {
            anyhow::bail!("BCRYPT_COST must be between 4 and 31, got {}", self.bcrypt_cost);
        }

        if self.notify_queue_capacity < 16 {
            anyhow::bail!(
                "NOTIFY_QUEUE_CAPACITY must be at least 16, got {}",
                self.notify_queue_capacity
            );
        }

        if self.notify_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "NOTIFY_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.notify_queue_capacity
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Token TTL: {}s", self.token_ttl_seconds);
        tracing::info!("  bcrypt cost: {}", self.bcrypt_cost);

        match &self.frontend_origin {
            Some(origin) => tracing::info!("  CORS origin: {}", origin),
            None => tracing::info!("  CORS origin: any"),
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Notify queue capacity: {}", self.notify_queue_capacity);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
