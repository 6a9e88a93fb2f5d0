//! # LinkPulse
//!
//! A URL shortening service with live click analytics, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core business entities and repository traits
//! - **Application Layer** ([`application`]) - Business logic and service orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory persistence
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//! - **Realtime Layer** ([`realtime`]) - WebSocket fan-out of click totals
//!
//! ## Features
//!
//! - Account registration and stateless bearer token authentication
//! - Owner-scoped short links with collision-retrying id generation
//! - Linearizable click counting under concurrent redirects
//! - Live per-link click totals pushed to connected dashboards
//!
//! ## Quick Start
//!
//! ```bash
//! # Set the required environment variable
//! export TOKEN_SECRET="change-me"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod realtime;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, ClickService, LinkService};
    pub use crate::domain::entities::{Click, Link, NewLink, NewUser, User};
    pub use crate::error::AppError;
    pub use crate::realtime::{ClickUpdate, RealtimePublisher};
    pub use crate::state::AppState;
}
