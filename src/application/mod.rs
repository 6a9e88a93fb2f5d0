//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Registration, login, and token verification
//! - [`services::link_service::LinkService`] - Short link minting and retrieval
//! - [`services::click_service::ClickService`] - Click recording and totals

pub mod services;
