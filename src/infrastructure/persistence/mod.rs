//! In-memory repository implementations.
//!
//! Concrete implementations of the domain repository traits backed by
//! concurrent maps. They are the default persistence collaborator; a
//! database-backed implementation can replace them behind the same traits
//! without touching the service layer.
//!
//! # Repositories
//!
//! - [`MemoryUserRepository`] - Account storage
//! - [`MemoryLinkRepository`] - Short link storage
//! - [`MemoryClickRepository`] - Append-only click ledger

pub mod memory_click_repository;
pub mod memory_link_repository;
pub mod memory_user_repository;

pub use memory_click_repository::MemoryClickRepository;
pub use memory_link_repository::MemoryLinkRepository;
pub use memory_user_repository::MemoryUserRepository;
