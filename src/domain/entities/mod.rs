//! Core domain entities representing the business data model.
//!
//! This module contains the fundamental data structures that represent the core
//! concepts of the link shortening service. Entities are plain data structures
//! without business logic.

pub mod click;
pub mod link;
pub mod user;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
pub use user::{NewUser, User};
