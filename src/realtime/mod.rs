//! Realtime analytics delivery over WebSocket.
//!
//! Click totals travel from the redirect path to connected dashboards through
//! three pieces:
//!
//! - [`publisher`] - registry of live connections, indexed by owner
//! - [`worker`] - background task draining the notification channel
//! - [`ws`] - the `/ws` upgrade handler and per-socket pump
//!
//! A single worker drains the channel in order and each connection has its
//! own FIFO queue, so the totals a dashboard sees for one link never go
//! backwards.

pub mod message;
pub mod publisher;
pub mod worker;
pub mod ws;

pub use message::ClickUpdate;
pub use publisher::RealtimePublisher;
pub use worker::run_notify_worker;
