use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AuthService, ClickService, LinkService};
use crate::domain::click_event::ClickNotification;
use crate::infrastructure::persistence::{
    MemoryClickRepository, MemoryLinkRepository, MemoryUserRepository,
};
use crate::realtime::RealtimePublisher;

/// Shared application state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<MemoryUserRepository>>,
    pub link_service: Arc<LinkService<MemoryLinkRepository>>,
    pub click_service: Arc<ClickService<MemoryLinkRepository, MemoryClickRepository>>,
    pub publisher: Arc<RealtimePublisher>,
    pub notify_tx: mpsc::Sender<ClickNotification>,
}
