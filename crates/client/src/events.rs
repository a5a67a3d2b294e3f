//! In-process notifications from the HTTP layer and the stores.
//!
//! [`EventBus`] wraps a `tokio::sync::broadcast` channel; share it via
//! `Arc<EventBus>`. UI layers subscribe to react to session expiry,
//! access-denied responses, and store updates.

use serde::Serialize;
use tokio::sync::broadcast;

use rideops_core::i18n::Language;

/// Something the UI may want to react to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    /// A request came back 401; the stored token has been cleared.
    SessionExpired,
    /// A request came back 403, with the backend's message if any.
    AccessDenied { message: Option<String> },
    /// A store replaced its state after a fetch or mutation.
    StoreChanged { store: &'static str },
    LanguageChanged { language: Language },
}

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

pub struct EventBus {
    sender: broadcast::Sender<AppEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// Slow receivers observe `RecvError::Lagged` when the buffer fills.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish to all current subscribers. Dropped if nobody listens.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AppEvent> {
        self.sender.subscribe()
    }
}

/// Wait for the next event on `rx`.
///
/// A receiver that fell behind skips what it missed and keeps going;
/// `None` means the bus is gone.
pub async fn next_event(rx: &mut broadcast::Receiver<AppEvent>) -> Option<AppEvent> {
    loop {
        match rx.recv().await {
            Ok(event) => return Some(event),
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!(skipped = n, "Event subscriber lagged, some events were dropped");
            }
            Err(broadcast::error::RecvError::Closed) => return None,
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}
