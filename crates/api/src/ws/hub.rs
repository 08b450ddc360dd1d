use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::ws::Message;
use tokio::sync::{mpsc, RwLock};
use vitalwatch_core::types::Timestamp;
use vitalwatch_events::VitalEvent;

/// Channel sender half for pushing messages to a WebSocket observer.
pub type ObserverSender = mpsc::UnboundedSender<Message>;

/// Metadata for a single registered observer connection.
pub struct Observer {
    /// Channel sender for outbound messages to this connection.
    pub sender: ObserverSender,
    /// When this observer subscribed.
    pub connected_at: Timestamp,
}

/// The broadcast hub: exclusive owner of the live observer set.
///
/// Thread-safe via interior `RwLock`; designed to be wrapped in `Arc` and
/// shared across the application. All registration-set mutation happens
/// here and nowhere else. `publish` holds the lock across the whole send
/// loop, so delivery order to any single observer always equals the
/// arrival order of `publish` calls; sends go into unbounded channels and
/// never block on a slow observer.
pub struct WsHub {
    observers: RwLock<HashMap<String, Observer>>,
}

impl WsHub {
    /// Create a new, empty hub.
    pub fn new() -> Self {
        Self {
            observers: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new observer.
    ///
    /// Returns the receiver half of the message channel so the caller can
    /// forward messages to the WebSocket sink.
    pub async fn register(&self, observer_id: String) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        let observer = Observer {
            sender: tx,
            connected_at: chrono::Utc::now(),
        };
        self.observers.write().await.insert(observer_id, observer);
        rx
    }

    /// Remove an observer by its ID.
    pub async fn unregister(&self, observer_id: &str) {
        self.observers.write().await.remove(observer_id);
    }

    /// Deliver an event to every currently registered observer.
    ///
    /// Delivery is attempted for all observers before the call returns. An
    /// observer whose channel is closed (its connection went away) is
    /// silently unregistered; that never aborts delivery to the rest and
    /// never surfaces an error to the publisher.
    pub async fn publish(&self, event: &VitalEvent) {
        let message = Message::Text(event.dashboard_message().to_string().into());

        let mut observers = self.observers.write().await;
        observers.retain(|observer_id, observer| {
            if observer.sender.send(message.clone()).is_ok() {
                true
            } else {
                tracing::debug!(observer_id = %observer_id, "Observer unreachable, unregistering");
                false
            }
        });
    }

    /// Return the current number of registered observers.
    pub async fn observer_count(&self) -> usize {
        self.observers.read().await.len()
    }

    /// Send a Ping frame to every registered observer.
    ///
    /// Used by the heartbeat task to keep connections alive and detect
    /// stale ones.
    pub async fn ping_all(&self) {
        let observers = self.observers.read().await;
        for observer in observers.values() {
            let _ = observer.sender.send(Message::Ping(Bytes::new()));
        }
    }

    /// Send a Close frame to every observer, then clear the set.
    ///
    /// Used during graceful shutdown to notify all clients before the
    /// server stops accepting new connections.
    pub async fn shutdown_all(&self) {
        let mut observers = self.observers.write().await;
        let count = observers.len();
        for observer in observers.values() {
            let _ = observer.sender.send(Message::Close(None));
        }
        observers.clear();
        tracing::info!(count, "Closed all observer connections");
    }
}

impl Default for WsHub {
    fn default() -> Self {
        Self::new()
    }
}
