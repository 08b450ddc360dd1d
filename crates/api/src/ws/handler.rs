use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};

use crate::state::AppState;
use crate::ws::hub::WsHub;

/// HTTP handler that upgrades the connection to WebSocket.
///
/// After the upgrade the connection is registered with the hub as a live
/// observer and managed by two tasks (sender + receiver).
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state.hub))
}

/// Manage a single observer connection after upgrade.
///
/// Splits the socket into a sink (outbound) and stream (inbound), then:
///   1. Registers the observer with the hub.
///   2. Spawns a sender task that forwards published events to the socket.
///   3. Drains inbound messages on the current task (observers send
///      nothing meaningful after subscribing).
///   4. Unregisters on disconnect.
async fn handle_socket(socket: WebSocket, hub: Arc<WsHub>) {
    let observer_id = uuid::Uuid::new_v4().to_string();
    tracing::info!(observer_id = %observer_id, "Observer connected");

    // Register and get the receiver for outbound messages.
    let mut rx = hub.register(observer_id.clone()).await;

    let (mut sink, mut stream) = socket.split();

    // Sender task: forward published events to the WebSocket sink.
    let sender_observer_id = observer_id.clone();
    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sink.send(msg).await.is_err() {
                tracing::debug!(observer_id = %sender_observer_id, "Observer sink closed");
                break;
            }
        }
    });

    // Receiver loop: drain inbound frames until the connection closes.
    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => {
                tracing::trace!(observer_id = %observer_id, "Pong received");
            }
            Ok(_msg) => {
                // Observers are push-only; any other client input is ignored.
            }
            Err(e) => {
                tracing::debug!(observer_id = %observer_id, error = %e, "Observer receive error");
                break;
            }
        }
    }

    // Clean up: unregister the observer and abort the sender task.
    hub.unregister(&observer_id).await;
    send_task.abort();
    tracing::info!(observer_id = %observer_id, "Observer disconnected");
}
