//! WebSocket upgrade handler for observer connections.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tracing::{info, warn};

use crate::state::AppState;

/// GET /ws — upgrade into the observer registry.
///
/// Observers are admitted without authorization; they only receive seat
/// state transitions and never originate state changes.
pub async fn ws_upgrade(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_observer(state, socket))
}

/// Drives one established observer connection.
async fn handle_observer(state: AppState, socket: WebSocket) {
    let (mut ws_tx, mut ws_rx) = socket.split();

    let (handle, mut outbound_rx) = state.observers.register();
    let conn_id = handle.id;

    info!(conn_id = %conn_id, "Observer connected");

    // Forward broadcast messages into the socket.
    let outbound_task = tokio::spawn(async move {
        while let Some(msg) = outbound_rx.recv().await {
            if ws_tx.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    // Inbound frames carry no protocol; they only prove liveness.
    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(conn_id = %conn_id, error = %e, "Observer socket error");
                break;
            }
        }
    }

    outbound_task.abort();
    state.observers.unregister(&conn_id);

    info!(conn_id = %conn_id, "Observer disconnected");
}
