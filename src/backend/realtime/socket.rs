/**
 * WebSocket Relay Handler
 *
 * Implements `GET /ws/message`. Every text frame that parses as JSON is
 * forwarded, byte for byte, to all registered connections including the
 * sender. Frames that are not JSON are logged and dropped; the connection
 * stays open.
 */

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};

use crate::backend::realtime::registry::ConnectionRegistry;

/// Upgrade the request and serve the connection
pub async fn handle_message_socket(
    ws: WebSocketUpgrade,
    State(registry): State<ConnectionRegistry>,
) -> Response {
    ws.on_upgrade(move |socket| serve_connection(socket, registry))
}

async fn serve_connection(socket: WebSocket, registry: ConnectionRegistry) {
    let (id, mut outbound) = registry.register().await;
    let (mut sender, mut receiver) = socket.split();

    let writer = tokio::spawn(async move {
        while let Some(payload) = outbound.recv().await {
            if let Err(e) = sender.send(Message::Text(payload.into())).await {
                tracing::debug!("[Realtime] Write to {} failed: {:?}", id, e);
                break;
            }
        }
    });

    while let Some(frame) = receiver.next().await {
        match frame {
            Ok(Message::Text(text)) => relay(&registry, text.as_str()).await,
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("[Realtime] Read from {} failed: {:?}", id, e);
                break;
            }
        }
    }

    registry.unregister(id).await;
    writer.abort();
}

async fn relay(registry: &ConnectionRegistry, text: &str) {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(_) => {
            tracing::info!("[Realtime] Received: {}", text);
            registry.broadcast(text).await;
        }
        Err(e) => tracing::warn!("[Realtime] Ignoring non-JSON frame: {}", e),
    }
}
