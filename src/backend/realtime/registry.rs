/**
 * Connection Registry
 *
 * The set of live WebSocket connections. Each connection is identified by a
 * UUID and owns an unbounded outbound queue; the registry keeps the sending
 * half. All mutation goes through one `tokio::sync::Mutex`.
 *
 * # Broadcasting
 *
 * A broadcast pushes a copy of the payload into every queue. A queue whose
 * receiver is gone is pruned on the spot; the remaining connections still
 * get the payload.
 */

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use uuid::Uuid;

/// Outbound queue of one connection
pub type Outbound = mpsc::UnboundedReceiver<String>;

#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    connections: Arc<Mutex<HashMap<Uuid, mpsc::UnboundedSender<String>>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection and return its id and outbound queue
    pub async fn register(&self) -> (Uuid, Outbound) {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();

        let mut connections = self.connections.lock().await;
        connections.insert(id, tx);
        tracing::info!("[Realtime] Connection {} registered ({} active)", id, connections.len());

        (id, rx)
    }

    /// Remove a connection. Returns whether it was registered.
    pub async fn unregister(&self, id: Uuid) -> bool {
        let mut connections = self.connections.lock().await;
        let removed = connections.remove(&id).is_some();
        if removed {
            tracing::info!("[Realtime] Connection {} unregistered ({} active)", id, connections.len());
        }
        removed
    }

    /// Queue `payload` for every registered connection
    ///
    /// Returns the number of connections the payload was queued for.
    pub async fn broadcast(&self, payload: &str) -> usize {
        let mut connections = self.connections.lock().await;
        let mut delivered = 0;

        connections.retain(|id, tx| match tx.send(payload.to_string()) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(_) => {
                tracing::warn!("[Realtime] Dropping dead connection {}", id);
                false
            }
        });

        tracing::debug!("[Realtime] Broadcast to {} connection(s)", delivered);
        delivered
    }

    /// Number of registered connections
    pub async fn len(&self) -> usize {
        self.connections.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.connections.lock().await.is_empty()
    }
}
