//! Real-time Relay Module
//!
//! A WebSocket endpoint that relays every JSON message a client sends to all
//! connected clients, the sender included.
//!
//! # Module Structure
//!
//! ```text
//! realtime/
//! ├── mod.rs          - Module exports and documentation
//! ├── registry.rs     - Connection registry and fan-out
//! └── socket.rs       - WebSocket upgrade and per-connection tasks
//! ```
//!
//! # Connection Lifecycle
//!
//! 1. The upgrade registers the connection and gets an outbound queue
//! 2. A writer task drains the queue into the socket
//! 3. The reader loop parses inbound text frames and broadcasts valid JSON
//! 4. Close, end of stream or a read error unregisters the connection

/// Connection registry
pub mod registry;

/// WebSocket handler
pub mod socket;

pub use registry::ConnectionRegistry;
pub use socket::handle_message_socket;
