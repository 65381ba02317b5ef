//! Server Module
//!
//! Everything needed to turn configuration into a running Axum application.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Configuration loading and store setup
//! ├── keepalive.rs    - Periodic self-ping
//! └── init.rs         - Server initialization and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Store Setup**: SQLite pool plus embedded migrations
//! 3. **Background Tasks**: optional keep-alive ping
//! 4. **Router Creation**: routes, CORS and request tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Keep-alive background task
pub mod keepalive;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig, StartupError};
pub use init::{create_app, create_app_with_pool};
pub use state::AppState;
