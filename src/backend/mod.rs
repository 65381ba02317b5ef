//! Backend Module
//!
//! All server-side code: an Axum HTTP server over a SQLite record store,
//! plus a WebSocket relay.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - configuration, store setup, application state, startup
//! - **`routes`** - router assembly and middleware
//! - **`admins`**, **`doctors`**, **`patients`**, **`notifications`** - store
//!   operations and HTTP handlers per record kind
//! - **`auth`** - role-dispatched login
//! - **`reports`** - questionnaire scores report
//! - **`realtime`** - WebSocket connection registry and relay
//! - **`outcome`** - modified / unchanged result of targeted updates
//! - **`error`** - `BackendError` and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── admins/         - Administrator records
//! ├── doctors/        - Doctor records
//! ├── patients/       - Patient records and updates
//! ├── notifications/  - Notification documents
//! ├── auth/           - Login handlers
//! ├── reports/        - Aggregate reports
//! ├── realtime/       - WebSocket relay
//! ├── outcome.rs      - Mutation outcomes
//! └── error/          - Error types
//! ```
//!
//! # Error Handling
//!
//! Handlers return `Result<Json<T>, BackendError>`; store functions return
//! `sqlx::Error` and are lifted with `?`.
//!
//! # Example
//!
//! ```rust,no_run
//! use promcare::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Administrator records
pub mod admins;

/// Doctor records
pub mod doctors;

/// Patient records and targeted updates
pub mod patients;

/// Notification documents
pub mod notifications;

/// Login handlers
pub mod auth;

/// Aggregate reports
pub mod reports;

/// WebSocket relay
pub mod realtime;

/// Mutation outcomes
pub mod outcome;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use outcome::MutationOutcome;
pub use realtime::ConnectionRegistry;
pub use server::{create_app, create_app_with_pool, AppState, ServerConfig};
