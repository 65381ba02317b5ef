/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract the record
 * store pool or the connection registry without needing the entire
 * `AppState`.
 *
 * # Example
 *
 * ```rust,no_run
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // query the store
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::realtime::ConnectionRegistry;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    /// Record store connection pool
    pub pool: SqlitePool,

    /// Live WebSocket connections
    pub connections: ConnectionRegistry,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            connections: ConnectionRegistry::new(),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

impl FromRef<AppState> for ConnectionRegistry {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.connections.clone()
    }
}
