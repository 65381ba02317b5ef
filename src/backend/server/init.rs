/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, state creation, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Open the record store and run migrations
 * 2. Create the application state (pool and connection registry)
 * 3. Start the keep-alive ping if configured
 * 4. Create and configure the router
 */

use axum::Router;
use sqlx::SqlitePool;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig, StartupError};
use crate::backend::server::keepalive::spawn_keep_alive;
use crate::backend::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails when the record store cannot be opened or migrated.
pub async fn create_app(config: &ServerConfig) -> Result<Router, StartupError> {
    tracing::info!("Initializing PROMCare backend server");

    let pool = load_database(&config.database_url, config.max_connections).await?;

    if let Some(keep_alive) = config.keep_alive.clone() {
        tracing::info!(
            "Keep-alive ping every {}s to {}",
            keep_alive.interval.as_secs(),
            keep_alive.url
        );
        spawn_keep_alive(keep_alive);
    }

    let app = create_app_with_pool(pool);
    tracing::info!("Router configured");

    Ok(app)
}

/// Build the router over an already-migrated pool
pub fn create_app_with_pool(pool: SqlitePool) -> Router {
    create_router(AppState::new(pool))
}
