/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Liveness probe (`GET /`)
 * 2. WebSocket relay (`/ws/message`)
 * 3. API routes
 * 4. Fallback handler (404)
 *
 * # Middleware
 *
 * - Permissive CORS: any origin, method and header
 * - Request tracing via `TraceLayer`
 */

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::realtime::handle_message_socket;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", get(health))
        .route("/ws/message", get(handle_message_socket));

    let router = configure_api_routes(router);

    router
        .fallback(|| async { BackendError::not_found("Not Found") })
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "alive" }))
}
