//! Route Configuration Module
//!
//! - **`router`** - Main router creation, middleware and the liveness probe
//! - **`api_routes`** - Registration, notification, update, login and report endpoints

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
