//! Authentication Handlers Module
//!
//! # Handlers
//!
//! - **`google_login`** - POST /google-login - login vouched for by an identity provider
//! - **`login`** - POST /login - identifier and password login

/// Response types
pub mod types;

/// Federated login handler
pub mod google;

/// Credential login handler
pub mod login;

pub use types::{GoogleLoginResponse, LoginResponse};

pub use google::google_login;
pub use login::login;
