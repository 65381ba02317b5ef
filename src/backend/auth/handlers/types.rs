/**
 * Authentication Handler Types
 *
 * Response bodies for the login handlers. Request bodies are shared with
 * clients and live in `shared::requests`.
 */

use serde::Serialize;

use crate::backend::auth::Account;
use crate::shared::Role;

pub const LOGIN_SUCCESSFUL: &str = "Login successful";

/// Returned by `/google-login`
#[derive(Serialize, Debug)]
pub struct GoogleLoginResponse {
    pub message: &'static str,
    pub role: Role,
    /// Account record (never includes the password)
    pub user: Account,
}

/// Returned by `/login`
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub message: &'static str,
    pub user: Account,
}
