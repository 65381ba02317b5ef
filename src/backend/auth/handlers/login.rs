/**
 * Login Handler
 *
 * Implements POST /login.
 *
 * # Authentication Process
 *
 * 1. Parse the role
 * 2. Look up the account by identifier (email, UHID or phone number, per role)
 * 3. Compare the password
 * 4. Return the account without its password
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::accounts;
use crate::backend::auth::handlers::types::{LoginResponse, LOGIN_SUCCESSFUL};
use crate::backend::error::BackendError;
use crate::shared::requests::LoginRequest;
use crate::shared::Role;

/// Credential login handler
///
/// # Errors
///
/// * `400 Bad Request` - unknown role
/// * `404 Not Found` - no account matches the identifier
/// * `401 Unauthorized` - password mismatch
///
/// # Example Request
///
/// ```http
/// POST /login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "role": "patient",
///   "identifier": "UH-1001",
///   "password": "secret"
/// }
/// ```
pub async fn login(
    State(pool): State<SqlitePool>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, BackendError> {
    let role: Role = request
        .role
        .parse()
        .map_err(|_| BackendError::bad_request("Invalid role"))?;

    let user = accounts::find_by_identifier(&pool, role, &request.identifier)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown {}: {}", role, request.identifier);
            BackendError::not_found("User not found")
        })?;

    if user.password() != request.password {
        tracing::warn!("Invalid password for {}: {}", role, request.identifier);
        return Err(BackendError::unauthorized("Invalid password"));
    }

    tracing::info!("User logged in: {} ({})", user.email(), role);

    Ok(Json(LoginResponse {
        message: LOGIN_SUCCESSFUL,
        user,
    }))
}
