/**
 * Federated Login Handler
 *
 * Implements POST /google-login. The identity provider has already verified
 * the email; the server only checks that an account of the requested role
 * exists for it.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::accounts;
use crate::backend::auth::handlers::types::{GoogleLoginResponse, LOGIN_SUCCESSFUL};
use crate::backend::error::BackendError;
use crate::shared::requests::GoogleLoginRequest;
use crate::shared::Role;

/// Federated login handler
///
/// # Errors
///
/// * `400 Bad Request` - unknown role
/// * `404 Not Found` - no account of that role has this email
pub async fn google_login(
    State(pool): State<SqlitePool>,
    Json(request): Json<GoogleLoginRequest>,
) -> Result<Json<GoogleLoginResponse>, BackendError> {
    let role: Role = request
        .role
        .parse()
        .map_err(|_| BackendError::bad_request("Invalid role"))?;

    let user = accounts::find_by_email(&pool, role, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Federated login for unknown {}: {}", role, request.email);
            BackendError::not_found(format!("{} not found", role.display_name()))
        })?;

    tracing::info!("Federated login: {} ({})", user.email(), role);

    Ok(Json(GoogleLoginResponse {
        message: LOGIN_SUCCESSFUL,
        role,
        user,
    }))
}
