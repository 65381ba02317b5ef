//! Administrator HTTP Handlers

use axum::{extract::State, Json};
use sqlx::SqlitePool;

use super::db;
use crate::backend::error::BackendError;
use crate::shared::records::NewAdmin;
use crate::shared::requests::AdminRegistered;

const DUPLICATE_ADMIN: &str = "Admin with this email already exists.";

/// POST /registeradmin
pub async fn register_admin(
    State(pool): State<SqlitePool>,
    Json(request): Json<NewAdmin>,
) -> Result<Json<AdminRegistered>, BackendError> {
    request.validate()?;

    if db::find_by_email(&pool, &request.email).await?.is_some() {
        tracing::warn!("Admin registration rejected, email taken: {}", request.email);
        return Err(BackendError::conflict(DUPLICATE_ADMIN));
    }

    let admin_id = db::create_admin(&pool, &request)
        .await
        .map_err(|e| BackendError::from_insert(e, DUPLICATE_ADMIN))?;

    tracing::info!("Admin registered: {} ({})", request.email, admin_id);

    Ok(Json(AdminRegistered {
        message: "Admin registered successfully.".to_string(),
        admin_id,
    }))
}
