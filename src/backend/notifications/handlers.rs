//! Notification HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::error::BackendError;
use crate::backend::patients;
use crate::shared::records::NotificationDocument;
use crate::shared::requests::{AddNotificationRequest, MarkReadRequest, StatusResponse};

/// POST /add-notification
///
/// The UHID must belong to a registered patient. An empty list creates no
/// document.
pub async fn add_notification(
    State(pool): State<SqlitePool>,
    Json(request): Json<AddNotificationRequest>,
) -> Result<Json<StatusResponse>, BackendError> {
    if !patients::db::exists_by_uhid(&pool, &request.uhid).await? {
        tracing::warn!("Notification for unknown UHID: {}", request.uhid);
        return Err(BackendError::not_found("Invalid UHID"));
    }

    let stored = db::append(&pool, &request.uhid, &request.notifications).await?;
    tracing::info!("Added {} notification(s) for {}", stored.len(), request.uhid);

    Ok(Json(StatusResponse::success("Notification(s) added")))
}

/// GET /notifications/{uhid}
pub async fn get_notifications(
    State(pool): State<SqlitePool>,
    Path(uhid): Path<String>,
) -> Result<Json<NotificationDocument>, BackendError> {
    db::find_document(&pool, &uhid)
        .await?
        .map(Json)
        .ok_or_else(|| BackendError::not_found("Invalid UHID"))
}

/// PUT /mark-as-read
///
/// `id` takes precedence over `message` when both are present.
pub async fn mark_as_read(
    State(pool): State<SqlitePool>,
    Json(request): Json<MarkReadRequest>,
) -> Result<Json<StatusResponse>, BackendError> {
    if !db::has_document(&pool, &request.uhid).await? {
        return Err(BackendError::not_found("Invalid UHID"));
    }

    let outcome = match (request.id.as_deref(), request.message.as_deref()) {
        (Some(id), _) => db::mark_read_by_id(&pool, &request.uhid, id).await?,
        (None, Some(message)) => db::mark_read_by_message(&pool, &request.uhid, message).await?,
        (None, None) => {
            return Err(BackendError::bad_request(
                "Either id or message must be provided",
            ))
        }
    };

    if !outcome.is_modified() {
        return Err(BackendError::not_found("Message not found or already read"));
    }

    Ok(Json(StatusResponse::success("Notification marked as read")))
}
