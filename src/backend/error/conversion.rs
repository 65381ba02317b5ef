/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return it directly.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "detail": "Patient not found",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        if let BackendError::DatabaseError(err) = &self {
            tracing::error!("Database error while handling request: {:?}", err);
        }

        let status = self.status_code();
        let body = serde_json::json!({
            "detail": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
