/**
 * Backend Error Types
 *
 * Errors produced while handling a request. Each variant maps to one HTTP
 * status code and carries a human-readable detail string.
 *
 * # Error Categories
 *
 * - `Conflict` - a natural key (email, UHID) is already taken
 * - `NotFound` - a referenced record is missing, or a listing is empty
 * - `Unauthorized` - password mismatch
 * - `BadRequest` - malformed request (unknown role, missing selector)
 * - `SharedError` - record validation failure
 * - `DatabaseError` - store failure
 *
 * A request that is well-formed but changes nothing is not an error; see
 * `backend::outcome::MutationOutcome`.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Duplicate natural key
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Missing record or reference
    #[error("Not found: {message}")]
    NotFound { message: String },

    /// Credential mismatch
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Request cannot be interpreted
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error(transparent)]
    SharedError(#[from] SharedError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl BackendError {
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    /// Classify an insert failure.
    ///
    /// A unique-constraint violation means a concurrent registration won the
    /// race after the pre-insert lookup passed; it is reported as a conflict.
    pub fn from_insert(err: sqlx::Error, conflict_message: impl Into<String>) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::conflict(conflict_message)
            }
            _ => Self::DatabaseError(err),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Conflict`, `BadRequest`, `SharedError` - 400 Bad Request
    /// - `NotFound` - 404 Not Found
    /// - `Unauthorized` - 401 Unauthorized
    /// - `DatabaseError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Detail string returned to the caller
    ///
    /// Internal failures get a generic message; the cause is logged instead.
    pub fn message(&self) -> String {
        match self {
            Self::Conflict { message }
            | Self::NotFound { message }
            | Self::Unauthorized { message }
            | Self::BadRequest { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
            Self::DatabaseError(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            BackendError::conflict("dup").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::not_found("gone").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            BackendError::unauthorized("Invalid password").status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            BackendError::bad_request("Invalid role").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            BackendError::DatabaseError(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_shared_error() {
        let backend_error: BackendError = SharedError::validation("email", "is required").into();
        assert!(matches!(backend_error, BackendError::SharedError(_)));
        assert_eq!(backend_error.status_code(), StatusCode::BAD_REQUEST);
        assert!(backend_error.message().contains("email"));
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let error = BackendError::DatabaseError(sqlx::Error::PoolClosed);
        assert_eq!(error.message(), "Internal server error");
    }

    #[test]
    fn test_from_insert_passes_through_other_errors() {
        let error = BackendError::from_insert(sqlx::Error::RowNotFound, "taken");
        assert!(matches!(error, BackendError::DatabaseError(_)));
    }
}
