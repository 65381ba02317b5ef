//! Custom assertion macros
//!
//! Error responses share one body shape, `{"detail": ..., "status": ...}`;
//! these macros check both the HTTP status and the detail text.

/// Assert a response's status code and `detail` message
#[macro_export]
macro_rules! assert_error {
    ($response:expr, $status:expr, $detail:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), $status);
        let body: serde_json::Value = response.json();
        assert_eq!(body["detail"], $detail, "unexpected error body: {}", body);
        assert_eq!(body["status"], $status.as_u16());
    }};
}

/// Assert a successful response carrying `{"message": ...}`
#[macro_export]
macro_rules! assert_message {
    ($response:expr, $message:expr) => {{
        let response = &$response;
        assert_eq!(response.status_code(), axum::http::StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["message"], $message, "unexpected body: {}", body);
    }};
}
