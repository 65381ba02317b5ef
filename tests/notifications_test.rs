//! Notification integration tests

#[macro_use]
mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn test_notification_to_unknown_uhid() {
    let server = seeded_server().await;

    let response = server
        .post("/add-notification")
        .json(&json!({ "uhid": "UH-404", "notifications": [{ "message": "hello" }] }))
        .await;
    assert_error!(response, StatusCode::NOT_FOUND, "Invalid UHID");

    let document = server.get("/notifications/UH-404").await;
    assert_eq!(document.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_notifications_append_in_order() {
    let server = seeded_server().await;

    for message in ["Fill OKS", "Clinic at 10"] {
        let response = server
            .post("/add-notification")
            .json(&json!({ "uhid": "UH-1", "notifications": [{ "message": message, "read": 0 }] }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({ "status": "success", "message": "Notification(s) added" })
        );
    }

    let document: Value = server.get("/notifications/UH-1").await.json();
    assert_eq!(document["uhid"], "UH-1");
    let messages: Vec<&str> = document["notifications"]
        .as_array()
        .map(|entries| entries.iter().filter_map(|n| n["message"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(messages, vec!["Fill OKS", "Clinic at 10"]);
    assert!(document["notifications"][0]["id"].is_string());
}

#[tokio::test]
async fn test_mark_as_read_twice_reports_not_found() {
    let server = seeded_server().await;
    server
        .post("/add-notification")
        .json(&json!({ "uhid": "UH-1", "notifications": [{ "message": "Fill OKS" }] }))
        .await;

    let body = json!({ "uhid": "UH-1", "message": "Fill OKS" });

    let first = server.put("/mark-as-read").json(&body).await;
    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(first.json::<Value>()["message"], "Notification marked as read");

    let second = server.put("/mark-as-read").json(&body).await;
    assert_error!(second, StatusCode::NOT_FOUND, "Message not found or already read");

    let document: Value = server.get("/notifications/UH-1").await.json();
    assert_eq!(document["notifications"][0]["read"], 1);
}

#[tokio::test]
async fn test_mark_as_read_by_id() {
    let server = seeded_server().await;
    server
        .post("/add-notification")
        .json(&json!({
            "uhid": "UH-1",
            "notifications": [{ "message": "Reminder" }, { "message": "Reminder" }]
        }))
        .await;

    let document: Value = server.get("/notifications/UH-1").await.json();
    let second_id = document["notifications"][1]["id"].clone();

    let response = server
        .put("/mark-as-read")
        .json(&json!({ "uhid": "UH-1", "id": second_id }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let document: Value = server.get("/notifications/UH-1").await.json();
    assert_eq!(document["notifications"][0]["read"], 0);
    assert_eq!(document["notifications"][1]["read"], 1);
}

#[tokio::test]
async fn test_mark_as_read_errors() {
    let server = seeded_server().await;

    let no_document = server
        .put("/mark-as-read")
        .json(&json!({ "uhid": "UH-1", "message": "anything" }))
        .await;
    assert_error!(no_document, StatusCode::NOT_FOUND, "Invalid UHID");

    server
        .post("/add-notification")
        .json(&json!({ "uhid": "UH-1", "notifications": [{ "message": "Fill OKS" }] }))
        .await;

    let unknown_message = server
        .put("/mark-as-read")
        .json(&json!({ "uhid": "UH-1", "message": "Something else" }))
        .await;
    assert_error!(
        unknown_message,
        StatusCode::NOT_FOUND,
        "Message not found or already read"
    );

    let no_selector = server
        .put("/mark-as-read")
        .json(&json!({ "uhid": "UH-1" }))
        .await;
    assert_eq!(no_selector.status_code(), StatusCode::BAD_REQUEST);
}
