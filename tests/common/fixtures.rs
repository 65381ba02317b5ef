//! Store and server fixtures
//!
//! Every server gets its own in-memory database, so tests are independent
//! and can run in parallel.

use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use promcare::backend::server::config::load_database;
use promcare::backend::server::create_app_with_pool;

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const DOCTOR_EMAIL: &str = "doc@example.com";

/// Fresh, migrated in-memory store
pub async fn test_pool() -> SqlitePool {
    load_database("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database")
}

/// Test server over a fresh store, using the mock transport
pub async fn test_server() -> TestServer {
    TestServer::new(create_app_with_pool(test_pool().await)).expect("Failed to start test server")
}

/// Test server bound to a real port, required for WebSocket tests
pub async fn http_test_server() -> TestServer {
    TestServer::builder()
        .http_transport()
        .build(create_app_with_pool(test_pool().await))
        .expect("Failed to start test server")
}

pub async fn seed_admin(server: &TestServer) -> Value {
    server
        .post("/registeradmin")
        .json(&json!({
            "admin_name": "Ward Admin",
            "email": ADMIN_EMAIL,
            "password": "admin-pw",
            "phone_number": "555-0100"
        }))
        .await
        .json()
}

pub async fn seed_doctor(server: &TestServer) -> Value {
    server
        .post("/registerdoctor")
        .json(&json!({
            "doctor_name": "Dr. Rao",
            "email": DOCTOR_EMAIL,
            "password": "doctor-pw",
            "phone_number": "555-0200",
            "admin_created": ADMIN_EMAIL
        }))
        .await
        .json()
}

/// Registration body for a patient under the seeded administrator
pub fn patient_body(uhid: &str, email: &str) -> Value {
    json!({
        "uhid": uhid,
        "name": "Asha",
        "email": email,
        "password": "patient-pw",
        "phone_number": format!("555-{}", uhid),
        "admin_assigned": ADMIN_EMAIL,
        "questionnaire_assigned": [
            { "name": "Oxford Knee Score", "period": "6W", "completed": 0 }
        ]
    })
}

pub async fn seed_patient(server: &TestServer, uhid: &str, email: &str) -> Value {
    server
        .post("/registerpatient")
        .json(&patient_body(uhid, email))
        .await
        .json()
}

/// Server with one administrator, one doctor and patient `UH-1`
pub async fn seeded_server() -> TestServer {
    let server = test_server().await;
    seed_admin(&server).await;
    seed_doctor(&server).await;
    seed_patient(&server, "UH-1", "asha@example.com").await;
    server
}
