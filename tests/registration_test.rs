//! Registration and listing integration tests

#[macro_use]
mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

#[tokio::test]
async fn test_health_probe() {
    let server = test_server().await;
    let response = server.get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "status": "alive" }));
}

#[tokio::test]
async fn test_register_admin_and_duplicate() {
    let server = test_server().await;

    let body = seed_admin(&server).await;
    assert_eq!(body["message"], "Admin registered successfully.");
    assert!(body["admin_id"].as_str().is_some_and(|id| !id.is_empty()));

    let response = server
        .post("/registeradmin")
        .json(&json!({
            "admin_name": "Someone Else",
            "email": ADMIN_EMAIL,
            "password": "pw"
        }))
        .await;
    assert_error!(response, StatusCode::BAD_REQUEST, "Admin with this email already exists.");
}

#[tokio::test]
async fn test_register_doctor_requires_existing_admin() {
    let server = test_server().await;

    let response = server
        .post("/registerdoctor")
        .json(&json!({
            "doctor_name": "Dr. Rao",
            "email": DOCTOR_EMAIL,
            "password": "pw",
            "admin_created": "ghost@example.com"
        }))
        .await;
    assert_error!(
        response,
        StatusCode::NOT_FOUND,
        "Admin who created this doctor was not found."
    );
}

#[tokio::test]
async fn test_register_doctor_appends_to_admin_roster() {
    let server = test_server().await;
    seed_admin(&server).await;

    let body = seed_doctor(&server).await;
    assert_eq!(body["message"], "Doctor registered successfully.");

    let login = server
        .post("/google-login")
        .json(&json!({ "email": ADMIN_EMAIL, "role": "admin" }))
        .await;
    let admin: Value = login.json();
    assert_eq!(admin["user"]["doctors_created"], json!([DOCTOR_EMAIL]));

    let duplicate = server
        .post("/registerdoctor")
        .json(&json!({
            "doctor_name": "Dr. Other",
            "email": DOCTOR_EMAIL,
            "password": "pw",
            "admin_created": ADMIN_EMAIL
        }))
        .await;
    assert_error!(duplicate, StatusCode::BAD_REQUEST, "Doctor with this email already exists.");
}

#[tokio::test]
async fn test_duplicate_uhid_or_email_is_rejected() {
    let server = seeded_server().await;

    let same_uhid = server
        .post("/registerpatient")
        .json(&patient_body("UH-1", "someone@example.com"))
        .await;
    assert_error!(
        same_uhid,
        StatusCode::BAD_REQUEST,
        "Patient with this UHID or email already exists."
    );

    let same_email = server
        .post("/registerpatient")
        .json(&patient_body("UH-9", "asha@example.com"))
        .await;
    assert_error!(
        same_email,
        StatusCode::BAD_REQUEST,
        "Patient with this UHID or email already exists."
    );
}

#[tokio::test]
async fn test_register_patient_checks_references() {
    let server = test_server().await;

    let no_admin = server
        .post("/registerpatient")
        .json(&patient_body("UH-1", "asha@example.com"))
        .await;
    assert_error!(no_admin, StatusCode::NOT_FOUND, "Admin not found.");

    seed_admin(&server).await;
    let mut body = patient_body("UH-1", "asha@example.com");
    body["doctor_assigned"] = json!("ghost@example.com");
    let no_doctor = server.post("/registerpatient").json(&body).await;
    assert_error!(no_doctor, StatusCode::NOT_FOUND, "Doctor not found");
}

#[tokio::test]
async fn test_blank_required_field_is_rejected() {
    let server = test_server().await;
    seed_admin(&server).await;

    let response = server
        .post("/registerpatient")
        .json(&patient_body("  ", "asha@example.com"))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patients_by_admin_lists_without_passwords() {
    let server = seeded_server().await;
    seed_patient(&server, "UH-2", "ravi@example.com").await;

    let response = server.get(&format!("/patients/by-admin/{}", ADMIN_EMAIL)).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let patients: Vec<Value> = response.json();
    let uhids: Vec<&str> = patients.iter().filter_map(|p| p["uhid"].as_str()).collect();
    assert_eq!(uhids, vec!["UH-1", "UH-2"]);
    assert!(patients.iter().all(|p| p.get("password").is_none()));
    assert_eq!(patients[0]["admin_name"], "Ward Admin");
    assert!(patients[0]["_id"].is_string());
}

#[tokio::test]
async fn test_empty_listings_are_not_found() {
    let server = test_server().await;

    let patients = server.get("/patients/by-admin/nobody@example.com").await;
    assert_error!(patients, StatusCode::NOT_FOUND, "No patients found for this admin");

    let doctors = server.get("/doctors/by-admin/nobody@example.com").await;
    assert_error!(doctors, StatusCode::NOT_FOUND, "No doctors found for this admin");

    let by_doctor = server.get("/patients/by-doctor/nobody@example.com").await;
    assert_eq!(by_doctor.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_doctors_by_admin() {
    let server = seeded_server().await;

    let doctors: Vec<Value> = server
        .get(&format!("/doctors/by-admin/{}", ADMIN_EMAIL))
        .await
        .json();
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0]["doctor_name"], "Dr. Rao");
    assert!(doctors[0].get("password").is_none());
}

#[tokio::test]
async fn test_unknown_route_is_json_not_found() {
    let server = test_server().await;
    let response = server.get("/no-such-route").await;
    assert_error!(response, StatusCode::NOT_FOUND, "Not Found");
}
