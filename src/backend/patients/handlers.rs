/**
 * Patient Registration and Listing Handlers
 *
 * # Registration checks
 *
 * 1. Required text fields are non-blank
 * 2. Neither the email nor the UHID is taken
 * 3. The assigned administrator exists (its name is copied onto the patient)
 * 4. The assigned doctor, when given, exists (its name is copied as well)
 *
 * On success the patient's email is appended to the administrator's roster.
 */

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::admins::{self, RosterKind};
use crate::backend::doctors;
use crate::backend::error::BackendError;
use crate::shared::records::{NewPatient, Patient};
use crate::shared::requests::PatientRegistered;

const DUPLICATE_PATIENT: &str = "Patient with this UHID or email already exists.";

/// POST /registerpatient
pub async fn register_patient(
    State(pool): State<SqlitePool>,
    Json(request): Json<NewPatient>,
) -> Result<Json<PatientRegistered>, BackendError> {
    request.validate()?;

    if db::exists_by_email_or_uhid(&pool, &request.email, &request.uhid).await? {
        tracing::warn!("Patient registration rejected, UHID or email taken: {}", request.uhid);
        return Err(BackendError::conflict(DUPLICATE_PATIENT));
    }

    let admin = admins::db::find_by_email(&pool, &request.admin_assigned)
        .await?
        .ok_or_else(|| BackendError::not_found("Admin not found."))?;

    let doctor_name = match request.doctor_assigned.as_deref() {
        Some(doctor_email) => Some(
            doctors::db::find_by_email(&pool, doctor_email)
                .await?
                .ok_or_else(|| BackendError::not_found("Doctor not found"))?
                .doctor_name,
        ),
        None => None,
    };

    let patient_id = db::create_patient(&pool, &request, &admin.admin_name, doctor_name.as_deref())
        .await
        .map_err(|e| BackendError::from_insert(e, DUPLICATE_PATIENT))?;

    admins::db::append_roster(&pool, &admin.email, RosterKind::Patient, &request.email).await?;

    tracing::info!("Patient registered: {} under {}", request.uhid, admin.email);

    Ok(Json(PatientRegistered {
        message: "Patient registered successfully.".to_string(),
        patient_id,
    }))
}

/// GET /patients/by-admin/{admin_email}
pub async fn patients_by_admin(
    State(pool): State<SqlitePool>,
    Path(admin_email): Path<String>,
) -> Result<Json<Vec<Patient>>, BackendError> {
    let patients = db::list_by_admin(&pool, &admin_email).await?;
    if patients.is_empty() {
        return Err(BackendError::not_found("No patients found for this admin"));
    }
    Ok(Json(patients))
}

/// GET /patients/by-doctor/{doctor_email}
pub async fn patients_by_doctor(
    State(pool): State<SqlitePool>,
    Path(doctor_email): Path<String>,
) -> Result<Json<Vec<Patient>>, BackendError> {
    let patients = db::list_by_doctor(&pool, &doctor_email).await?;
    if patients.is_empty() {
        return Err(BackendError::not_found("No patients found for this doctor"));
    }
    Ok(Json(patients))
}
