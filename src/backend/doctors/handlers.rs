//! Doctor HTTP Handlers

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;

use super::db;
use crate::backend::admins::{self, RosterKind};
use crate::backend::error::BackendError;
use crate::shared::records::{Doctor, NewDoctor};
use crate::shared::requests::DoctorRegistered;

const DUPLICATE_DOCTOR: &str = "Doctor with this email already exists.";

/// POST /registerdoctor
///
/// The registering administrator must exist; the new doctor's email is
/// appended to that administrator's roster.
pub async fn register_doctor(
    State(pool): State<SqlitePool>,
    Json(request): Json<NewDoctor>,
) -> Result<Json<DoctorRegistered>, BackendError> {
    request.validate()?;

    if db::find_by_email(&pool, &request.email).await?.is_some() {
        return Err(BackendError::conflict(DUPLICATE_DOCTOR));
    }

    if admins::db::find_by_email(&pool, &request.admin_created)
        .await?
        .is_none()
    {
        tracing::warn!("Doctor registration names unknown admin: {}", request.admin_created);
        return Err(BackendError::not_found(
            "Admin who created this doctor was not found.",
        ));
    }

    let doctor_id = db::create_doctor(&pool, &request)
        .await
        .map_err(|e| BackendError::from_insert(e, DUPLICATE_DOCTOR))?;

    admins::db::append_roster(&pool, &request.admin_created, RosterKind::Doctor, &request.email)
        .await?;

    tracing::info!("Doctor registered: {} by {}", request.email, request.admin_created);

    Ok(Json(DoctorRegistered {
        message: "Doctor registered successfully.".to_string(),
        doctor_id,
    }))
}

/// GET /doctors/by-admin/{admin_email}
pub async fn doctors_by_admin(
    State(pool): State<SqlitePool>,
    Path(admin_email): Path<String>,
) -> Result<Json<Vec<Doctor>>, BackendError> {
    let doctors = db::list_by_admin(&pool, &admin_email).await?;
    if doctors.is_empty() {
        return Err(BackendError::not_found("No doctors found for this admin"));
    }
    Ok(Json(doctors))
}
