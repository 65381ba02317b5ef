//! Targeted Patient Updates
//!
//! Each handler resolves the patient by UHID first (404 when missing), applies
//! a single store update, and answers with a "modified" or "no changes"
//! message depending on the outcome. The questionnaire status update is the
//! exception: a request that modifies nothing is reported as not found.

use axum::{extract::State, Json};
use sqlx::SqlitePool;

use super::db;
use crate::backend::doctors;
use crate::backend::error::BackendError;
use crate::backend::outcome::MutationOutcome;
use crate::shared::requests::{
    DoctorAssignRequest, MessageResponse, PasswordResetRequest, PostSurgeryDetailsUpdateRequest,
    QuestionnaireAppendRequest, QuestionnaireScoreAppendRequest, QuestionnaireUpdateRequest,
    SurgeryScheduleUpdateRequest,
};

const NO_CHANGES: &str = "No changes made";

async fn require_patient(pool: &SqlitePool, uhid: &str, message: &str) -> Result<(), BackendError> {
    if db::exists_by_uhid(pool, uhid).await? {
        Ok(())
    } else {
        Err(BackendError::not_found(message))
    }
}

fn acknowledge(outcome: MutationOutcome, modified: &'static str, unchanged: &'static str) -> Json<MessageResponse> {
    Json(MessageResponse::new(outcome.message(modified, unchanged)))
}

/// PUT /update-doctor
pub async fn update_doctor(
    State(pool): State<SqlitePool>,
    Json(request): Json<DoctorAssignRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    require_patient(&pool, &request.uhid, "Invalid UHID").await?;

    let doctor = doctors::db::find_by_email(&pool, &request.doctor_assigned)
        .await?
        .ok_or_else(|| BackendError::not_found("Doctor not found"))?;

    let outcome = db::assign_doctor(&pool, &request.uhid, &doctor.email, &doctor.doctor_name).await?;
    tracing::info!("Doctor assignment for {}: {:?}", request.uhid, outcome);

    Ok(acknowledge(
        outcome,
        "Doctor updated successfully",
        "No update performed. Doctor might already be assigned to this value.",
    ))
}

/// PUT /add-questionnaire
pub async fn add_questionnaire(
    State(pool): State<SqlitePool>,
    Json(request): Json<QuestionnaireAppendRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    require_patient(&pool, &request.uhid, "Patient not found").await?;

    let outcome =
        db::append_questionnaires(&pool, &request.uhid, &request.questionnaire_assigned).await?;

    Ok(acknowledge(outcome, "Questionnaire(s) added successfully", NO_CHANGES))
}

/// PUT /add-questionnaire-scores
pub async fn add_questionnaire_scores(
    State(pool): State<SqlitePool>,
    Json(request): Json<QuestionnaireScoreAppendRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    require_patient(&pool, &request.uhid, "Patient not found").await?;

    let outcome = db::append_scores(&pool, &request.uhid, &request.questionnaire_scores).await?;

    Ok(acknowledge(outcome, "Score(s) added successfully", NO_CHANGES))
}

/// PUT /update-surgery-schedule
pub async fn update_surgery_schedule(
    State(pool): State<SqlitePool>,
    Json(request): Json<SurgeryScheduleUpdateRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    require_patient(&pool, &request.uhid, "Patient not found").await?;

    let outcome =
        db::replace_surgery_schedule(&pool, &request.uhid, &request.surgery_scheduled).await?;

    Ok(acknowledge(outcome, "Surgery schedule updated successfully", NO_CHANGES))
}

/// PUT /update-post-surgery-details
pub async fn update_post_surgery_details(
    State(pool): State<SqlitePool>,
    Json(request): Json<PostSurgeryDetailsUpdateRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    require_patient(&pool, &request.uhid, "Patient not found").await?;

    let outcome =
        db::replace_post_surgery_details(&pool, &request.uhid, &request.post_surgery_details)
            .await?;

    Ok(acknowledge(outcome, "Post-surgery details updated successfully", NO_CHANGES))
}

/// PUT /update-questionnaire-status
pub async fn update_questionnaire_status(
    State(pool): State<SqlitePool>,
    Json(request): Json<QuestionnaireUpdateRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    let outcome = db::update_questionnaire_status(
        &pool,
        &request.uhid,
        &request.name,
        &request.period,
        request.completed,
    )
    .await?;

    if !outcome.is_modified() {
        return Err(BackendError::not_found(
            "Questionnaire not found or already completed.",
        ));
    }

    Ok(Json(MessageResponse::new(
        "Questionnaire status updated successfully.",
    )))
}

/// PUT /patients/reset-password
pub async fn reset_password(
    State(pool): State<SqlitePool>,
    Json(request): Json<PasswordResetRequest>,
) -> Result<Json<MessageResponse>, BackendError> {
    request.validate()?;
    require_patient(&pool, &request.uhid, "Patient not found").await?;

    db::reset_password(&pool, &request.uhid, &request.new_password).await?;
    tracing::info!("Password reset for patient {}", request.uhid);

    Ok(Json(MessageResponse::new("Password updated successfully")))
}
