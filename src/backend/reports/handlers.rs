//! Report HTTP Handlers

use axum::{extract::State, Json};
use sqlx::SqlitePool;

use crate::backend::error::BackendError;
use crate::backend::patients;
use crate::shared::ScoresReport;

/// GET /questionnaire-scores-detail
///
/// Cross-tabulates every patient's scores by questionnaire family and
/// follow-up period. Each cell lists one comma-joined string per patient.
pub async fn questionnaire_scores_detail(
    State(pool): State<SqlitePool>,
) -> Result<Json<ScoresReport>, BackendError> {
    let sheets = patients::db::load_score_sheets(&pool).await?;
    let report = ScoresReport::from_sheets(sheets.iter().map(Vec::as_slice));

    tracing::info!("Scores report built for {} patient(s)", report.patient_count());

    Ok(Json(report))
}
