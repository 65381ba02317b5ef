/**
 * Patient Database Operations
 *
 * A patient is stored across three tables: the `patients` row (scalar fields
 * plus the surgery records as JSON documents), and the ordered child tables
 * `questionnaire_assignments` and `questionnaire_scores`, both keyed by UHID.
 *
 * # Change detection
 *
 * Targeted updates carry their own "would this change anything" predicate in
 * the WHERE clause, so `rows_affected` tells the handler whether the request
 * modified stored state.
 */

use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use sqlx::types::Json;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::backend::outcome::MutationOutcome;
use crate::shared::records::{
    NewPatient, Patient, PostSurgeryDetails, QuestionnaireAssignment, QuestionnaireScore,
    SurgerySchedule,
};

macro_rules! select_patients {
    ($filter:literal) => {
        concat!(
            "SELECT id, uhid, name, email, password, phone_number, admin_assigned, admin_name, ",
            "doctor_assigned, doctor_name, surgery_scheduled, post_surgery_details ",
            "FROM patients ",
            $filter
        )
    };
}

#[derive(Debug, FromRow)]
struct PatientRow {
    id: String,
    uhid: String,
    name: String,
    email: String,
    password: String,
    phone_number: Option<String>,
    admin_assigned: String,
    admin_name: String,
    doctor_assigned: Option<String>,
    doctor_name: Option<String>,
    surgery_scheduled: Option<Json<SurgerySchedule>>,
    post_surgery_details: Option<Json<PostSurgeryDetails>>,
}

#[derive(Debug, FromRow)]
struct ScoreRow {
    uhid: String,
    name: String,
    score: f64,
    period: String,
    scored_at: NaiveDateTime,
}

impl From<ScoreRow> for QuestionnaireScore {
    fn from(row: ScoreRow) -> Self {
        QuestionnaireScore {
            name: row.name,
            score: row.score,
            period: row.period,
            timestamp: row.scored_at,
        }
    }
}

async fn assignments_for(
    pool: &SqlitePool,
    uhid: &str,
) -> Result<Vec<QuestionnaireAssignment>, sqlx::Error> {
    let rows = sqlx::query_as::<_, (String, String, u8)>(
        "SELECT name, period, completed FROM questionnaire_assignments WHERE uhid = ? ORDER BY seq",
    )
    .bind(uhid)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(name, period, completed)| QuestionnaireAssignment {
            name,
            period,
            completed,
        })
        .collect())
}

async fn scores_for(pool: &SqlitePool, uhid: &str) -> Result<Vec<QuestionnaireScore>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ScoreRow>(
        "SELECT uhid, name, score, period, scored_at FROM questionnaire_scores WHERE uhid = ? ORDER BY seq",
    )
    .bind(uhid)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(QuestionnaireScore::from).collect())
}

async fn hydrate(pool: &SqlitePool, row: PatientRow) -> Result<Patient, sqlx::Error> {
    let questionnaire_assigned = assignments_for(pool, &row.uhid).await?;
    let questionnaire_scores = scores_for(pool, &row.uhid).await?;

    Ok(Patient {
        id: row.id,
        uhid: row.uhid,
        name: row.name,
        email: row.email,
        password: row.password,
        phone_number: row.phone_number,
        admin_assigned: row.admin_assigned,
        admin_name: row.admin_name,
        doctor_assigned: row.doctor_assigned,
        doctor_name: row.doctor_name,
        questionnaire_assigned,
        questionnaire_scores,
        surgery_scheduled: row.surgery_scheduled.map(|Json(schedule)| schedule),
        post_surgery_details: row.post_surgery_details.map(|Json(details)| details),
    })
}

async fn hydrate_all(pool: &SqlitePool, rows: Vec<PatientRow>) -> Result<Vec<Patient>, sqlx::Error> {
    let mut patients = Vec::with_capacity(rows.len());
    for row in rows {
        patients.push(hydrate(pool, row).await?);
    }
    Ok(patients)
}

/// Get a patient by UHID
pub async fn find_by_uhid(pool: &SqlitePool, uhid: &str) -> Result<Option<Patient>, sqlx::Error> {
    let row = sqlx::query_as::<_, PatientRow>(select_patients!("WHERE uhid = ?"))
        .bind(uhid)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(hydrate(pool, row).await?)),
        None => Ok(None),
    }
}

/// Get a patient by email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Patient>, sqlx::Error> {
    let row = sqlx::query_as::<_, PatientRow>(select_patients!("WHERE email = ?"))
        .bind(email)
        .fetch_optional(pool)
        .await?;

    match row {
        Some(row) => Ok(Some(hydrate(pool, row).await?)),
        None => Ok(None),
    }
}

/// Whether a patient with this UHID exists
pub async fn exists_by_uhid(pool: &SqlitePool, uhid: &str) -> Result<bool, sqlx::Error> {
    let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM patients WHERE uhid = ?)")
        .bind(uhid)
        .fetch_one(pool)
        .await?;
    Ok(found != 0)
}

/// Whether either natural key is already taken
pub async fn exists_by_email_or_uhid(
    pool: &SqlitePool,
    email: &str,
    uhid: &str,
) -> Result<bool, sqlx::Error> {
    let found: i64 =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM patients WHERE email = ? OR uhid = ?)")
            .bind(email)
            .bind(uhid)
            .fetch_one(pool)
            .await?;
    Ok(found != 0)
}

/// Get the earliest-registered patient whose email, UHID or phone number
/// equals `identifier`
pub async fn find_by_identifier(
    pool: &SqlitePool,
    identifier: &str,
) -> Result<Option<Patient>, sqlx::Error> {
    let row = sqlx::query_as::<_, PatientRow>(select_patients!(
        "WHERE email = ?1 OR uhid = ?1 OR phone_number = ?1 ORDER BY seq LIMIT 1"
    ))
    .bind(identifier)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(hydrate(pool, row).await?)),
        None => Ok(None),
    }
}

/// Patients assigned to an administrator, in registration order
pub async fn list_by_admin(pool: &SqlitePool, admin_email: &str) -> Result<Vec<Patient>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PatientRow>(select_patients!(
        "WHERE admin_assigned = ? ORDER BY seq"
    ))
    .bind(admin_email)
    .fetch_all(pool)
    .await?;

    hydrate_all(pool, rows).await
}

/// Patients assigned to a doctor, in registration order
pub async fn list_by_doctor(
    pool: &SqlitePool,
    doctor_email: &str,
) -> Result<Vec<Patient>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PatientRow>(select_patients!(
        "WHERE doctor_assigned = ? ORDER BY seq"
    ))
    .bind(doctor_email)
    .fetch_all(pool)
    .await?;

    hydrate_all(pool, rows).await
}

/// Insert a patient with its initial questionnaire history
///
/// `admin_name` and `doctor_name` are the denormalized display names of the
/// referenced records. Returns the generated record id.
pub async fn create_patient(
    pool: &SqlitePool,
    patient: &NewPatient,
    admin_name: &str,
    doctor_name: Option<&str>,
) -> Result<String, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO patients (
            id, uhid, name, email, password, phone_number, admin_assigned, admin_name,
            doctor_assigned, doctor_name, surgery_scheduled, post_surgery_details, created_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&patient.uhid)
    .bind(&patient.name)
    .bind(&patient.email)
    .bind(&patient.password)
    .bind(&patient.phone_number)
    .bind(&patient.admin_assigned)
    .bind(admin_name)
    .bind(&patient.doctor_assigned)
    .bind(doctor_name)
    .bind(patient.surgery_scheduled.as_ref().map(Json))
    .bind(patient.post_surgery_details.as_ref().map(Json))
    .bind(Utc::now())
    .execute(&mut *tx)
    .await?;

    for assignment in &patient.questionnaire_assigned {
        sqlx::query(
            "INSERT INTO questionnaire_assignments (uhid, name, period, completed) VALUES (?, ?, ?, ?)",
        )
        .bind(&patient.uhid)
        .bind(&assignment.name)
        .bind(&assignment.period)
        .bind(assignment.completed)
        .execute(&mut *tx)
        .await?;
    }

    for score in &patient.questionnaire_scores {
        sqlx::query(
            "INSERT INTO questionnaire_scores (uhid, name, score, period, scored_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&patient.uhid)
        .bind(&score.name)
        .bind(score.score)
        .bind(&score.period)
        .bind(score.timestamp)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(id)
}

/// Point a patient at a doctor
pub async fn assign_doctor(
    pool: &SqlitePool,
    uhid: &str,
    doctor_email: &str,
    doctor_name: &str,
) -> Result<MutationOutcome, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE patients
        SET doctor_assigned = ?1, doctor_name = ?2
        WHERE uhid = ?3 AND (doctor_assigned IS NOT ?1 OR doctor_name IS NOT ?2)
        "#,
    )
    .bind(doctor_email)
    .bind(doctor_name)
    .bind(uhid)
    .execute(pool)
    .await?;

    Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
}

/// Append questionnaire assignments; duplicates are kept
pub async fn append_questionnaires(
    pool: &SqlitePool,
    uhid: &str,
    assignments: &[QuestionnaireAssignment],
) -> Result<MutationOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for assignment in assignments {
        inserted += sqlx::query(
            "INSERT INTO questionnaire_assignments (uhid, name, period, completed) VALUES (?, ?, ?, ?)",
        )
        .bind(uhid)
        .bind(&assignment.name)
        .bind(&assignment.period)
        .bind(assignment.completed)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    Ok(MutationOutcome::from_rows_affected(inserted))
}

/// Append questionnaire scores; duplicates are kept
pub async fn append_scores(
    pool: &SqlitePool,
    uhid: &str,
    scores: &[QuestionnaireScore],
) -> Result<MutationOutcome, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for score in scores {
        inserted += sqlx::query(
            "INSERT INTO questionnaire_scores (uhid, name, score, period, scored_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(uhid)
        .bind(&score.name)
        .bind(score.score)
        .bind(&score.period)
        .bind(score.timestamp)
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }

    tx.commit().await?;
    Ok(MutationOutcome::from_rows_affected(inserted))
}

/// Replace the surgery schedule document
pub async fn replace_surgery_schedule(
    pool: &SqlitePool,
    uhid: &str,
    schedule: &SurgerySchedule,
) -> Result<MutationOutcome, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE patients SET surgery_scheduled = ?1 WHERE uhid = ?2 AND surgery_scheduled IS NOT ?1",
    )
    .bind(Json(schedule))
    .bind(uhid)
    .execute(pool)
    .await?;

    Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
}

/// Replace the post-surgery details document
pub async fn replace_post_surgery_details(
    pool: &SqlitePool,
    uhid: &str,
    details: &PostSurgeryDetails,
) -> Result<MutationOutcome, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE patients SET post_surgery_details = ?1 WHERE uhid = ?2 AND post_surgery_details IS NOT ?1",
    )
    .bind(Json(details))
    .bind(uhid)
    .execute(pool)
    .await?;

    Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
}

/// Set the completion flag on the first assignment matching `(name, period)`
pub async fn update_questionnaire_status(
    pool: &SqlitePool,
    uhid: &str,
    name: &str,
    period: &str,
    completed: u8,
) -> Result<MutationOutcome, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE questionnaire_assignments
        SET completed = ?1
        WHERE seq = (
            SELECT seq FROM questionnaire_assignments
            WHERE uhid = ?2 AND name = ?3 AND period = ?4
            ORDER BY seq
            LIMIT 1
        )
        AND completed <> ?1
        "#,
    )
    .bind(completed)
    .bind(uhid)
    .bind(name)
    .bind(period)
    .execute(pool)
    .await?;

    Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
}

pub async fn reset_password(
    pool: &SqlitePool,
    uhid: &str,
    new_password: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE patients SET password = ? WHERE uhid = ?")
        .bind(new_password)
        .bind(uhid)
        .execute(pool)
        .await?;

    Ok(())
}

/// Every patient's score list, in patient registration order
pub async fn load_score_sheets(pool: &SqlitePool) -> Result<Vec<Vec<QuestionnaireScore>>, sqlx::Error> {
    let uhids: Vec<String> = sqlx::query_scalar("SELECT uhid FROM patients ORDER BY seq")
        .fetch_all(pool)
        .await?;

    let rows = sqlx::query_as::<_, ScoreRow>(
        "SELECT uhid, name, score, period, scored_at FROM questionnaire_scores ORDER BY seq",
    )
    .fetch_all(pool)
    .await?;

    let mut by_patient: HashMap<String, Vec<QuestionnaireScore>> = HashMap::new();
    for row in rows {
        by_patient.entry(row.uhid.clone()).or_default().push(row.into());
    }

    Ok(uhids
        .into_iter()
        .map(|uhid| by_patient.remove(&uhid).unwrap_or_default())
        .collect())
}
