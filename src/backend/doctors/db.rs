//! Database operations for doctors

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::shared::records::{Doctor, NewDoctor};

fn doctor_from_row(row: sqlx::sqlite::SqliteRow) -> Doctor {
    Doctor {
        id: row.get("id"),
        doctor_name: row.get("doctor_name"),
        email: row.get("email"),
        password: row.get("password"),
        phone_number: row.get("phone_number"),
        admin_created: row.get("admin_created"),
    }
}

/// Get a doctor by email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Doctor>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, doctor_name, email, password, phone_number, admin_created
        FROM doctors
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(doctor_from_row))
}

/// Get the earliest-registered doctor whose email or phone number equals
/// `identifier`
pub async fn find_by_identifier(
    pool: &SqlitePool,
    identifier: &str,
) -> Result<Option<Doctor>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, doctor_name, email, password, phone_number, admin_created
        FROM doctors
        WHERE email = ?1 OR phone_number = ?1
        ORDER BY seq
        LIMIT 1
        "#,
    )
    .bind(identifier)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(doctor_from_row))
}

/// Create a doctor, returning the generated record id
pub async fn create_doctor(pool: &SqlitePool, doctor: &NewDoctor) -> Result<String, sqlx::Error> {
    let id = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO doctors (id, doctor_name, email, password, phone_number, admin_created, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&doctor.doctor_name)
    .bind(&doctor.email)
    .bind(&doctor.password)
    .bind(&doctor.phone_number)
    .bind(&doctor.admin_created)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(id)
}

/// All doctors registered by an administrator, in registration order
pub async fn list_by_admin(pool: &SqlitePool, admin_email: &str) -> Result<Vec<Doctor>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, doctor_name, email, password, phone_number, admin_created
        FROM doctors
        WHERE admin_created = ?
        ORDER BY seq
        "#,
    )
    .bind(admin_email)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(doctor_from_row).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::load_database;

    fn new_doctor(email: &str, admin: &str) -> NewDoctor {
        NewDoctor {
            doctor_name: "Dr. Rao".to_string(),
            email: email.to_string(),
            password: "pw".to_string(),
            phone_number: None,
            admin_created: admin.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_by_admin_keeps_registration_order() {
        let pool = load_database("sqlite::memory:", 1).await.unwrap();
        create_doctor(&pool, &new_doctor("b@example.com", "admin@example.com")).await.unwrap();
        create_doctor(&pool, &new_doctor("x@example.com", "other@example.com")).await.unwrap();
        create_doctor(&pool, &new_doctor("a@example.com", "admin@example.com")).await.unwrap();

        let emails: Vec<String> = list_by_admin(&pool, "admin@example.com")
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.email)
            .collect();
        assert_eq!(emails, vec!["b@example.com", "a@example.com"]);
    }

    #[tokio::test]
    async fn test_find_missing_doctor() {
        let pool = load_database("sqlite::memory:", 1).await.unwrap();
        assert!(find_by_email(&pool, "nobody@example.com").await.unwrap().is_none());
    }
}
