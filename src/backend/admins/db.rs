/**
 * Administrator Database Operations
 *
 * Administrators live in `admins`; the doctor and patient rosters live in
 * `admin_roster`, one row per registered email, and are hydrated onto the
 * record whenever it is read.
 */

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::shared::records::{Admin, NewAdmin};

/// Which roster list an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterKind {
    Doctor,
    Patient,
}

impl RosterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RosterKind::Doctor => "doctor",
            RosterKind::Patient => "patient",
        }
    }
}

#[derive(Debug, FromRow)]
struct AdminRow {
    id: String,
    admin_name: String,
    email: String,
    password: String,
    phone_number: Option<String>,
}

async fn roster(
    pool: &SqlitePool,
    admin_email: &str,
    kind: RosterKind,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT member_email
        FROM admin_roster
        WHERE admin_email = ? AND kind = ?
        ORDER BY seq
        "#,
    )
    .bind(admin_email)
    .bind(kind.as_str())
    .fetch_all(pool)
    .await
}

async fn hydrate(pool: &SqlitePool, row: AdminRow) -> Result<Admin, sqlx::Error> {
    let doctors_created = roster(pool, &row.email, RosterKind::Doctor).await?;
    let patients_created = roster(pool, &row.email, RosterKind::Patient).await?;

    Ok(Admin {
        id: row.id,
        admin_name: row.admin_name,
        email: row.email,
        password: row.password,
        phone_number: row.phone_number,
        doctors_created,
        patients_created,
    })
}

/// Get an administrator by email
pub async fn find_by_email(pool: &SqlitePool, email: &str) -> Result<Option<Admin>, sqlx::Error> {
    let row = sqlx::query_as::<_, AdminRow>(
        r#"
        SELECT id, admin_name, email, password, phone_number
        FROM admins
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(hydrate(pool, row).await?)),
        None => Ok(None),
    }
}

/// Get the earliest-registered administrator whose email or phone number
/// equals `identifier`
pub async fn find_by_identifier(
    pool: &SqlitePool,
    identifier: &str,
) -> Result<Option<Admin>, sqlx::Error> {
    let row = sqlx::query_as::<_, AdminRow>(
        r#"
        SELECT id, admin_name, email, password, phone_number
        FROM admins
        WHERE email = ?1 OR phone_number = ?1
        ORDER BY seq
        LIMIT 1
        "#,
    )
    .bind(identifier)
    .fetch_optional(pool)
    .await?;

    match row {
        Some(row) => Ok(Some(hydrate(pool, row).await?)),
        None => Ok(None),
    }
}

/// Insert an administrator together with any initial roster entries
///
/// Returns the generated record id.
pub async fn create_admin(pool: &SqlitePool, admin: &NewAdmin) -> Result<String, sqlx::Error> {
    let id = Uuid::new_v4().to_string();
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO admins (id, admin_name, email, password, phone_number, created_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(&admin.admin_name)
    .bind(&admin.email)
    .bind(&admin.password)
    .bind(&admin.phone_number)
    .bind(Utc::now())
    .execute(&mut *tx)
    .await?;

    let entries = admin
        .doctors_created
        .iter()
        .map(|email| (RosterKind::Doctor, email))
        .chain(
            admin
                .patients_created
                .iter()
                .map(|email| (RosterKind::Patient, email)),
        );

    for (kind, member_email) in entries {
        sqlx::query("INSERT INTO admin_roster (admin_email, kind, member_email) VALUES (?, ?, ?)")
            .bind(&admin.email)
            .bind(kind.as_str())
            .bind(member_email)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(id)
}

/// Append an email to an administrator's roster
pub async fn append_roster(
    pool: &SqlitePool,
    admin_email: &str,
    kind: RosterKind,
    member_email: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO admin_roster (admin_email, kind, member_email) VALUES (?, ?, ?)")
        .bind(admin_email)
        .bind(kind.as_str())
        .bind(member_email)
        .execute(pool)
        .await?;

    Ok(())
}
