/**
 * Account Lookup
 *
 * Maps a `Role` onto the repository holding that kind of account. Each role
 * has its own set of identifier columns for credential login:
 *
 * - admin, doctor: email, phone number
 * - patient: email, UHID, phone number
 */

use serde::Serialize;
use sqlx::SqlitePool;

use crate::backend::{admins, doctors, patients};
use crate::shared::records::{Admin, Doctor, Patient};
use crate::shared::Role;

/// An account of any role
///
/// Serializes as the bare record, so the password is never included.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Account {
    Admin(Admin),
    Doctor(Doctor),
    Patient(Patient),
}

impl Account {
    pub fn role(&self) -> Role {
        match self {
            Account::Admin(_) => Role::Admin,
            Account::Doctor(_) => Role::Doctor,
            Account::Patient(_) => Role::Patient,
        }
    }

    /// Stored password, compared verbatim on credential login
    pub fn password(&self) -> &str {
        match self {
            Account::Admin(admin) => &admin.password,
            Account::Doctor(doctor) => &doctor.password,
            Account::Patient(patient) => &patient.password,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Account::Admin(admin) => &admin.email,
            Account::Doctor(doctor) => &doctor.email,
            Account::Patient(patient) => &patient.email,
        }
    }
}

/// Look up an account of the given role by email
pub async fn find_by_email(
    pool: &SqlitePool,
    role: Role,
    email: &str,
) -> Result<Option<Account>, sqlx::Error> {
    Ok(match role {
        Role::Admin => admins::db::find_by_email(pool, email).await?.map(Account::Admin),
        Role::Doctor => doctors::db::find_by_email(pool, email).await?.map(Account::Doctor),
        Role::Patient => patients::db::find_by_email(pool, email).await?.map(Account::Patient),
    })
}

/// Look up an account of the given role by any of its identifier columns
pub async fn find_by_identifier(
    pool: &SqlitePool,
    role: Role,
    identifier: &str,
) -> Result<Option<Account>, sqlx::Error> {
    Ok(match role {
        Role::Admin => admins::db::find_by_identifier(pool, identifier)
            .await?
            .map(Account::Admin),
        Role::Doctor => doctors::db::find_by_identifier(pool, identifier)
            .await?
            .map(Account::Doctor),
        Role::Patient => patients::db::find_by_identifier(pool, identifier)
            .await?
            .map(Account::Patient),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_serializes_without_password() {
        let account = Account::Doctor(Doctor {
            id: "d1".to_string(),
            doctor_name: "Dr. Rao".to_string(),
            email: "doc@example.com".to_string(),
            password: "secret".to_string(),
            phone_number: None,
            admin_created: "admin@example.com".to_string(),
        });

        let json = serde_json::to_value(&account).unwrap();
        assert_eq!(json["email"], "doc@example.com");
        assert!(json.get("password").is_none());
        assert_eq!(account.role(), Role::Doctor);
        assert_eq!(account.password(), "secret");
    }
}
