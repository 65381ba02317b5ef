//! Administrator records

use serde::{Deserialize, Serialize};

use crate::shared::error::{require, SharedError};

/// Stored administrator
///
/// `doctors_created` and `patients_created` list the emails of the accounts
/// this administrator registered, in registration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    #[serde(rename = "_id")]
    pub id: String,
    pub admin_name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub doctors_created: Vec<String>,
    #[serde(default)]
    pub patients_created: Vec<String>,
}

/// Administrator registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAdmin {
    pub admin_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub doctors_created: Vec<String>,
    #[serde(default)]
    pub patients_created: Vec<String>,
}

impl NewAdmin {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("admin_name", &self.admin_name)?;
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_never_serialized() {
        let admin = Admin {
            id: "a1".to_string(),
            admin_name: "Ward Admin".to_string(),
            email: "admin@example.com".to_string(),
            password: "secret".to_string(),
            phone_number: None,
            doctors_created: vec!["doc@example.com".to_string()],
            patients_created: Vec::new(),
        };

        let json = serde_json::to_value(&admin).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["_id"], "a1");
        assert_eq!(json["doctors_created"][0], "doc@example.com");
    }

    #[test]
    fn test_registration_lists_default_to_empty() {
        let admin: NewAdmin = serde_json::from_value(serde_json::json!({
            "admin_name": "Ward Admin",
            "email": "admin@example.com",
            "password": "secret"
        }))
        .unwrap();

        assert!(admin.doctors_created.is_empty());
        assert!(admin.patients_created.is_empty());
        assert!(admin.validate().is_ok());
    }
}
