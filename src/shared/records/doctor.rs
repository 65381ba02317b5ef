//! Doctor records

use serde::{Deserialize, Serialize};

use crate::shared::error::{require, SharedError};

/// Stored doctor, immutable after registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id")]
    pub id: String,
    pub doctor_name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Email of the administrator who registered this doctor
    pub admin_created: String,
}

/// Doctor registration payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewDoctor {
    pub doctor_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub admin_created: String,
}

impl NewDoctor {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("doctor_name", &self.doctor_name)?;
        require("email", &self.email)?;
        require("password", &self.password)?;
        require("admin_created", &self.admin_created)
    }
}
