//! Patient records
//!
//! A patient carries its care team (administrator and doctor, by email with a
//! denormalized display name), its questionnaire history, and the surgery
//! records. Dates inside the surgery records are normalized to timestamps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::shared::error::{require, SharedError};
use crate::shared::records::questionnaire::{QuestionnaireAssignment, QuestionnaireScore};
use crate::shared::timestamp::midnight_option;

/// Planned surgery slot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurgerySchedule {
    #[serde(default, with = "midnight_option")]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub time: Option<String>,
}

/// What actually happened in theatre
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSurgeryDetails {
    #[serde(default, with = "midnight_option")]
    pub date_of_surgery: Option<NaiveDateTime>,
    #[serde(default)]
    pub surgeon: Option<String>,
    #[serde(default)]
    pub procedure: Option<String>,
    #[serde(default)]
    pub implant: Option<String>,
    #[serde(default)]
    pub technology: Option<String>,
}

/// Stored patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    #[serde(rename = "_id")]
    pub id: String,
    pub uhid: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub admin_assigned: String,
    pub admin_name: String,
    #[serde(default)]
    pub doctor_assigned: Option<String>,
    #[serde(default)]
    pub doctor_name: Option<String>,
    #[serde(default)]
    pub questionnaire_assigned: Vec<QuestionnaireAssignment>,
    #[serde(default)]
    pub questionnaire_scores: Vec<QuestionnaireScore>,
    #[serde(default)]
    pub surgery_scheduled: Option<SurgerySchedule>,
    #[serde(default)]
    pub post_surgery_details: Option<PostSurgeryDetails>,
}

/// Patient registration payload
///
/// `admin_name` and `doctor_name` are filled in by the server from the
/// referenced records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPatient {
    pub uhid: String,
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    pub admin_assigned: String,
    #[serde(default)]
    pub doctor_assigned: Option<String>,
    #[serde(default)]
    pub questionnaire_assigned: Vec<QuestionnaireAssignment>,
    #[serde(default)]
    pub questionnaire_scores: Vec<QuestionnaireScore>,
    #[serde(default)]
    pub surgery_scheduled: Option<SurgerySchedule>,
    #[serde(default)]
    pub post_surgery_details: Option<PostSurgeryDetails>,
}

impl NewPatient {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("uhid", &self.uhid)?;
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("password", &self.password)?;
        require("admin_assigned", &self.admin_assigned)
    }
}
