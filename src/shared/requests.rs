/**
 * Request and Response Types
 *
 * Payloads accepted and returned by the HTTP endpoints. Record payloads
 * (registration bodies, stored records) live in `shared::records`; this
 * module holds the targeted-update requests and the small acknowledgement
 * bodies.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::{require, SharedError};
use crate::shared::records::{
    NewNotification, PostSurgeryDetails, QuestionnaireAssignment, QuestionnaireScore,
    SurgerySchedule,
};

/// Append notifications for a patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddNotificationRequest {
    pub uhid: String,
    pub notifications: Vec<NewNotification>,
}

/// Flip a notification's read flag
///
/// `id` targets one entry exactly. Without it, the first entry whose text
/// equals `message` is targeted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkReadRequest {
    pub uhid: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// (Re)assign a doctor to a patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorAssignRequest {
    pub uhid: String,
    pub doctor_assigned: String,
}

/// Append questionnaire assignments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireAppendRequest {
    pub uhid: String,
    pub questionnaire_assigned: Vec<QuestionnaireAssignment>,
}

/// Append questionnaire scores
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireScoreAppendRequest {
    pub uhid: String,
    pub questionnaire_scores: Vec<QuestionnaireScore>,
}

/// Replace the surgery schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurgeryScheduleUpdateRequest {
    pub uhid: String,
    pub surgery_scheduled: SurgerySchedule,
}

/// Replace the post-surgery details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSurgeryDetailsUpdateRequest {
    pub uhid: String,
    pub post_surgery_details: PostSurgeryDetails,
}

/// Set the completion flag of an assigned questionnaire
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionnaireUpdateRequest {
    pub uhid: String,
    pub name: String,
    pub period: String,
    pub completed: u8,
}

/// Replace a patient's password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordResetRequest {
    pub uhid: String,
    pub new_password: String,
}

impl PasswordResetRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require("uhid", &self.uhid)?;
        require("new_password", &self.new_password)
    }
}

/// Login vouched for by an external identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleLoginRequest {
    pub email: String,
    pub role: String,
}

/// Credential login
///
/// `identifier` may be an email, a UHID or a phone number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub role: String,
    pub identifier: String,
    pub password: String,
}

/// Plain acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Acknowledgement used by the notification endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminRegistered {
    pub message: String,
    pub admin_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRegistered {
    pub message: String,
    pub doctor_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRegistered {
    pub message: String,
    pub patient_id: String,
}
