//! Record Types
//!
//! Data structures for the four record kinds the service stores:
//! administrators, doctors, patients and per-patient notifications.
//!
//! Each kind has a stored form (`Admin`, `Doctor`, `Patient`, ...) carrying an
//! opaque `_id`, and a registration form (`NewAdmin`, ...) accepted from
//! clients. Passwords deserialize but never serialize, so a record can be
//! returned to a client as-is.

/// Administrator records
pub mod admin;

/// Doctor records
pub mod doctor;

/// Patient records and their nested clinical data
pub mod patient;

/// Questionnaire assignments and scores
pub mod questionnaire;

/// Notification documents
pub mod notification;

pub use admin::{Admin, NewAdmin};
pub use doctor::{Doctor, NewDoctor};
pub use notification::{NewNotification, NotificationDocument, NotificationEntry};
pub use patient::{NewPatient, Patient, PostSurgeryDetails, SurgerySchedule};
pub use questionnaire::{QuestionnaireAssignment, QuestionnaireScore};
