//! Shared Module
//!
//! Types and pure logic that do not depend on the server runtime: record
//! structures, request payloads, timestamp normalization, roles, validation
//! errors and the questionnaire scores report.

/// Record structures for administrators, doctors, patients and notifications
pub mod records;

/// Request and response payloads
pub mod requests;

/// Account roles
pub mod role;

/// Date/timestamp normalization
pub mod timestamp;

/// Questionnaire scores cross-tabulation
pub mod report;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use report::{FollowUpPeriod, QuestionnaireFamily, ScoresReport};
pub use role::Role;
