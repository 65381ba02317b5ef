//! Reports Module
//!
//! Read-only aggregate views over stored patient data.

pub mod handlers;

pub use handlers::questionnaire_scores_detail;
