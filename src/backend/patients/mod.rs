//! Patient Module
//!
//! Registration, listings and the targeted update endpoints for patients.
//!
//! - **`db`** - store operations
//! - **`handlers`** - registration and listings
//! - **`updates`** - doctor assignment, questionnaire history, surgery
//!   records and password reset

pub mod db;
pub mod handlers;
pub mod updates;

pub use handlers::{patients_by_admin, patients_by_doctor, register_patient};
pub use updates::{
    add_questionnaire, add_questionnaire_scores, reset_password, update_doctor,
    update_post_surgery_details, update_questionnaire_status, update_surgery_schedule,
};
