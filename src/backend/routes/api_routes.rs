/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Registration
 * - `POST /registeradmin`, `POST /registerdoctor`, `POST /registerpatient`
 *
 * ## Notifications
 * - `POST /add-notification`, `GET /notifications/{uhid}`, `PUT /mark-as-read`
 *
 * ## Patient updates
 * - `PUT /update-doctor`, `PUT /add-questionnaire`, `PUT /add-questionnaire-scores`,
 *   `PUT /update-surgery-schedule`, `PUT /update-post-surgery-details`,
 *   `PUT /update-questionnaire-status`, `PUT /patients/reset-password`
 *
 * ## Authentication
 * - `POST /google-login`, `POST /login`
 *
 * ## Listings and reports
 * - `GET /patients/by-admin/{admin_email}`, `GET /doctors/by-admin/{admin_email}`,
 *   `GET /patients/by-doctor/{doctor_email}`, `GET /questionnaire-scores-detail`
 */

use axum::routing::{get, post, put};
use axum::Router;

use crate::backend::server::state::AppState;
use crate::backend::{admins, auth, doctors, notifications, patients, reports};

/// Configure API routes
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Registration
        .route("/registeradmin", post(admins::register_admin))
        .route("/registerdoctor", post(doctors::register_doctor))
        .route("/registerpatient", post(patients::register_patient))
        // Notifications
        .route("/add-notification", post(notifications::add_notification))
        .route("/notifications/{uhid}", get(notifications::get_notifications))
        .route("/mark-as-read", put(notifications::mark_as_read))
        // Patient updates
        .route("/update-doctor", put(patients::update_doctor))
        .route("/add-questionnaire", put(patients::add_questionnaire))
        .route("/add-questionnaire-scores", put(patients::add_questionnaire_scores))
        .route("/update-surgery-schedule", put(patients::update_surgery_schedule))
        .route(
            "/update-post-surgery-details",
            put(patients::update_post_surgery_details),
        )
        .route(
            "/update-questionnaire-status",
            put(patients::update_questionnaire_status),
        )
        .route("/patients/reset-password", put(patients::reset_password))
        // Authentication
        .route("/google-login", post(auth::google_login))
        .route("/login", post(auth::login))
        // Listings and reports
        .route("/patients/by-admin/{admin_email}", get(patients::patients_by_admin))
        .route("/doctors/by-admin/{admin_email}", get(doctors::doctors_by_admin))
        .route("/patients/by-doctor/{doctor_email}", get(patients::patients_by_doctor))
        .route(
            "/questionnaire-scores-detail",
            get(reports::questionnaire_scores_detail),
        )
}
