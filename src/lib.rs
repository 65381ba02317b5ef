//! PROMCare - Patient-Reported Outcome Backend
//!
//! A patient-management service for orthopaedic follow-up: administrators
//! register doctors and patients, patients are assigned outcome
//! questionnaires and report scores over a fixed set of follow-up periods,
//! and staff receive a cross-tabulated scores report.
//!
//! # Module Structure
//!
//! - **`shared`** - Types and pure logic with no server runtime dependency
//!   - Record structures and request payloads
//!   - Timestamp normalization and roles
//!   - The questionnaire scores report
//!   - Validation errors
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server over a SQLite record store
//!   - Registration, targeted updates, login, listings
//!   - WebSocket relay
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - enables the backend module and the server binary

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
