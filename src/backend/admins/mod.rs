//! Administrator Module
//!
//! Administrators register doctors and patients. Each administrator keeps a
//! roster of the emails it registered, appended as registrations happen.

pub mod db;
pub mod handlers;

pub use db::RosterKind;
pub use handlers::register_admin;
