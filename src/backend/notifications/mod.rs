//! Notification Module
//!
//! Per-patient notification documents: append, read back, and acknowledge.

pub mod db;
pub mod handlers;

pub use handlers::{add_notification, get_notifications, mark_as_read};
