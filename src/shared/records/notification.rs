//! Notification documents
//!
//! One document per patient UHID holding an ordered list of entries. Every
//! entry gets a generated identifier so it can be acknowledged without
//! relying on its text.

use serde::{Deserialize, Serialize};

/// A single notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationEntry {
    pub id: String,
    pub message: String,
    /// 0 = unread, 1 = read
    pub read: u8,
}

/// All notifications for one patient, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationDocument {
    pub uhid: String,
    pub notifications: Vec<NotificationEntry>,
}

/// Notification as submitted by a client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewNotification {
    pub message: String,
    #[serde(default)]
    pub read: u8,
}
