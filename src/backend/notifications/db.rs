//! Database operations for notifications
//!
//! A patient's notification document is the set of `notifications` rows
//! sharing its UHID, ordered by insertion. The document exists once the
//! first row does.

use chrono::Utc;
use sqlx::{FromRow, SqlitePool};
use uuid::Uuid;

use crate::backend::outcome::MutationOutcome;
use crate::shared::records::{NewNotification, NotificationDocument, NotificationEntry};

#[derive(Debug, FromRow)]
struct EntryRow {
    id: String,
    message: String,
    read: u8,
}

/// Append entries to a patient's document, creating it if needed
///
/// Every entry gets a fresh identifier. Returns the stored entries.
pub async fn append(
    pool: &SqlitePool,
    uhid: &str,
    notifications: &[NewNotification],
) -> Result<Vec<NotificationEntry>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut stored = Vec::with_capacity(notifications.len());

    for notification in notifications {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO notifications (id, uhid, message, read, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(uhid)
        .bind(&notification.message)
        .bind(notification.read)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        stored.push(NotificationEntry {
            id,
            message: notification.message.clone(),
            read: notification.read,
        });
    }

    tx.commit().await?;
    Ok(stored)
}

/// Get a patient's notification document
pub async fn find_document(
    pool: &SqlitePool,
    uhid: &str,
) -> Result<Option<NotificationDocument>, sqlx::Error> {
    let rows = sqlx::query_as::<_, EntryRow>(
        "SELECT id, message, read FROM notifications WHERE uhid = ? ORDER BY seq",
    )
    .bind(uhid)
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        return Ok(None);
    }

    Ok(Some(NotificationDocument {
        uhid: uhid.to_string(),
        notifications: rows
            .into_iter()
            .map(|row| NotificationEntry {
                id: row.id,
                message: row.message,
                read: row.read,
            })
            .collect(),
    }))
}

/// Whether a patient has a notification document
pub async fn has_document(pool: &SqlitePool, uhid: &str) -> Result<bool, sqlx::Error> {
    let found: i64 = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM notifications WHERE uhid = ?)")
        .bind(uhid)
        .fetch_one(pool)
        .await?;
    Ok(found != 0)
}

/// Mark the entry with this identifier as read
pub async fn mark_read_by_id(
    pool: &SqlitePool,
    uhid: &str,
    id: &str,
) -> Result<MutationOutcome, sqlx::Error> {
    let result = sqlx::query("UPDATE notifications SET read = 1 WHERE uhid = ? AND id = ? AND read <> 1")
        .bind(uhid)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
}

/// Mark the first entry whose text equals `message` as read
///
/// Only the first matching entry is considered; if it is already read the
/// outcome is `Unchanged` even when a later duplicate is unread.
pub async fn mark_read_by_message(
    pool: &SqlitePool,
    uhid: &str,
    message: &str,
) -> Result<MutationOutcome, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE notifications
        SET read = 1
        WHERE seq = (
            SELECT seq FROM notifications
            WHERE uhid = ? AND message = ?
            ORDER BY seq
            LIMIT 1
        )
        AND read <> 1
        "#,
    )
    .bind(uhid)
    .bind(message)
    .execute(pool)
    .await?;

    Ok(MutationOutcome::from_rows_affected(result.rows_affected()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::server::config::load_database;

    fn note(message: &str) -> NewNotification {
        NewNotification {
            message: message.to_string(),
            read: 0,
        }
    }

    #[tokio::test]
    async fn test_document_created_lazily_and_appended() {
        let pool = load_database("sqlite::memory:", 1).await.unwrap();
        assert!(find_document(&pool, "UH-1").await.unwrap().is_none());

        append(&pool, "UH-1", &[note("Fill OKS")]).await.unwrap();
        append(&pool, "UH-1", &[note("Clinic at 10")]).await.unwrap();

        let document = find_document(&pool, "UH-1").await.unwrap().unwrap();
        let messages: Vec<&str> = document
            .notifications
            .iter()
            .map(|n| n.message.as_str())
            .collect();
        assert_eq!(messages, vec!["Fill OKS", "Clinic at 10"]);
        assert!(has_document(&pool, "UH-1").await.unwrap());
    }

    #[tokio::test]
    async fn test_mark_read_by_message_only_once() {
        let pool = load_database("sqlite::memory:", 1).await.unwrap();
        append(&pool, "UH-1", &[note("Fill OKS")]).await.unwrap();

        assert_eq!(
            mark_read_by_message(&pool, "UH-1", "Fill OKS").await.unwrap(),
            MutationOutcome::Modified
        );
        assert_eq!(
            mark_read_by_message(&pool, "UH-1", "Fill OKS").await.unwrap(),
            MutationOutcome::Unchanged
        );
    }

    #[tokio::test]
    async fn test_mark_read_by_id_targets_duplicate_text() {
        let pool = load_database("sqlite::memory:", 1).await.unwrap();
        let stored = append(&pool, "UH-1", &[note("Reminder"), note("Reminder")])
            .await
            .unwrap();

        let outcome = mark_read_by_id(&pool, "UH-1", &stored[1].id).await.unwrap();
        assert!(outcome.is_modified());

        let document = find_document(&pool, "UH-1").await.unwrap().unwrap();
        let flags: Vec<u8> = document.notifications.iter().map(|n| n.read).collect();
        assert_eq!(flags, vec![0, 1]);
    }
}
