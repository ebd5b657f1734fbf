// ABOUTME: Direct message database operations
// ABOUTME: Sending to active recipients, inbox/outbox listing, read-once flag and unread counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::{db_error, parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{Message, NewMessage};

/// Shown when the chosen recipient is unknown or inactive
pub const INVALID_RECIPIENT_MESSAGE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

const MESSAGE_SELECT: &str = r"
    SELECT m.id, m.sender_id, s.username AS sender_username,
           m.recipient_id, r.username AS recipient_username,
           m.subject, m.content, m.read, m.created_at
    FROM messages m
    JOIN users s ON s.id = m.sender_id
    JOIN users r ON r.id = m.recipient_id
";

impl Database {
    /// Create messages table
    pub(super) async fn migrate_messages(&self) -> AppResult<()> {
        self.execute_schema(
            r"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                sender_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                recipient_id TEXT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                subject TEXT NOT NULL,
                content TEXT NOT NULL,
                read BOOLEAN NOT NULL DEFAULT 0,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .await?;
        self.execute_schema(
            "CREATE INDEX IF NOT EXISTS idx_messages_recipient ON messages(recipient_id, read)",
        )
        .await?;
        self.execute_schema("CREATE INDEX IF NOT EXISTS idx_messages_sender ON messages(sender_id)")
            .await
    }

    /// Send a message to an active user
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the subject or content is invalid or the
    /// recipient is not an active user
    pub async fn send_message(&self, message: &NewMessage) -> AppResult<Message> {
        let mut errors = message.validate().err().unwrap_or_default();
        let recipient_active = self
            .get_user(message.recipient_id)
            .await?
            .is_some_and(|user| user.is_active);
        if !recipient_active {
            errors.add("recipient", INVALID_RECIPIENT_MESSAGE);
        }
        errors.into_result()?;

        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO messages (sender_id, recipient_id, subject, content, read, created_at)
            VALUES ($1, $2, $3, $4, 0, $5)
            RETURNING id
            ",
        )
        .bind(message.sender_id.to_string())
        .bind(message.recipient_id.to_string())
        .bind(message.subject.trim())
        .bind(&message.content)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("send message"))?;

        self.get_message_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Message"))
    }

    async fn get_message_by_id(&self, message_id: i64) -> AppResult<Option<Message>> {
        let row = sqlx::query(&format!("{MESSAGE_SELECT} WHERE m.id = $1"))
            .bind(message_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("get message"))?;
        row.as_ref().map(row_to_message).transpose()
    }

    /// Messages received by a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_received_messages(&self, user_id: Uuid) -> AppResult<Vec<Message>> {
        self.list_messages_where("m.recipient_id", user_id).await
    }

    /// Messages sent by a user, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_sent_messages(&self, user_id: Uuid) -> AppResult<Vec<Message>> {
        self.list_messages_where("m.sender_id", user_id).await
    }

    async fn list_messages_where(&self, column: &str, user_id: Uuid) -> AppResult<Vec<Message>> {
        let rows = sqlx::query(&format!(
            "{MESSAGE_SELECT} WHERE {column} = $1 ORDER BY m.created_at DESC, m.id DESC"
        ))
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list messages"))?;
        rows.iter().map(row_to_message).collect()
    }

    /// A message, only if `user_id` is its recipient
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_received_message(
        &self,
        user_id: Uuid,
        message_id: i64,
    ) -> AppResult<Option<Message>> {
        let row = sqlx::query(&format!(
            "{MESSAGE_SELECT} WHERE m.id = $1 AND m.recipient_id = $2"
        ))
        .bind(message_id)
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("get message"))?;
        row.as_ref().map(row_to_message).transpose()
    }

    /// Flip the read flag on a received message
    ///
    /// Returns `true` only on the unread-to-read transition.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn mark_message_read(&self, user_id: Uuid, message_id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            "UPDATE messages SET read = 1 WHERE id = $1 AND recipient_id = $2 AND read = 0",
        )
        .bind(message_id)
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(db_error("mark message read"))?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of unread messages addressed to a user
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn unread_message_count(&self, user_id: Uuid) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE recipient_id = $1 AND read = 0")
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("count unread messages"))
    }
}

fn row_to_message(row: &SqliteRow) -> AppResult<Message> {
    let sender_id: String = row.get("sender_id");
    let recipient_id: String = row.get("recipient_id");
    Ok(Message {
        id: row.get("id"),
        sender_id: parse_uuid(&sender_id)?,
        sender_username: row.get("sender_username"),
        recipient_id: parse_uuid(&recipient_id)?,
        recipient_username: row.get("recipient_username"),
        subject: row.get("subject"),
        content: row.get("content"),
        read: row.get("read"),
        created_at: row.get("created_at"),
    })
}
