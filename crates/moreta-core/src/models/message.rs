// ABOUTME: Direct messages exchanged between users
// ABOUTME: Message record with read flag and NewMessage with subject/content checks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::checks::{max_len, required_text};
use crate::constants::limits::TITLE_MAX_LEN;
use crate::errors::FieldErrors;

/// A message with sender and recipient usernames resolved
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    /// Message ID
    pub id: i64,
    /// Sending user
    pub sender_id: Uuid,
    /// Sender username
    pub sender_username: String,
    /// Receiving user
    pub recipient_id: Uuid,
    /// Recipient username
    pub recipient_username: String,
    /// Subject line
    pub subject: String,
    /// Body
    pub content: String,
    /// Whether the recipient has opened it
    pub read: bool,
    /// Send time
    pub created_at: DateTime<Utc>,
}

/// A message about to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    /// Session user
    pub sender_id: Uuid,
    /// Chosen recipient
    pub recipient_id: Uuid,
    /// Subject line
    pub subject: String,
    /// Body
    pub content: String,
}

impl NewMessage {
    /// Check subject and content
    ///
    /// # Errors
    ///
    /// Returns field errors for a blank or overlong subject or blank content
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        required_text(&mut errors, "subject", &self.subject);
        max_len(&mut errors, "subject", &self.subject, TITLE_MAX_LEN);
        required_text(&mut errors, "content", &self.content);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_limit() {
        let message = NewMessage {
            sender_id: Uuid::new_v4(),
            recipient_id: Uuid::new_v4(),
            subject: "s".repeat(TITLE_MAX_LEN + 1),
            content: String::new(),
        };
        let errors = message.validate().unwrap_err();
        assert!(errors.has("subject"));
        assert!(errors.has("content"));
    }
}
