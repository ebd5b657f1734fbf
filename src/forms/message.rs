// ABOUTME: Compose-message form; the sender always comes from the session
// ABOUTME: Recipient is submitted as a user id and checked for existence by the storage layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use serde::Deserialize;
use uuid::Uuid;

use crate::database::INVALID_RECIPIENT_MESSAGE;
use crate::errors::FieldErrors;
use crate::models::NewMessage;

/// Raw compose submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MessageForm {
    /// Recipient user id
    pub recipient: String,
    /// Subject line
    pub subject: String,
    /// Body
    pub content: String,
}

impl MessageForm {
    /// Build the message for `sender_id`
    ///
    /// # Errors
    ///
    /// Returns field errors for a missing or malformed recipient and for
    /// subject or content problems
    pub fn parse(&self, sender_id: Uuid) -> Result<NewMessage, FieldErrors> {
        let mut errors = FieldErrors::new();
        let recipient = self.recipient.trim();
        let recipient_id = if recipient.is_empty() {
            errors.add("recipient", "This field is required.");
            None
        } else {
            Uuid::parse_str(recipient).map_or_else(
                |_| {
                    errors.add("recipient", INVALID_RECIPIENT_MESSAGE);
                    None
                },
                Some,
            )
        };

        let message = NewMessage {
            sender_id,
            recipient_id: recipient_id.unwrap_or_else(Uuid::nil),
            subject: self.subject.trim().to_owned(),
            content: self.content.clone(),
        };
        if let Err(field_errors) = message.validate() {
            errors.extend(field_errors);
        }
        errors.into_result().map(|()| message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_comes_from_caller() {
        let sender = Uuid::new_v4();
        let recipient = Uuid::new_v4();
        let form = MessageForm {
            recipient: recipient.to_string(),
            subject: "Form check".into(),
            content: "Can you look at my squat?".into(),
        };
        let message = form.parse(sender).unwrap();
        assert_eq!(message.sender_id, sender);
        assert_eq!(message.recipient_id, recipient);
    }

    #[test]
    fn test_missing_fields() {
        let errors = MessageForm::default().parse(Uuid::new_v4()).unwrap_err();
        assert!(errors.has("recipient"));
        assert!(errors.has("subject"));
        assert!(errors.has("content"));
    }

    #[test]
    fn test_bad_recipient_and_long_subject() {
        let form = MessageForm {
            recipient: "not-a-uuid".into(),
            subject: "x".repeat(201),
            content: "body".into(),
        };
        let errors = form.parse(Uuid::new_v4()).unwrap_err();
        assert_eq!(errors.get("recipient"), [INVALID_RECIPIENT_MESSAGE.to_owned()]);
        assert!(errors.has("subject"));
    }
}
