// ABOUTME: Field-level validation error collection for form handling
// ABOUTME: Ordered map of field name to messages that converts into an InvalidInput AppError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Key used for errors that do not belong to a single field
pub const NON_FIELD: &str = "__all__";

/// Validation messages keyed by form field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Create an empty error set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_owned())
            .or_default()
            .push(message.into());
    }

    /// Record a message that is not tied to one field
    pub fn add_non_field(&mut self, message: impl Into<String>) {
        self.add(NON_FIELD, message);
    }

    /// Messages recorded for a field
    #[must_use]
    pub fn get(&self, field: &str) -> &[String] {
        self.errors.get(field).map_or(&[], Vec::as_slice)
    }

    /// Whether a field has any messages
    #[must_use]
    pub fn has(&self, field: &str) -> bool {
        !self.get(field).is_empty()
    }

    /// True when nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Merge another error set into this one
    pub fn extend(&mut self, other: Self) {
        for (field, messages) in other.errors {
            self.errors.entry(field).or_default().extend(messages);
        }
    }

    /// Iterate over fields and their messages
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }

    /// One-line summary used as the `AppError` message
    #[must_use]
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(field, messages)| format!("{field}: {}", messages.join(" ")))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// `Ok(())` when empty, otherwise the collected errors
    ///
    /// # Errors
    ///
    /// Returns `self` when at least one message was recorded
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_messages_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("subject", "This field is required.");
        errors.add("subject", "Ensure this value has at most 200 characters.");
        errors.add_non_field("Something else went wrong.");

        assert_eq!(errors.get("subject").len(), 2);
        assert!(errors.has(NON_FIELD));
        assert!(!errors.has("content"));
        assert!(errors.summary().starts_with("__all__"));
    }

    #[test]
    fn test_into_result() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.add("date", "Progress with this Client and Date already exists.");
        assert!(errors.into_result().is_err());
    }
}
