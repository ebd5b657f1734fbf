// ABOUTME: User account models for session authentication
// ABOUTME: User, NewUser, and UserSummary definitions with registration field rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::checks::{max_len, required_text};
use crate::constants::limits::{NAME_MAX_LEN, USERNAME_MAX_LEN};
use crate::errors::FieldErrors;

/// A login identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique user ID
    pub id: Uuid,
    /// Login name, unique
    pub username: String,
    /// Email address, unique
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// bcrypt hash of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Coaches are staff and can use the coach console
    pub is_staff: bool,
    /// Inactive users cannot log in
    pub is_active: bool,
    /// Account creation time
    pub date_joined: DateTime<Utc>,
    /// Last successful login
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Name shown in navigation and message lists
    #[must_use]
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_owned()
        }
    }
}

/// Data needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Already-hashed password
    pub password_hash: String,
    /// Staff flag
    pub is_staff: bool,
}

impl NewUser {
    /// Check identity fields (password rules are checked before hashing)
    ///
    /// # Errors
    ///
    /// Returns the field errors when a field is missing, too long or malformed
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        required_text(&mut errors, "username", &self.username);
        max_len(&mut errors, "username", &self.username, USERNAME_MAX_LEN);
        if !self.username.is_empty() && !is_valid_username(&self.username) {
            errors.add(
                "username",
                "Enter a valid username. This value may contain only letters, \
                 numbers, and @/./+/-/_ characters.",
            );
        }

        required_text(&mut errors, "email", &self.email);
        if !self.email.trim().is_empty() && !is_valid_email(&self.email) {
            errors.add("email", "Enter a valid email address.");
        }

        required_text(&mut errors, "first_name", &self.first_name);
        max_len(&mut errors, "first_name", &self.first_name, NAME_MAX_LEN);
        required_text(&mut errors, "last_name", &self.last_name);
        max_len(&mut errors, "last_name", &self.last_name, NAME_MAX_LEN);

        errors.into_result()
    }
}

/// Minimal user reference used in pickers and message lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserSummary {
    /// User ID
    pub id: Uuid,
    /// Login name
    pub username: String,
}

/// Letters, digits and `@ . + - _`
#[must_use]
pub fn is_valid_username(username: &str) -> bool {
    username
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '@' | '.' | '+' | '-' | '_'))
}

/// Structural email check: one `@`, non-empty local part, dotted domain
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str, email: &str) -> NewUser {
        NewUser {
            username: username.to_owned(),
            email: email.to_owned(),
            first_name: "Ana".to_owned(),
            last_name: "Lima".to_owned(),
            password_hash: "hash".to_owned(),
            is_staff: false,
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(new_user("ana.lima+1", "ana@example.com").validate().is_ok());
    }

    #[test]
    fn test_username_charset() {
        let errors = new_user("ana lima", "ana@example.com")
            .validate()
            .unwrap_err();
        assert!(errors.has("username"));
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("coach@moreta.fit"));
        assert!(!is_valid_email("coach@localhost"));
        assert!(!is_valid_email("coach.moreta.fit"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_names_are_required() {
        let mut user = new_user("ana", "ana@example.com");
        user.first_name = String::new();
        user.last_name = "x".repeat(31);
        let errors = user.validate().unwrap_err();
        assert!(errors.has("first_name"));
        assert!(errors.has("last_name"));
    }
}
