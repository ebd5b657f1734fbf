// ABOUTME: Registration form with password rules and uniqueness checks
// ABOUTME: Produces a NewUser only when every field and both password entries are acceptable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use serde::Deserialize;

use crate::constants::limits::PASSWORD_MIN_LEN;
use crate::database::Database;
use crate::errors::{AppResult, FieldErrors};
use crate::models::NewUser;

/// Raw registration submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RegistrationForm {
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Password
    pub password1: String,
    /// Password confirmation
    pub password2: String,
}

impl RegistrationForm {
    /// Check the password pair against the account's other fields
    #[must_use]
    pub fn password_errors(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();

        if self.password1.is_empty() {
            errors.add("password1", "This field is required.");
        } else {
            if self.password1.chars().count() < PASSWORD_MIN_LEN {
                errors.add(
                    "password1",
                    format!(
                        "This password is too short. \
                         It must contain at least {PASSWORD_MIN_LEN} characters."
                    ),
                );
            }
            if self.password1.chars().all(|c| c.is_ascii_digit()) {
                errors.add("password1", "This password is entirely numeric.");
            }
            let username = self.username.trim();
            if !username.is_empty() && self.password1.eq_ignore_ascii_case(username) {
                errors.add("password1", "The password is too similar to the username.");
            }
        }

        if self.password2.is_empty() {
            errors.add("password2", "This field is required.");
        } else if self.password1 != self.password2 {
            errors.add("password2", "The two password fields didn't match.");
        }

        errors
    }

    /// Everything except storage: identity fields and password rules
    #[must_use]
    pub fn field_errors(&self) -> FieldErrors {
        let mut errors = self
            .to_new_user(String::new())
            .validate()
            .err()
            .unwrap_or_default();
        errors.extend(self.password_errors());
        errors
    }

    /// Full validation including username and email availability
    ///
    /// # Errors
    ///
    /// Returns an error if the availability lookups fail
    pub async fn validate(&self, database: &Database) -> AppResult<FieldErrors> {
        let mut errors = self.field_errors();
        if !errors.has("username") && database.username_taken(&self.username).await? {
            errors.add("username", "A user with that username already exists.");
        }
        if !errors.has("email") && database.email_taken(&self.email).await? {
            errors.add("email", "A user with that email address already exists.");
        }
        Ok(errors)
    }

    /// The user to store once the password is hashed
    #[must_use]
    pub fn to_new_user(&self, password_hash: String) -> NewUser {
        NewUser {
            username: self.username.trim().to_owned(),
            email: self.email.trim().to_owned(),
            first_name: self.first_name.trim().to_owned(),
            last_name: self.last_name.trim().to_owned(),
            password_hash,
            is_staff: false,
        }
    }

    /// Blank the password fields before re-rendering
    #[must_use]
    pub fn without_passwords(mut self) -> Self {
        self.password1.clear();
        self.password2.clear();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            username: "client1".into(),
            email: "client1@example.com".into(),
            first_name: "Client".into(),
            last_name: "One".into(),
            password1: "s3cure-pass".into(),
            password2: "s3cure-pass".into(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(form().field_errors().is_empty());
    }

    #[test]
    fn test_password_rules() {
        let mut short = form();
        short.password1 = "abc".into();
        short.password2 = "abc".into();
        assert!(short.password_errors().get("password1")[0].contains("too short"));

        let mut numeric = form();
        numeric.password1 = "1234567890".into();
        numeric.password2 = "1234567890".into();
        assert_eq!(
            numeric.password_errors().get("password1"),
            ["This password is entirely numeric.".to_owned()]
        );

        let mut same_as_username = form();
        same_as_username.username = "longusername".into();
        same_as_username.password1 = "LongUsername".into();
        same_as_username.password2 = "LongUsername".into();
        assert!(same_as_username.password_errors().has("password1"));
    }

    #[test]
    fn test_password_mismatch() {
        let mut mismatch = form();
        mismatch.password2 = "different-pass".into();
        let errors = mismatch.field_errors();
        assert!(!errors.has("password1"));
        assert!(errors.has("password2"));
    }

    #[test]
    fn test_identity_fields_checked() {
        let mut bad = form();
        bad.username = "bad name!".into();
        bad.email = "not-an-email".into();
        bad.first_name = String::new();
        let errors = bad.field_errors();
        assert!(errors.has("username"));
        assert!(errors.has("email"));
        assert!(errors.has("first_name"));
        assert!(!errors.has("last_name"));
    }
}
