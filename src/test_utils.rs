// ABOUTME: Test utilities for creating User structs and other test data in a consistent way
// ABOUTME: Centralizes test data creation to avoid duplication and ensure consistency across tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::Utc;
use uuid::Uuid;

use crate::models::{NewUser, User};

/// Create a test client user with default values
#[must_use]
pub fn create_test_user(username: &str) -> User {
    User {
        id: Uuid::new_v4(),
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        first_name: "Test".to_owned(),
        last_name: "Client".to_owned(),
        password_hash: "test_password_hash".to_owned(),
        is_staff: false,
        is_active: true,
        date_joined: Utc::now(),
        last_login: None,
    }
}

/// Create a test coach (staff) user with default values
#[must_use]
pub fn create_test_coach(username: &str) -> User {
    User {
        is_staff: true,
        last_name: "Coach".to_owned(),
        ..create_test_user(username)
    }
}

/// Registration payload for inserting a test user
#[must_use]
pub fn new_test_user(username: &str, is_staff: bool) -> NewUser {
    NewUser {
        username: username.to_owned(),
        email: format!("{username}@example.com"),
        first_name: "Test".to_owned(),
        last_name: "User".to_owned(),
        password_hash: "test_password_hash".to_owned(),
        is_staff,
    }
}
