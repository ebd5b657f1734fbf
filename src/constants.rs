// ABOUTME: Web-layer constants for the Moreta server: defaults, cookie names, routes, flash text
// ABOUTME: Re-exports the domain constants from moreta-core alongside server-specific values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Constants Module
//!
//! Server defaults and user-visible strings. Domain limits and unit factors
//! live in `moreta_core::constants` and are re-exported here.

pub use moreta_core::constants::{dashboard, limits, units};

/// Service name used in logs
pub const SERVICE_NAME: &str = "moreta-fitness";

/// Defaults applied when an environment variable is unset
pub mod defaults {
    /// HTTP listen port
    pub const HTTP_PORT: u16 = 8000;
    /// Database connection string
    pub const DATABASE_URL: &str = "sqlite:./data/moreta.db";
    /// Session lifetime (two weeks)
    pub const SESSION_EXPIRY_HOURS: i64 = 336;
    /// Connections in the `SQLite` pool
    pub const DB_MAX_CONNECTIONS: u32 = 5;
    /// Lowest bcrypt work factor, used by tests and the test configuration
    pub const TEST_BCRYPT_COST: u32 = 4;
}

/// Cookie names and attributes
pub mod cookies {
    /// Signed session token
    pub const SESSION: &str = "auth_token";
    /// One-shot flash message
    pub const FLASH: &str = "flash";
}

/// Paths used for redirects
pub mod paths {
    /// Landing page
    pub const HOME: &str = "/";
    /// Login page
    pub const LOGIN: &str = "/login/";
    /// Client dashboard
    pub const DASHBOARD: &str = "/dashboard/";
    /// Profile page
    pub const PROFILE: &str = "/profile/";
    /// Assignment list
    pub const WORKOUTS: &str = "/workouts/";
    /// Progress list
    pub const PROGRESS: &str = "/progress/";
    /// Inbox and outbox
    pub const MESSAGES: &str = "/messages/";
    /// Coach workout catalog
    pub const COACH_WORKOUTS: &str = "/coach/workouts/";
    /// Coach assignment form
    pub const COACH_ASSIGNMENTS: &str = "/coach/assignments/";
    /// Coach nutrition form
    pub const COACH_NUTRITION: &str = "/coach/nutrition/";
}

/// Flash messages shown after successful writes
pub mod flash {
    /// After registration
    pub const REGISTERED: &str = "Registration successful! Please complete your profile.";
    /// After a profile save
    pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
    /// After marking a workout done
    pub const WORKOUT_COMPLETED: &str = "Workout marked as completed!";
    /// After logging progress
    pub const PROGRESS_LOGGED: &str = "Progress entry added successfully!";
    /// After sending a message
    pub const MESSAGE_SENT: &str = "Message sent successfully!";
    /// After logging in
    pub const LOGGED_IN: &str = "Welcome back!";
    /// After logging out
    pub const LOGGED_OUT: &str = "You have been logged out.";
    /// After creating a workout template
    pub const WORKOUT_CREATED: &str = "Workout created.";
    /// After assigning a workout
    pub const WORKOUT_ASSIGNED: &str = "Workout assigned.";
    /// After creating a nutrition plan
    pub const NUTRITION_CREATED: &str = "Nutrition plan created.";
}
