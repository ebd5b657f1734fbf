// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness
// ABOUTME: Account administration commands for moreta-cli
// ABOUTME: Coach creation, deactivation and deletion by username

use moreta_fitness::auth::hash_password;
use moreta_fitness::database::Database;
use moreta_fitness::errors::{AppError, AppResult};
use moreta_fitness::logging::AppLogger;
use moreta_fitness::models::{NewUser, User};
use tracing::info;

/// Fields for a new staff account
pub struct CoachAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

/// Create a staff account
pub async fn create_coach(
    database: &Database,
    account: CoachAccount,
    bcrypt_cost: u32,
) -> AppResult<User> {
    if database.username_taken(&account.username).await? {
        return Err(AppError::already_exists(format!(
            "User '{}' already exists",
            account.username
        )));
    }

    let password_hash = hash_password(&account.password, bcrypt_cost).await?;
    let user = database
        .create_user(&NewUser {
            username: account.username,
            email: account.email,
            first_name: account.first_name,
            last_name: account.last_name,
            password_hash,
            is_staff: true,
        })
        .await?;

    info!(user_id = %user.id, username = %user.username, "Coach account created");
    println!("Coach '{}' created ({})", user.username, user.id);
    Ok(user)
}

async fn find_user(database: &Database, username: &str) -> AppResult<User> {
    database
        .get_user_by_username(username)
        .await?
        .ok_or_else(|| AppError::not_found(format!("User '{username}'")))
}

/// Block a user from logging in; their data stays
pub async fn deactivate(database: &Database, username: &str) -> AppResult<()> {
    let user = find_user(database, username).await?;
    database.set_user_active(user.id, false).await?;
    AppLogger::log_security_event(
        "user_deactivated",
        &format!("{username} deactivated from CLI"),
        Some(&user.id.to_string()),
    );
    println!("User '{username}' deactivated");
    Ok(())
}

/// Delete a user; owned rows go with them
pub async fn delete(database: &Database, username: &str) -> AppResult<()> {
    let user = find_user(database, username).await?;
    database.delete_user(user.id).await?;
    AppLogger::log_security_event(
        "user_deleted",
        &format!("{username} deleted from CLI"),
        Some(&user.id.to_string()),
    );
    println!("User '{username}' deleted");
    Ok(())
}
