// ABOUTME: User management database operations
// ABOUTME: Handles registration with profile creation, lookups, login stamps and user pickers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::{db_error, is_unique_violation, parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{NewUser, User, UserSummary};

const USER_COLUMNS: &str = "id, username, email, first_name, last_name, password_hash, \
                            is_staff, is_active, date_joined, last_login";

impl Database {
    /// Create users table
    pub(super) async fn migrate_users(&self) -> AppResult<()> {
        self.execute_schema(
            r"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT NOT NULL UNIQUE COLLATE NOCASE,
                email TEXT NOT NULL UNIQUE COLLATE NOCASE,
                first_name TEXT NOT NULL DEFAULT '',
                last_name TEXT NOT NULL DEFAULT '',
                password_hash TEXT NOT NULL,
                is_staff BOOLEAN NOT NULL DEFAULT 0,
                is_active BOOLEAN NOT NULL DEFAULT 1,
                date_joined DATETIME NOT NULL,
                last_login DATETIME
            )
            ",
        )
        .await?;
        self.execute_schema("CREATE INDEX IF NOT EXISTS idx_users_is_active ON users(is_active)")
            .await
    }

    /// Create a user and their empty profile in one transaction
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if a field fails validation,
    /// `ResourceAlreadyExists` if the username or email is taken, or a
    /// database error
    pub async fn create_user(&self, new_user: &NewUser) -> AppResult<User> {
        new_user.validate()?;

        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username.trim().to_owned(),
            email: new_user.email.trim().to_owned(),
            first_name: new_user.first_name.trim().to_owned(),
            last_name: new_user.last_name.trim().to_owned(),
            password_hash: new_user.password_hash.clone(),
            is_staff: new_user.is_staff,
            is_active: true,
            date_joined: Utc::now(),
            last_login: None,
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_error("begin registration"))?;

        sqlx::query(
            r"
            INSERT INTO users (id, username, email, first_name, last_name, password_hash,
                               is_staff, is_active, date_joined, last_login)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, NULL)
            ",
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.password_hash)
        .bind(user.is_staff)
        .bind(user.is_active)
        .bind(user.date_joined)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::already_exists("A user with that username or email already exists.")
            } else {
                AppError::database(format!("Failed to create user: {e}"))
            }
        })?;

        sqlx::query(
            r"
            INSERT INTO client_profiles (user_id, created_at, updated_at)
            VALUES ($1, $2, $2)
            ",
        )
        .bind(user.id.to_string())
        .bind(user.date_joined)
        .execute(&mut *tx)
        .await
        .map_err(db_error("create profile"))?;

        tx.commit().await.map_err(db_error("commit registration"))?;
        Ok(user)
    }

    /// Get a user by ID
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user(&self, user_id: Uuid) -> AppResult<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(db_error("get user"))?;
        row.as_ref().map(row_to_user).transpose()
    }

    /// Get a user by username (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username.trim())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("get user by username"))?;
        row.as_ref().map(row_to_user).transpose()
    }

    /// Whether a username is already registered
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn username_taken(&self, username: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(username.trim())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("check username"))?;
        Ok(count > 0)
    }

    /// Whether an email is already registered
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn email_taken(&self, email: &str) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(email.trim())
            .fetch_one(&self.pool)
            .await
            .map_err(db_error("check email"))?;
        Ok(count > 0)
    }

    /// Stamp a successful login
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn record_login(&self, user_id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE users SET last_login = $2 WHERE id = $1")
            .bind(user_id.to_string())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(db_error("record login"))?;
        Ok(())
    }

    /// Active users, for the recipient picker
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_message_recipients(&self) -> AppResult<Vec<UserSummary>> {
        let rows =
            sqlx::query("SELECT id, username FROM users WHERE is_active = 1 ORDER BY username")
                .fetch_all(&self.pool)
                .await
                .map_err(db_error("list recipients"))?;
        rows.iter().map(row_to_summary).collect()
    }

    /// Active non-staff users, for the coach console pickers
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_clients(&self) -> AppResult<Vec<UserSummary>> {
        let rows = sqlx::query(
            "SELECT id, username FROM users WHERE is_active = 1 AND is_staff = 0 ORDER BY username",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list clients"))?;
        rows.iter().map(row_to_summary).collect()
    }

    /// Enable or disable login for a user
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist
    pub async fn set_user_active(&self, user_id: Uuid, active: bool) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET is_active = $2 WHERE id = $1")
            .bind(user_id.to_string())
            .bind(active)
            .execute(&self.pool)
            .await
            .map_err(db_error("update user"))?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User"));
        }
        Ok(())
    }

    /// Remove a user; their profile, assignments, progress, plans and messages cascade
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the user does not exist
    pub async fn delete_user(&self, user_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(db_error("delete user"))?;
        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User"));
        }
        Ok(())
    }
}

fn row_to_user(row: &SqliteRow) -> AppResult<User> {
    let id: String = row.get("id");
    let date_joined: DateTime<Utc> = row.get("date_joined");
    let last_login: Option<DateTime<Utc>> = row.get("last_login");
    Ok(User {
        id: parse_uuid(&id)?,
        username: row.get("username"),
        email: row.get("email"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        password_hash: row.get("password_hash"),
        is_staff: row.get("is_staff"),
        is_active: row.get("is_active"),
        date_joined,
        last_login,
    })
}

fn row_to_summary(row: &SqliteRow) -> AppResult<UserSummary> {
    let id: String = row.get("id");
    Ok(UserSummary {
        id: parse_uuid(&id)?,
        username: row.get("username"),
    })
}
