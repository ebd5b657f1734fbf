// ABOUTME: SQLite storage for users, profiles, workouts, progress, nutrition plans and messages
// ABOUTME: Owns the connection pool, schema creation, and shared error mapping for queries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Database Management
//!
//! One `Database` handle wraps the `sqlx` pool. Each entity's queries live in
//! their own file as an `impl Database` block together with that entity's
//! schema. Every lookup of client-owned rows takes the owning profile (or user)
//! as a parameter and filters on it in SQL, so a row belonging to someone else
//! is indistinguishable from a missing one.

mod messages;
mod nutrition;
mod profiles;
mod progress;
mod users;
mod workouts;

pub use messages::INVALID_RECIPIENT_MESSAGE;
pub use workouts::DUPLICATE_ASSIGNMENT_MESSAGE;

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};

/// Database manager for all application data
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open (creating if needed) the configured database and apply the schema
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created, the connection fails,
    /// or the schema cannot be applied
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        if let DatabaseUrl::SQLite { path } = &config.url {
            ensure_parent_dir(path).await?;
        }

        let options = SqliteConnectOptions::from_str(&config.url.to_connection_string())
            .map_err(|e| AppError::config(format!("Invalid DATABASE_URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database lives only as long as its single connection
        let pool_options = if config.url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to connect: {e}")).with_source(e))?;

        let db = Self { pool };
        db.migrate().await?;
        info!(database = %config.url, "Database ready");
        Ok(db)
    }

    /// Fresh in-memory database with the schema applied
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be applied
    pub async fn in_memory() -> AppResult<Self> {
        Self::connect(&DatabaseConfig {
            url: DatabaseUrl::Memory,
            max_connections: 1,
        })
        .await
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if any table or index cannot be created
    pub async fn migrate(&self) -> AppResult<()> {
        // Order follows foreign-key dependencies
        self.migrate_users().await?;
        self.migrate_profiles().await?;
        self.migrate_workouts().await?;
        self.migrate_progress().await?;
        self.migrate_nutrition().await?;
        self.migrate_messages().await?;
        debug!("Schema up to date");
        Ok(())
    }

    /// Run a schema statement
    async fn execute_schema(&self, statement: &str) -> AppResult<()> {
        sqlx::query(statement)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Schema migration failed: {e}")))?;
        Ok(())
    }
}

async fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| {
                AppError::config(format!(
                    "Cannot create database directory {}: {e}",
                    parent.display()
                ))
            }),
        _ => Ok(()),
    }
}

/// Whether a query failed on a UNIQUE constraint
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    error
        .as_database_error()
        .is_some_and(|db_error| db_error.is_unique_violation())
}

/// Wrap a query failure with what was being attempted
pub(crate) fn db_error(action: &'static str) -> impl Fn(sqlx::Error) -> AppError {
    move |e| AppError::database(format!("Failed to {action}: {e}"))
}

/// Map a UUID stored as TEXT back into a `Uuid`
pub(crate) fn parse_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| AppError::database(format!("Corrupt user id {value}: {e}")))
}
