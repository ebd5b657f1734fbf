// ABOUTME: Progress log database operations
// ABOUTME: Inserts dated entries with per-date uniqueness and lists them newest first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{db_error, is_unique_violation, Database};
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::models::{NewProgressEntry, ProgressEntry, DUPLICATE_DATE_MESSAGE};

const PROGRESS_COLUMNS: &str =
    "id, client_id, date, weight, body_fat_percentage, muscle_mass, notes, created_at";

impl Database {
    /// Create progress table
    pub(super) async fn migrate_progress(&self) -> AppResult<()> {
        self.execute_schema(
            r"
            CREATE TABLE IF NOT EXISTS progress (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                client_id INTEGER NOT NULL REFERENCES client_profiles(id) ON DELETE CASCADE,
                date DATE NOT NULL,
                weight REAL,
                body_fat_percentage REAL,
                muscle_mass REAL,
                notes TEXT NOT NULL DEFAULT '',
                created_at DATETIME NOT NULL,
                UNIQUE (client_id, date)
            )
            ",
        )
        .await
    }

    /// Log a progress entry for a client
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for out-of-range measurements, or on the `date`
    /// field when the client already has an entry for that date
    pub async fn create_progress(
        &self,
        client_id: i64,
        entry: &NewProgressEntry,
    ) -> AppResult<ProgressEntry> {
        entry.validate()?;
        let created_at = Utc::now();

        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO progress (client_id, date, weight, body_fat_percentage, muscle_mass,
                                  notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            ",
        )
        .bind(client_id)
        .bind(entry.date)
        .bind(entry.weight)
        .bind(entry.body_fat_percentage)
        .bind(entry.muscle_mass)
        .bind(&entry.notes)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                let mut errors = FieldErrors::new();
                errors.add("date", DUPLICATE_DATE_MESSAGE);
                AppError::from(errors)
            } else {
                AppError::database(format!("Failed to create progress entry: {e}"))
            }
        })?;

        Ok(ProgressEntry {
            id,
            client_id,
            date: entry.date,
            weight: entry.weight,
            body_fat_percentage: entry.body_fat_percentage,
            muscle_mass: entry.muscle_mass,
            notes: entry.notes.clone(),
            created_at,
        })
    }

    /// A client's entries, most recent date first, optionally limited
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_progress(
        &self,
        client_id: i64,
        limit: Option<usize>,
    ) -> AppResult<Vec<ProgressEntry>> {
        // SQLite treats a negative LIMIT as unbounded
        let limit = limit.map_or(-1, |n| i64::try_from(n).unwrap_or(i64::MAX));
        let rows = sqlx::query(&format!(
            "SELECT {PROGRESS_COLUMNS} FROM progress WHERE client_id = $1 \
             ORDER BY date DESC, id DESC LIMIT $2"
        ))
        .bind(client_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list progress"))?;
        Ok(rows.iter().map(row_to_progress).collect())
    }

    /// One entry, only if it belongs to `client_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_progress(
        &self,
        client_id: i64,
        entry_id: i64,
    ) -> AppResult<Option<ProgressEntry>> {
        let row = sqlx::query(&format!(
            "SELECT {PROGRESS_COLUMNS} FROM progress WHERE id = $1 AND client_id = $2"
        ))
        .bind(entry_id)
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("get progress entry"))?;
        Ok(row.as_ref().map(row_to_progress))
    }
}

fn row_to_progress(row: &SqliteRow) -> ProgressEntry {
    ProgressEntry {
        id: row.get("id"),
        client_id: row.get("client_id"),
        date: row.get("date"),
        weight: row.get("weight"),
        body_fat_percentage: row.get("body_fat_percentage"),
        muscle_mass: row.get("muscle_mass"),
        notes: row.get("notes"),
        created_at: row.get("created_at"),
    }
}
