// ABOUTME: Client profile database operations
// ABOUTME: Ensure-exists upsert, lookups by user or profile, and validated profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use super::{db_error, parse_uuid, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{ClientProfile, ProfileUpdate};

const PROFILE_COLUMNS: &str = "id, user_id, phone, current_weight, target_weight, height_feet, \
     height_inches, age, experience_level, fitness_goals, medical_conditions, \
     dietary_restrictions, created_at, updated_at";

impl Database {
    /// Create `client_profiles` table
    pub(super) async fn migrate_profiles(&self) -> AppResult<()> {
        self.execute_schema(
            r"
            CREATE TABLE IF NOT EXISTS client_profiles (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id TEXT NOT NULL UNIQUE REFERENCES users(id) ON DELETE CASCADE,
                phone TEXT NOT NULL DEFAULT '',
                current_weight REAL,
                target_weight REAL,
                height_feet INTEGER CHECK (height_feet IS NULL OR height_feet BETWEEN 3 AND 8),
                height_inches INTEGER
                    CHECK (height_inches IS NULL OR height_inches BETWEEN 0 AND 11),
                age INTEGER,
                experience_level TEXT NOT NULL DEFAULT 'beginner'
                    CHECK (experience_level IN ('beginner', 'intermediate', 'advanced')),
                fitness_goals TEXT NOT NULL DEFAULT 'general_fitness'
                    CHECK (fitness_goals IN ('weight_loss', 'muscle_gain', 'strength',
                                             'endurance', 'general_fitness')),
                medical_conditions TEXT NOT NULL DEFAULT '',
                dietary_restrictions TEXT NOT NULL DEFAULT '',
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL
            )
            ",
        )
        .await
    }

    /// Get the user's profile, creating an empty one if it is missing
    ///
    /// # Errors
    ///
    /// Returns an error if the user does not exist or the query fails
    pub async fn ensure_profile(&self, user_id: Uuid) -> AppResult<ClientProfile> {
        let now = Utc::now();
        sqlx::query(
            r"
            INSERT INTO client_profiles (user_id, created_at, updated_at)
            VALUES ($1, $2, $2)
            ON CONFLICT(user_id) DO NOTHING
            ",
        )
        .bind(user_id.to_string())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(db_error("create profile"))?;

        self.get_profile(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Profile"))
    }

    /// Get the user's profile if it exists
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_profile(&self, user_id: Uuid) -> AppResult<Option<ClientProfile>> {
        let row = sqlx::query(&format!(
            "SELECT {PROFILE_COLUMNS} FROM client_profiles WHERE user_id = $1"
        ))
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("get profile"))?;
        row.as_ref().map(row_to_profile).transpose()
    }

    /// Replace the editable profile fields after validating them
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` with field errors when the update is out of
    /// range, in which case nothing is written
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        update: &ProfileUpdate,
    ) -> AppResult<ClientProfile> {
        update.validate()?;
        self.ensure_profile(user_id).await?;

        sqlx::query(
            r"
            UPDATE client_profiles SET
                phone = $2,
                current_weight = $3,
                target_weight = $4,
                height_feet = $5,
                height_inches = $6,
                age = $7,
                experience_level = $8,
                fitness_goals = $9,
                medical_conditions = $10,
                dietary_restrictions = $11,
                updated_at = $12
            WHERE user_id = $1
            ",
        )
        .bind(user_id.to_string())
        .bind(update.phone.trim())
        .bind(update.current_weight)
        .bind(update.target_weight)
        .bind(update.height_feet)
        .bind(update.height_inches)
        .bind(update.age)
        .bind(update.experience_level.as_str())
        .bind(update.fitness_goals.as_str())
        .bind(&update.medical_conditions)
        .bind(&update.dietary_restrictions)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(db_error("update profile"))?;

        self.ensure_profile(user_id).await
    }
}

fn row_to_profile(row: &SqliteRow) -> AppResult<ClientProfile> {
    let user_id: String = row.get("user_id");
    let experience_level: String = row.get("experience_level");
    let fitness_goals: String = row.get("fitness_goals");
    Ok(ClientProfile {
        id: row.get("id"),
        user_id: parse_uuid(&user_id)?,
        phone: row.get("phone"),
        current_weight: row.get("current_weight"),
        target_weight: row.get("target_weight"),
        height_feet: row.get("height_feet"),
        height_inches: row.get("height_inches"),
        age: row.get("age"),
        experience_level: experience_level.parse()?,
        fitness_goals: fitness_goals.parse()?,
        medical_conditions: row.get("medical_conditions"),
        dietary_restrictions: row.get("dietary_restrictions"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    })
}
