// ABOUTME: Workout catalog and assignment database operations
// ABOUTME: Template CRUD, per-client assignment lists, one-way completion, and completion counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::{NaiveDate, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{db_error, is_unique_violation, Database};
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::models::{AssignedWorkout, ClientWorkout, NewAssignment, NewWorkout, Workout};

/// Shown when the same workout is assigned twice to a client on one date
pub const DUPLICATE_ASSIGNMENT_MESSAGE: &str =
    "Client workout with this Client, Workout and Assigned date already exists.";

const ASSIGNMENT_SELECT: &str = r"
    SELECT cw.id, cw.client_id, cw.workout_id, cw.assigned_date, cw.completed,
           cw.completed_date, cw.notes,
           w.title, w.description, w.workout_type, w.duration_minutes,
           w.difficulty_level, w.instructions, w.video_url, w.created_at
    FROM client_workouts cw
    JOIN workouts w ON w.id = cw.workout_id
";

impl Database {
    /// Create workouts and `client_workouts` tables
    pub(super) async fn migrate_workouts(&self) -> AppResult<()> {
        self.execute_schema(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                workout_type TEXT NOT NULL
                    CHECK (workout_type IN ('strength', 'cardio', 'flexibility', 'hiit', 'yoga')),
                duration_minutes INTEGER NOT NULL CHECK (duration_minutes > 0),
                difficulty_level INTEGER NOT NULL CHECK (difficulty_level BETWEEN 1 AND 10),
                instructions TEXT NOT NULL,
                video_url TEXT NOT NULL DEFAULT '',
                created_at DATETIME NOT NULL
            )
            ",
        )
        .await?;

        self.execute_schema(
            r"
            CREATE TABLE IF NOT EXISTS client_workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                client_id INTEGER NOT NULL REFERENCES client_profiles(id) ON DELETE CASCADE,
                workout_id INTEGER NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                assigned_date DATE NOT NULL,
                completed BOOLEAN NOT NULL DEFAULT 0,
                completed_date DATETIME,
                notes TEXT NOT NULL DEFAULT '',
                UNIQUE (client_id, workout_id, assigned_date)
            )
            ",
        )
        .await?;

        self.execute_schema(
            "CREATE INDEX IF NOT EXISTS idx_client_workouts_client_date \
             ON client_workouts(client_id, assigned_date)",
        )
        .await
    }

    /// Add a workout template to the catalog
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the template fails validation
    pub async fn create_workout(&self, workout: &NewWorkout) -> AppResult<Workout> {
        workout.validate()?;
        let created_at = Utc::now();
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO workouts (title, description, workout_type, duration_minutes,
                                  difficulty_level, instructions, video_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            ",
        )
        .bind(workout.title.trim())
        .bind(&workout.description)
        .bind(workout.workout_type.as_str())
        .bind(workout.duration_minutes)
        .bind(workout.difficulty_level)
        .bind(&workout.instructions)
        .bind(workout.video_url.trim())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create workout"))?;

        self.get_workout(id)
            .await?
            .ok_or_else(|| AppError::not_found("Workout"))
    }

    /// Get a workout template
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_workout(&self, workout_id: i64) -> AppResult<Option<Workout>> {
        let row = sqlx::query(
            r"
            SELECT id, title, description, workout_type, duration_minutes, difficulty_level,
                   instructions, video_url, created_at
            FROM workouts WHERE id = $1
            ",
        )
        .bind(workout_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("get workout"))?;
        row.as_ref().map(row_to_workout).transpose()
    }

    /// Every workout template, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(
            r"
            SELECT id, title, description, workout_type, duration_minutes, difficulty_level,
                   instructions, video_url, created_at
            FROM workouts ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list workouts"))?;
        rows.iter().map(row_to_workout).collect()
    }

    /// Assign a workout to a client on a date
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` on the `assigned_date` field when the same
    /// workout is already assigned to the client on that date
    pub async fn assign_workout(&self, assignment: &NewAssignment) -> AppResult<ClientWorkout> {
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO client_workouts (client_id, workout_id, assigned_date, notes)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            ",
        )
        .bind(assignment.client_id)
        .bind(assignment.workout_id)
        .bind(assignment.assigned_date)
        .bind(&assignment.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                let mut errors = FieldErrors::new();
                errors.add("assigned_date", DUPLICATE_ASSIGNMENT_MESSAGE);
                AppError::from(errors)
            } else {
                AppError::database(format!("Failed to assign workout: {e}"))
            }
        })?;

        Ok(ClientWorkout {
            id,
            client_id: assignment.client_id,
            workout_id: assignment.workout_id,
            assigned_date: assignment.assigned_date,
            completed: false,
            completed_date: None,
            notes: assignment.notes.clone(),
        })
    }

    /// A client's assignments, most recent assigned date first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_assignments(&self, client_id: i64) -> AppResult<Vec<AssignedWorkout>> {
        let rows = sqlx::query(&format!(
            "{ASSIGNMENT_SELECT} WHERE cw.client_id = $1 ORDER BY cw.assigned_date DESC, cw.id DESC"
        ))
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list assignments"))?;
        rows.iter().map(row_to_assigned).collect()
    }

    /// A client's assignments scheduled for exactly `date`
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn assignments_on(
        &self,
        client_id: i64,
        date: NaiveDate,
    ) -> AppResult<Vec<AssignedWorkout>> {
        let rows = sqlx::query(&format!(
            "{ASSIGNMENT_SELECT} WHERE cw.client_id = $1 AND cw.assigned_date = $2 ORDER BY cw.id"
        ))
        .bind(client_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list today's assignments"))?;
        rows.iter().map(row_to_assigned).collect()
    }

    /// One assignment, only if it belongs to `client_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn get_assignment(
        &self,
        client_id: i64,
        assignment_id: i64,
    ) -> AppResult<Option<AssignedWorkout>> {
        let row = sqlx::query(&format!(
            "{ASSIGNMENT_SELECT} WHERE cw.id = $1 AND cw.client_id = $2"
        ))
        .bind(assignment_id)
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("get assignment"))?;
        row.as_ref().map(row_to_assigned).transpose()
    }

    /// Mark an owned assignment completed
    ///
    /// Returns `true` when this call completed it and `false` when it was
    /// already completed; the first completion time is kept.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the assignment is not the client's
    pub async fn complete_assignment(&self, client_id: i64, assignment_id: i64) -> AppResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE client_workouts SET completed = 1, completed_date = $3
            WHERE id = $1 AND client_id = $2 AND completed = 0
            ",
        )
        .bind(assignment_id)
        .bind(client_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(db_error("complete assignment"))?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        match self.get_assignment(client_id, assignment_id).await? {
            Some(_) => Ok(false),
            None => Err(AppError::not_found("Workout")),
        }
    }

    /// Total and completed assignment counts for a client
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn assignment_counts(&self, client_id: i64) -> AppResult<(u32, u32)> {
        let row = sqlx::query(
            r"
            SELECT COUNT(*) AS total,
                   COALESCE(SUM(CASE WHEN completed THEN 1 ELSE 0 END), 0) AS completed
            FROM client_workouts WHERE client_id = $1
            ",
        )
        .bind(client_id)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("count assignments"))?;
        let total: i64 = row.get("total");
        let completed: i64 = row.get("completed");
        Ok((
            u32::try_from(total).unwrap_or(u32::MAX),
            u32::try_from(completed).unwrap_or(u32::MAX),
        ))
    }
}

fn row_to_workout(row: &SqliteRow) -> AppResult<Workout> {
    let workout_type: String = row.get("workout_type");
    Ok(Workout {
        id: row.get("id"),
        title: row.get("title"),
        description: row.get("description"),
        workout_type: workout_type.parse()?,
        duration_minutes: row.get("duration_minutes"),
        difficulty_level: row.get("difficulty_level"),
        instructions: row.get("instructions"),
        video_url: row.get("video_url"),
        created_at: row.get("created_at"),
    })
}

fn row_to_assigned(row: &SqliteRow) -> AppResult<AssignedWorkout> {
    let workout_type: String = row.get("workout_type");
    let workout_id: i64 = row.get("workout_id");
    Ok(AssignedWorkout {
        assignment: ClientWorkout {
            id: row.get("id"),
            client_id: row.get("client_id"),
            workout_id,
            assigned_date: row.get("assigned_date"),
            completed: row.get("completed"),
            completed_date: row.get("completed_date"),
            notes: row.get("notes"),
        },
        workout: Workout {
            id: workout_id,
            title: row.get("title"),
            description: row.get("description"),
            workout_type: workout_type.parse()?,
            duration_minutes: row.get("duration_minutes"),
            difficulty_level: row.get("difficulty_level"),
            instructions: row.get("instructions"),
            video_url: row.get("video_url"),
            created_at: row.get("created_at"),
        },
    })
}
