// ABOUTME: Coach console forms for workout templates, assignments and nutrition plans
// ABOUTME: Clients are picked by username and resolved to their profile before storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use serde::Deserialize;

use super::{required_choice, required_date, required_integer};
use crate::database::Database;
use crate::errors::{AppError, AppResult, FieldErrors};
use crate::models::{NewAssignment, NewNutritionPlan, NewWorkout, WorkoutType};

const INVALID_CHOICE: &str =
    "Select a valid choice. That choice is not one of the available choices.";

/// Profile id of an active, non-staff user, recording a field error otherwise
async fn resolve_client(
    database: &Database,
    errors: &mut FieldErrors,
    username: &str,
) -> AppResult<Option<i64>> {
    let username = username.trim();
    if username.is_empty() {
        errors.add("client", "This field is required.");
        return Ok(None);
    }
    match database.get_user_by_username(username).await? {
        Some(user) if user.is_active && !user.is_staff => {
            Ok(Some(database.ensure_profile(user.id).await?.id))
        }
        _ => {
            errors.add("client", INVALID_CHOICE);
            Ok(None)
        }
    }
}

/// Raw workout template submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkoutForm {
    /// Title
    pub title: String,
    /// Short description
    pub description: String,
    /// Category value
    pub workout_type: String,
    /// Duration in minutes
    pub duration_minutes: String,
    /// Difficulty from 1 to 10
    pub difficulty_level: String,
    /// Step-by-step instructions
    pub instructions: String,
    /// Optional video link
    pub video_url: String,
}

impl WorkoutForm {
    /// Parse and validate a template
    ///
    /// # Errors
    ///
    /// Returns every field error found
    pub fn parse(&self) -> Result<NewWorkout, FieldErrors> {
        let mut errors = FieldErrors::new();
        let workout_type: Option<WorkoutType> =
            required_choice(&mut errors, "workout_type", &self.workout_type);
        let duration_minutes =
            required_integer(&mut errors, "duration_minutes", &self.duration_minutes);
        let difficulty_level =
            required_integer(&mut errors, "difficulty_level", &self.difficulty_level);

        let workout = NewWorkout {
            title: self.title.trim().to_owned(),
            description: self.description.clone(),
            workout_type: workout_type.unwrap_or(WorkoutType::Strength),
            // Placeholders only reach validate when the real value already failed
            duration_minutes: duration_minutes.unwrap_or(1),
            difficulty_level: difficulty_level.unwrap_or(1),
            instructions: self.instructions.clone(),
            video_url: self.video_url.trim().to_owned(),
        };
        if let Err(field_errors) = workout.validate() {
            errors.extend(field_errors);
        }
        errors.into_result().map(|()| workout)
    }
}

/// Raw assignment submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssignmentForm {
    /// Client username
    pub client: String,
    /// Workout template id
    pub workout: String,
    /// Scheduled date, `YYYY-MM-DD`
    pub assigned_date: String,
    /// Notes for the client
    pub notes: String,
}

impl AssignmentForm {
    /// Resolve the client and workout and build the assignment
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` carrying field errors for an unknown client or
    /// workout or a bad date, or a database error
    pub async fn resolve(&self, database: &Database) -> AppResult<NewAssignment> {
        let mut errors = FieldErrors::new();
        let client_id = resolve_client(database, &mut errors, &self.client).await?;

        let workout = self.workout.trim();
        let workout_id = if workout.is_empty() {
            errors.add("workout", "This field is required.");
            None
        } else {
            let found = match workout.parse::<i64>() {
                Ok(id) => database.get_workout(id).await?.map(|w| w.id),
                Err(_) => None,
            };
            if found.is_none() {
                errors.add("workout", INVALID_CHOICE);
            }
            found
        };
        let assigned_date = required_date(&mut errors, "assigned_date", &self.assigned_date);

        match (client_id, workout_id, assigned_date) {
            (Some(client_id), Some(workout_id), Some(assigned_date)) if errors.is_empty() => {
                Ok(NewAssignment {
                    client_id,
                    workout_id,
                    assigned_date,
                    notes: self.notes.clone(),
                })
            }
            _ => Err(AppError::from(errors)),
        }
    }
}

/// Raw nutrition plan submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NutritionPlanForm {
    /// Client username
    pub client: String,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Daily calorie target
    pub daily_calories: String,
    /// Protein in grams
    pub protein_grams: String,
    /// Carbohydrates in grams
    pub carbs_grams: String,
    /// Fat in grams
    pub fat_grams: String,
    /// Meal plan text
    pub meal_plan: String,
}

impl NutritionPlanForm {
    /// Resolve the client and build the plan
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` carrying field errors, or a database error
    pub async fn resolve(&self, database: &Database) -> AppResult<NewNutritionPlan> {
        let mut errors = FieldErrors::new();
        let client_id = resolve_client(database, &mut errors, &self.client).await?;
        let daily_calories = required_integer(&mut errors, "daily_calories", &self.daily_calories);
        let protein_grams = required_integer(&mut errors, "protein_grams", &self.protein_grams);
        let carbs_grams = required_integer(&mut errors, "carbs_grams", &self.carbs_grams);
        let fat_grams = required_integer(&mut errors, "fat_grams", &self.fat_grams);

        let plan = NewNutritionPlan {
            client_id: client_id.unwrap_or_default(),
            title: self.title.trim().to_owned(),
            description: self.description.clone(),
            daily_calories: daily_calories.unwrap_or_default(),
            protein_grams: protein_grams.unwrap_or_default(),
            carbs_grams: carbs_grams.unwrap_or_default(),
            fat_grams: fat_grams.unwrap_or_default(),
            meal_plan: self.meal_plan.clone(),
        };
        if let Err(field_errors) = plan.validate() {
            errors.extend(field_errors);
        }
        errors.into_result()?;
        Ok(plan)
    }
}
