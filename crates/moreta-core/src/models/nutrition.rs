// ABOUTME: Coach-authored nutrition plans for clients
// ABOUTME: NutritionPlan record and NewNutritionPlan with macro and text validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::checks::{max_len, non_negative_int, required_text};
use crate::constants::limits::TITLE_MAX_LEN;
use crate::errors::FieldErrors;

/// A daily nutrition plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NutritionPlan {
    /// Plan ID
    pub id: i64,
    /// Client profile
    pub client_id: i64,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Daily calorie target
    pub daily_calories: i32,
    /// Protein in grams
    pub protein_grams: i32,
    /// Carbohydrates in grams
    pub carbs_grams: i32,
    /// Fat in grams
    pub fat_grams: i32,
    /// Meal plan text
    pub meal_plan: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Fields for a new nutrition plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNutritionPlan {
    /// Client profile
    pub client_id: i64,
    /// Title
    pub title: String,
    /// Description
    pub description: String,
    /// Daily calorie target
    pub daily_calories: i32,
    /// Protein in grams
    pub protein_grams: i32,
    /// Carbohydrates in grams
    pub carbs_grams: i32,
    /// Fat in grams
    pub fat_grams: i32,
    /// Meal plan text
    pub meal_plan: String,
}

impl NewNutritionPlan {
    /// Check required text and non-negative targets
    ///
    /// # Errors
    ///
    /// Returns field errors for blank text, an overlong title or negative numbers
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        required_text(&mut errors, "title", &self.title);
        max_len(&mut errors, "title", &self.title, TITLE_MAX_LEN);
        required_text(&mut errors, "description", &self.description);
        required_text(&mut errors, "meal_plan", &self.meal_plan);
        non_negative_int(&mut errors, "daily_calories", self.daily_calories);
        non_negative_int(&mut errors, "protein_grams", self.protein_grams);
        non_negative_int(&mut errors, "carbs_grams", self.carbs_grams);
        non_negative_int(&mut errors, "fat_grams", self.fat_grams);
        errors.into_result()
    }
}
