// ABOUTME: Nutrition plan database operations
// ABOUTME: Coach-side creation and client-side newest-first listing of plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use super::{db_error, Database};
use crate::errors::AppResult;
use crate::models::{NewNutritionPlan, NutritionPlan};

const PLAN_COLUMNS: &str = "id, client_id, title, description, daily_calories, protein_grams, \
                            carbs_grams, fat_grams, meal_plan, created_at";

impl Database {
    /// Create `nutrition_plans` table
    pub(super) async fn migrate_nutrition(&self) -> AppResult<()> {
        self.execute_schema(
            r"
            CREATE TABLE IF NOT EXISTS nutrition_plans (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                client_id INTEGER NOT NULL REFERENCES client_profiles(id) ON DELETE CASCADE,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                daily_calories INTEGER NOT NULL CHECK (daily_calories >= 0),
                protein_grams INTEGER NOT NULL CHECK (protein_grams >= 0),
                carbs_grams INTEGER NOT NULL CHECK (carbs_grams >= 0),
                fat_grams INTEGER NOT NULL CHECK (fat_grams >= 0),
                meal_plan TEXT NOT NULL,
                created_at DATETIME NOT NULL
            )
            ",
        )
        .await
    }

    /// Store a plan for a client
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the plan fails validation
    pub async fn create_nutrition_plan(&self, plan: &NewNutritionPlan) -> AppResult<NutritionPlan> {
        plan.validate()?;
        let created_at = Utc::now();
        let id: i64 = sqlx::query_scalar(
            r"
            INSERT INTO nutrition_plans (client_id, title, description, daily_calories,
                                         protein_grams, carbs_grams, fat_grams, meal_plan,
                                         created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            ",
        )
        .bind(plan.client_id)
        .bind(plan.title.trim())
        .bind(&plan.description)
        .bind(plan.daily_calories)
        .bind(plan.protein_grams)
        .bind(plan.carbs_grams)
        .bind(plan.fat_grams)
        .bind(&plan.meal_plan)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(db_error("create nutrition plan"))?;

        Ok(NutritionPlan {
            id,
            client_id: plan.client_id,
            title: plan.title.trim().to_owned(),
            description: plan.description.clone(),
            daily_calories: plan.daily_calories,
            protein_grams: plan.protein_grams,
            carbs_grams: plan.carbs_grams,
            fat_grams: plan.fat_grams,
            meal_plan: plan.meal_plan.clone(),
            created_at,
        })
    }

    /// A client's plans, most recently created first
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn list_nutrition_plans(&self, client_id: i64) -> AppResult<Vec<NutritionPlan>> {
        let rows = sqlx::query(&format!(
            "SELECT {PLAN_COLUMNS} FROM nutrition_plans WHERE client_id = $1 \
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(client_id)
        .fetch_all(&self.pool)
        .await
        .map_err(db_error("list nutrition plans"))?;
        Ok(rows.iter().map(row_to_plan).collect())
    }

    /// The most recently created plan, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails
    pub async fn latest_nutrition_plan(&self, client_id: i64) -> AppResult<Option<NutritionPlan>> {
        let row = sqlx::query(&format!(
            "SELECT {PLAN_COLUMNS} FROM nutrition_plans WHERE client_id = $1 \
             ORDER BY created_at DESC, id DESC LIMIT 1"
        ))
        .bind(client_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(db_error("get latest nutrition plan"))?;
        Ok(row.as_ref().map(row_to_plan))
    }
}

fn row_to_plan(row: &SqliteRow) -> NutritionPlan {
    NutritionPlan {
        id: row.get("id"),
        client_id: row.get("client_id"),
        title: row.get("title"),
        description: row.get("description"),
        daily_calories: row.get("daily_calories"),
        protein_grams: row.get("protein_grams"),
        carbs_grams: row.get("carbs_grams"),
        fat_grams: row.get("fat_grams"),
        meal_plan: row.get("meal_plan"),
        created_at: row.get("created_at"),
    }
}
