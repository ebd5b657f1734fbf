// ABOUTME: Dashboard aggregation across profile, workouts, progress, nutrition and messages
// ABOUTME: Gathers the rows one page needs and derives BMI, completion rate and the weight trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::NaiveDate;
use moreta_core::metrics::{bmi, completion_rate, weight_trend, WeightTrendPoint};
use tracing::debug;

use crate::constants::dashboard::RECENT_PROGRESS_LIMIT;
use crate::database::Database;
use crate::errors::AppResult;
use crate::models::{AssignedWorkout, ClientProfile, NutritionPlan, ProgressEntry, User};

/// Everything the dashboard page shows
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// The client's profile
    pub profile: ClientProfile,
    /// Assignments scheduled for today
    pub todays_workouts: Vec<AssignedWorkout>,
    /// Most recent progress entries, newest first
    pub recent_progress: Vec<ProgressEntry>,
    /// Chart series built from the newest entries
    pub weight_trend: Vec<WeightTrendPoint>,
    /// BMI when height and weight are known
    pub bmi: Option<f64>,
    /// Most recently created nutrition plan
    pub latest_plan: Option<NutritionPlan>,
    /// Unread received messages
    pub unread_messages: i64,
    /// All assignments
    pub total_workouts: u32,
    /// Completed assignments
    pub completed_workouts: u32,
    /// Completed share in percent
    pub completion_rate: f64,
}

/// Load the dashboard for `user` as of `today`
///
/// The profile is created if it is missing.
///
/// # Errors
///
/// Returns an error if any query fails
pub async fn load_dashboard(
    database: &Database,
    user: &User,
    today: NaiveDate,
) -> AppResult<DashboardData> {
    let profile = database.ensure_profile(user.id).await?;

    let todays_workouts = database.assignments_on(profile.id, today).await?;
    let recent_progress = database
        .list_progress(profile.id, Some(RECENT_PROGRESS_LIMIT))
        .await?;
    let latest_plan = database.latest_nutrition_plan(profile.id).await?;
    let unread_messages = database.unread_message_count(user.id).await?;
    let (total_workouts, completed_workouts) = database.assignment_counts(profile.id).await?;

    let data = DashboardData {
        bmi: bmi(
            profile.height_feet,
            profile.height_inches,
            profile.current_weight,
        ),
        weight_trend: weight_trend(&recent_progress),
        completion_rate: completion_rate(total_workouts, completed_workouts),
        profile,
        todays_workouts,
        recent_progress,
        latest_plan,
        unread_messages,
        total_workouts,
        completed_workouts,
    };

    debug!(
        user_id = %user.id,
        todays_workouts = data.todays_workouts.len(),
        total_workouts,
        completed_workouts,
        "Dashboard loaded"
    );
    Ok(data)
}
