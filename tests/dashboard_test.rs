// ABOUTME: Integration tests for dashboard aggregation over a seeded client
// ABOUTME: Covers BMI, completion rate, today's workouts, unread count and the weight trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness
#![allow(clippy::unwrap_used, clippy::float_cmp)]

mod common;

use chrono::NaiveDate;
use common::{create_client, create_test_database, create_user};
use moreta_fitness::models::{
    ExperienceLevel, FitnessGoal, NewAssignment, NewMessage, NewNutritionPlan, NewProgressEntry,
    NewWorkout, ProfileUpdate, WorkoutType,
};
use moreta_fitness::services::dashboard::load_dashboard;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
}

async fn seed_workout(database: &moreta_fitness::database::Database) -> i64 {
    database
        .create_workout(&NewWorkout {
            title: "Full body".into(),
            description: "Everything".into(),
            workout_type: WorkoutType::Strength,
            duration_minutes: 45,
            difficulty_level: 6,
            instructions: "Squat, press, pull".into(),
            video_url: String::new(),
        })
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn test_empty_dashboard_for_new_client() {
    let database = create_test_database().await.unwrap();
    let user = create_user(&database, "newbie", false).await.unwrap();

    let data = load_dashboard(&database, &user, day(10)).await.unwrap();

    assert_eq!(data.bmi, None);
    assert_eq!(data.total_workouts, 0);
    assert_eq!(data.completion_rate, 0.0);
    assert!(data.todays_workouts.is_empty());
    assert!(data.weight_trend.is_empty());
    assert!(data.latest_plan.is_none());
    assert_eq!(data.unread_messages, 0);
}

#[tokio::test]
async fn test_dashboard_bmi_from_profile() {
    let database = create_test_database().await.unwrap();
    let (user, _) = create_client(&database, "tall").await.unwrap();
    database
        .update_profile(
            user.id,
            &ProfileUpdate {
                phone: String::new(),
                current_weight: Some(150.0),
                target_weight: None,
                height_feet: Some(5),
                height_inches: Some(9),
                age: None,
                experience_level: ExperienceLevel::Intermediate,
                fitness_goals: FitnessGoal::WeightLoss,
                medical_conditions: String::new(),
                dietary_restrictions: String::new(),
            },
        )
        .await
        .unwrap();

    let data = load_dashboard(&database, &user, day(10)).await.unwrap();
    assert_eq!(data.bmi, Some(22.2));
}

#[tokio::test]
async fn test_dashboard_counts_and_todays_workouts() {
    let database = create_test_database().await.unwrap();
    let (user, profile) = create_client(&database, "busy").await.unwrap();
    let workout_id = seed_workout(&database).await;

    let mut ids = Vec::new();
    for d in [9, 10, 11, 12] {
        let assigned = database
            .assign_workout(&NewAssignment {
                client_id: profile.id,
                workout_id,
                assigned_date: day(d),
                notes: String::new(),
            })
            .await
            .unwrap();
        ids.push(assigned.id);
    }
    database.complete_assignment(profile.id, ids[0]).await.unwrap();

    let data = load_dashboard(&database, &user, day(10)).await.unwrap();
    assert_eq!(data.total_workouts, 4);
    assert_eq!(data.completed_workouts, 1);
    assert_eq!(data.completion_rate, 25.0);
    assert_eq!(data.todays_workouts.len(), 1);
    assert_eq!(data.todays_workouts[0].assignment.id, ids[1]);

    for id in &ids[1..] {
        database.complete_assignment(profile.id, *id).await.unwrap();
    }
    let data = load_dashboard(&database, &user, day(10)).await.unwrap();
    assert_eq!(data.completion_rate, 100.0);
}

#[tokio::test]
async fn test_dashboard_progress_plan_and_messages() {
    let database = create_test_database().await.unwrap();
    let coach = create_user(&database, "coachy", true).await.unwrap();
    let (user, profile) = create_client(&database, "tracker").await.unwrap();

    for d in 1..=7 {
        database
            .create_progress(
                profile.id,
                &NewProgressEntry {
                    date: day(d),
                    weight: Some(200.0 - f64::from(d)),
                    body_fat_percentage: None,
                    muscle_mass: None,
                    notes: String::new(),
                },
            )
            .await
            .unwrap();
    }
    database
        .create_nutrition_plan(&NewNutritionPlan {
            client_id: profile.id,
            title: "Lean".into(),
            description: "Cut".into(),
            daily_calories: 2100,
            protein_grams: 170,
            carbs_grams: 190,
            fat_grams: 70,
            meal_plan: "Breakfast: eggs".into(),
        })
        .await
        .unwrap();
    for subject in ["One", "Two"] {
        database
            .send_message(&NewMessage {
                sender_id: coach.id,
                recipient_id: user.id,
                subject: subject.into(),
                content: "Keep going".into(),
            })
            .await
            .unwrap();
    }

    let data = load_dashboard(&database, &user, day(8)).await.unwrap();

    assert_eq!(data.recent_progress.len(), 7);
    assert_eq!(data.recent_progress[0].date, day(7));
    assert_eq!(data.weight_trend.len(), 5);
    // Oldest of the five newest entries is plotted first
    assert_eq!(data.weight_trend[0].weight, 197.0);
    assert_eq!(data.weight_trend[4].weight, 193.0);
    assert_eq!(data.latest_plan.unwrap().title, "Lean");
    assert_eq!(data.unread_messages, 2);
}
