// ABOUTME: Integration tests for the SQLite store covering uniqueness, ownership and state changes
// ABOUTME: Each test runs against its own in-memory database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use chrono::NaiveDate;
use common::{create_client, create_test_database, create_user};
use moreta_fitness::config::{DatabaseConfig, DatabaseUrl};
use moreta_fitness::database::Database;
use moreta_fitness::errors::ErrorCode;
use moreta_fitness::models::{
    ExperienceLevel, FitnessGoal, NewAssignment, NewMessage, NewNutritionPlan, NewProgressEntry,
    NewWorkout, ProfileUpdate, WorkoutType,
};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn profile_update(height_feet: i32, height_inches: i32) -> ProfileUpdate {
    ProfileUpdate {
        phone: "555-0101".into(),
        current_weight: Some(150.0),
        target_weight: Some(140.0),
        height_feet: Some(height_feet),
        height_inches: Some(height_inches),
        age: Some(30),
        experience_level: ExperienceLevel::Beginner,
        fitness_goals: FitnessGoal::GeneralFitness,
        medical_conditions: String::new(),
        dietary_restrictions: String::new(),
    }
}

fn workout(title: &str) -> NewWorkout {
    NewWorkout {
        title: title.into(),
        description: "desc".into(),
        workout_type: WorkoutType::Strength,
        duration_minutes: 40,
        difficulty_level: 5,
        instructions: "do it".into(),
        video_url: String::new(),
    }
}

fn progress_on(day: &str, weight: f64) -> NewProgressEntry {
    NewProgressEntry {
        date: date(day),
        weight: Some(weight),
        body_fat_percentage: None,
        muscle_mass: None,
        notes: String::new(),
    }
}

#[tokio::test]
async fn test_usernames_and_emails_are_unique_ignoring_case() {
    let database = create_test_database().await.unwrap();
    create_user(&database, "Alice", false).await.unwrap();

    assert!(database.username_taken("alice").await.unwrap());
    assert!(database.email_taken("ALICE@example.com").await.unwrap());

    let err = create_user(&database, "alice", false).await.unwrap_err();
    assert!(err.to_string().contains("already exists"));
}

#[tokio::test]
async fn test_registration_creates_empty_profile_once() {
    let database = create_test_database().await.unwrap();
    let user = create_user(&database, "bob", false).await.unwrap();

    let first = database.get_profile(user.id).await.unwrap().unwrap();
    let again = database.ensure_profile(user.id).await.unwrap();
    assert_eq!(first.id, again.id);
    assert_eq!(first.current_weight, None);
    assert_eq!(first.experience_level, ExperienceLevel::Beginner);
}

#[tokio::test]
async fn test_profile_accepts_every_height_in_range() {
    let database = create_test_database().await.unwrap();
    let (user, _) = create_client(&database, "carol").await.unwrap();

    for feet in 3..=8 {
        for inches in 0..=11 {
            let saved = database
                .update_profile(user.id, &profile_update(feet, inches))
                .await
                .unwrap();
            assert_eq!(saved.height_feet, Some(feet));
            assert_eq!(saved.height_inches, Some(inches));
        }
    }
}

#[tokio::test]
async fn test_profile_rejects_out_of_range_height_without_writing() {
    let database = create_test_database().await.unwrap();
    let (user, _) = create_client(&database, "dave").await.unwrap();
    database
        .update_profile(user.id, &profile_update(5, 9))
        .await
        .unwrap();

    let out_of_range = [
        (2, 5, "height_feet"),
        (9, 0, "height_feet"),
        (5, 12, "height_inches"),
    ];
    for (feet, inches, field) in out_of_range {
        let err = database
            .update_profile(user.id, &profile_update(feet, inches))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.field_errors().unwrap().has(field));
    }

    let stored = database.get_profile(user.id).await.unwrap().unwrap();
    assert_eq!(stored.height_feet, Some(5));
    assert_eq!(stored.height_inches, Some(9));
}

#[tokio::test]
async fn test_second_progress_entry_for_same_date_is_rejected() {
    let database = create_test_database().await.unwrap();
    let (_, profile) = create_client(&database, "erin").await.unwrap();

    database
        .create_progress(profile.id, &progress_on("2025-03-01", 180.0))
        .await
        .unwrap();
    let err = database
        .create_progress(profile.id, &progress_on("2025-03-01", 179.0))
        .await
        .unwrap_err();
    assert!(err.field_errors().unwrap().has("date"));

    let entries = database.list_progress(profile.id, None).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].weight, Some(180.0));
}

#[tokio::test]
async fn test_progress_listing_is_newest_first_and_limited() {
    let database = create_test_database().await.unwrap();
    let (_, profile) = create_client(&database, "frank").await.unwrap();
    for (day, weight) in [("2025-01-01", 190.0), ("2025-01-15", 188.0), ("2025-01-08", 189.0)] {
        database
            .create_progress(profile.id, &progress_on(day, weight))
            .await
            .unwrap();
    }

    let entries = database.list_progress(profile.id, Some(2)).await.unwrap();
    let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
    assert_eq!(dates, vec![date("2025-01-15"), date("2025-01-08")]);
}

#[tokio::test]
async fn test_progress_lookup_is_scoped_to_owner() {
    let database = create_test_database().await.unwrap();
    let (_, owner) = create_client(&database, "gina").await.unwrap();
    let (_, other) = create_client(&database, "hank").await.unwrap();
    let entry = database
        .create_progress(owner.id, &progress_on("2025-02-01", 150.0))
        .await
        .unwrap();

    assert!(database.get_progress(owner.id, entry.id).await.unwrap().is_some());
    assert!(database.get_progress(other.id, entry.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_completing_a_workout_is_one_way_and_keeps_first_timestamp() {
    let database = create_test_database().await.unwrap();
    let (_, profile) = create_client(&database, "ivy").await.unwrap();
    let template = database.create_workout(&workout("Legs")).await.unwrap();
    let assigned = database
        .assign_workout(&NewAssignment {
            client_id: profile.id,
            workout_id: template.id,
            assigned_date: date("2025-04-01"),
            notes: String::new(),
        })
        .await
        .unwrap();

    assert!(database.complete_assignment(profile.id, assigned.id).await.unwrap());
    let first = database
        .get_assignment(profile.id, assigned.id)
        .await
        .unwrap()
        .unwrap();
    assert!(first.assignment.completed);

    assert!(!database.complete_assignment(profile.id, assigned.id).await.unwrap());
    let second = database
        .get_assignment(profile.id, assigned.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.assignment.completed_date, second.assignment.completed_date);

    assert_eq!(database.assignment_counts(profile.id).await.unwrap(), (1, 1));
}

#[tokio::test]
async fn test_foreign_assignment_cannot_be_read_or_completed() {
    let database = create_test_database().await.unwrap();
    let (_, owner) = create_client(&database, "jack").await.unwrap();
    let (_, intruder) = create_client(&database, "kate").await.unwrap();
    let template = database.create_workout(&workout("Core")).await.unwrap();
    let assigned = database
        .assign_workout(&NewAssignment {
            client_id: owner.id,
            workout_id: template.id,
            assigned_date: date("2025-04-02"),
            notes: String::new(),
        })
        .await
        .unwrap();

    assert!(database
        .get_assignment(intruder.id, assigned.id)
        .await
        .unwrap()
        .is_none());
    let err = database
        .complete_assignment(intruder.id, assigned.id)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let untouched = database
        .get_assignment(owner.id, assigned.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!untouched.assignment.completed);
}

#[tokio::test]
async fn test_duplicate_assignment_is_a_field_error() {
    let database = create_test_database().await.unwrap();
    let (_, profile) = create_client(&database, "liam").await.unwrap();
    let template = database.create_workout(&workout("Arms")).await.unwrap();
    let assignment = NewAssignment {
        client_id: profile.id,
        workout_id: template.id,
        assigned_date: date("2025-05-05"),
        notes: String::new(),
    };

    database.assign_workout(&assignment).await.unwrap();
    let err = database.assign_workout(&assignment).await.unwrap_err();
    assert!(err.field_errors().unwrap().has("assigned_date"));
    assert_eq!(database.list_assignments(profile.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_opening_a_message_marks_it_read_exactly_once() {
    let database = create_test_database().await.unwrap();
    let sender = create_user(&database, "coach", true).await.unwrap();
    let recipient = create_user(&database, "mia", false).await.unwrap();
    let message = database
        .send_message(&NewMessage {
            sender_id: sender.id,
            recipient_id: recipient.id,
            subject: "Check-in".into(),
            content: "How did the week go?".into(),
        })
        .await
        .unwrap();
    assert!(!message.read);
    assert_eq!(database.unread_message_count(recipient.id).await.unwrap(), 1);

    assert!(database.mark_message_read(recipient.id, message.id).await.unwrap());
    assert!(!database.mark_message_read(recipient.id, message.id).await.unwrap());
    assert_eq!(database.unread_message_count(recipient.id).await.unwrap(), 0);

    // The sender is not the recipient and cannot flip the flag
    assert!(database
        .get_received_message(sender.id, message.id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_message_to_inactive_user_is_rejected() {
    let database = create_test_database().await.unwrap();
    let sender = create_user(&database, "nina", false).await.unwrap();
    let recipient = create_user(&database, "oscar", false).await.unwrap();
    database.set_user_active(recipient.id, false).await.unwrap();

    let err = database
        .send_message(&NewMessage {
            sender_id: sender.id,
            recipient_id: recipient.id,
            subject: "Hi".into(),
            content: "Hello".into(),
        })
        .await
        .unwrap_err();
    assert!(err.field_errors().unwrap().has("recipient"));
    let recipients = database.list_message_recipients().await.unwrap();
    let names: Vec<_> = recipients.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(names, ["nina"]);
}

#[tokio::test]
async fn test_latest_nutrition_plan_and_delete_cascade() {
    let database = create_test_database().await.unwrap();
    let (user, profile) = create_client(&database, "paula").await.unwrap();
    for title in ["Base", "Cut"] {
        database
            .create_nutrition_plan(&NewNutritionPlan {
                client_id: profile.id,
                title: title.into(),
                description: "plan".into(),
                daily_calories: 2000,
                protein_grams: 150,
                carbs_grams: 200,
                fat_grams: 60,
                meal_plan: "eat".into(),
            })
            .await
            .unwrap();
    }
    let latest = database
        .latest_nutrition_plan(profile.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.title, "Cut");

    database.delete_user(user.id).await.unwrap();
    assert!(database.get_profile(user.id).await.unwrap().is_none());
    assert!(database
        .list_nutrition_plans(profile.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_file_database_creates_parent_dir_and_persists() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = DatabaseConfig {
        url: DatabaseUrl::SQLite {
            path: temp_dir.path().join("nested").join("moreta.db"),
        },
        max_connections: 2,
    };

    {
        let database = Database::connect(&config).await.unwrap();
        create_user(&database, "persisted", false).await.unwrap();
    }

    let reopened = Database::connect(&config).await.unwrap();
    let user = reopened
        .get_user_by_username("persisted")
        .await
        .unwrap()
        .unwrap();
    assert!(reopened.get_profile(user.id).await.unwrap().is_some());
}
