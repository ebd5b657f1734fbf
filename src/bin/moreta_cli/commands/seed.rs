// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness
// ABOUTME: Demo data seeding for moreta-cli
// ABOUTME: Creates a coach and a client with profile, workouts, progress, a plan and messages

use chrono::{Duration, Utc};
use moreta_fitness::auth::hash_password;
use moreta_fitness::database::Database;
use moreta_fitness::errors::AppResult;
use moreta_fitness::models::{
    ExperienceLevel, FitnessGoal, NewAssignment, NewMessage, NewNutritionPlan, NewProgressEntry,
    NewUser, NewWorkout, ProfileUpdate, User, WorkoutType,
};
use tracing::info;

const DEMO_PASSWORD: &str = "moreta-demo-2025";

async fn demo_user(
    database: &Database,
    username: &str,
    first_name: &str,
    is_staff: bool,
    bcrypt_cost: u32,
) -> AppResult<User> {
    if let Some(user) = database.get_user_by_username(username).await? {
        info!(username, "Demo user already present");
        return Ok(user);
    }
    let password_hash = hash_password(DEMO_PASSWORD, bcrypt_cost).await?;
    database
        .create_user(&NewUser {
            username: username.to_owned(),
            email: format!("{username}@example.com"),
            first_name: first_name.to_owned(),
            last_name: "Demo".to_owned(),
            password_hash,
            is_staff,
        })
        .await
}

fn demo_workouts() -> [NewWorkout; 3] {
    [
        NewWorkout {
            title: "Full Body Strength".to_owned(),
            description: "Compound lifts for the whole body".to_owned(),
            workout_type: WorkoutType::Strength,
            duration_minutes: 45,
            difficulty_level: 5,
            instructions: "Squat 3x8\nBench press 3x8\nBent-over row 3x10\nPlank 3x45s".to_owned(),
            video_url: String::new(),
        },
        NewWorkout {
            title: "Interval Run".to_owned(),
            description: "Short intervals to build aerobic capacity".to_owned(),
            workout_type: WorkoutType::Cardio,
            duration_minutes: 30,
            difficulty_level: 6,
            instructions: "10 min easy\n6 x 1 min hard / 2 min easy\n5 min cool down".to_owned(),
            video_url: String::new(),
        },
        NewWorkout {
            title: "Mobility Flow".to_owned(),
            description: "Hips, thoracic spine and shoulders".to_owned(),
            workout_type: WorkoutType::Flexibility,
            duration_minutes: 20,
            difficulty_level: 2,
            instructions: "World's greatest stretch\nCat-cow\nThread the needle\n90/90 hips"
                .to_owned(),
            video_url: String::new(),
        },
    ]
}

/// Seed a coach and a client with a few weeks of data
pub async fn seed_demo(database: &Database, bcrypt_cost: u32) -> AppResult<()> {
    let coach = demo_user(database, "coach", "Casey", true, bcrypt_cost).await?;
    let client = demo_user(database, "client", "Jordan", false, bcrypt_cost).await?;

    let profile = database
        .update_profile(
            client.id,
            &ProfileUpdate {
                phone: "555-0100".to_owned(),
                current_weight: Some(182.0),
                target_weight: Some(170.0),
                height_feet: Some(5),
                height_inches: Some(10),
                age: Some(34),
                experience_level: ExperienceLevel::Intermediate,
                fitness_goals: FitnessGoal::WeightLoss,
                medical_conditions: String::new(),
                dietary_restrictions: "No shellfish".to_owned(),
            },
        )
        .await?;

    let today = Utc::now().date_naive();
    let existing = database.list_workouts().await?;
    let mut workouts = Vec::new();
    for workout in demo_workouts() {
        match existing.iter().find(|w| w.title == workout.title) {
            Some(found) => workouts.push(found.clone()),
            None => workouts.push(database.create_workout(&workout).await?),
        }
    }

    for (offset, workout) in (0_i64..).zip(workouts.iter().cycle().take(6)) {
        let assignment = NewAssignment {
            client_id: profile.id,
            workout_id: workout.id,
            assigned_date: today - Duration::days(offset * 2),
            notes: String::new(),
        };
        // Re-running the seed hits the (client, workout, date) unique index
        if let Ok(assigned) = database.assign_workout(&assignment).await {
            if offset > 0 {
                database.complete_assignment(profile.id, assigned.id).await?;
            }
        }
    }

    for week in 0_i32..6 {
        let entry = NewProgressEntry {
            date: today - Duration::weeks(i64::from(week)),
            weight: Some(f64::from(week).mul_add(1.5, 182.0)),
            body_fat_percentage: Some(f64::from(week).mul_add(0.4, 24.0)),
            muscle_mass: None,
            notes: String::new(),
        };
        if database.create_progress(profile.id, &entry).await.is_err() {
            info!(date = %entry.date, "Progress entry already present");
        }
    }

    if database.latest_nutrition_plan(profile.id).await?.is_none() {
        database
            .create_nutrition_plan(&NewNutritionPlan {
                client_id: profile.id,
                title: "Lean Cut".to_owned(),
                description: "Moderate deficit with high protein".to_owned(),
                daily_calories: 2100,
                protein_grams: 180,
                carbs_grams: 190,
                fat_grams: 70,
                meal_plan: "Breakfast: oats and eggs\n\
                            Lunch: chicken and rice\n\
                            Dinner: salmon and vegetables"
                    .to_owned(),
            })
            .await?;
    }

    database
        .send_message(&NewMessage {
            sender_id: coach.id,
            recipient_id: client.id,
            subject: "Welcome aboard".to_owned(),
            content: "Your first week is on the schedule. Log your weight every Monday.".to_owned(),
        })
        .await?;

    info!(coach_id = %coach.id, client_id = %client.id, "Demo data seeded");
    println!("Demo data ready. Log in as 'coach' or 'client' with password '{DEMO_PASSWORD}'.");
    Ok(())
}
