// ABOUTME: Core data models for the Moreta coaching application
// ABOUTME: Re-exports users, profiles, workouts, progress, nutrition plans, and messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Data Models
//!
//! Each persisted entity has a record type (what a row looks like once read)
//! and, where it can be written, a `New*`/`*Update` type whose `validate`
//! method enforces the column constraints. Storage calls `validate` again
//! before every write, so a constraint holds no matter which page or tool
//! submitted the data.

mod checks;
mod message;
mod nutrition;
mod profile;
mod progress;
mod user;
mod workout;

pub use message::{Message, NewMessage};
pub use nutrition::{NewNutritionPlan, NutritionPlan};
pub use profile::{ClientProfile, ExperienceLevel, FitnessGoal, ProfileUpdate};
pub use progress::{NewProgressEntry, ProgressEntry, DUPLICATE_DATE_MESSAGE};
pub use user::{is_valid_email, is_valid_username, NewUser, User, UserSummary};
pub use workout::{AssignedWorkout, ClientWorkout, NewAssignment, NewWorkout, Workout, WorkoutType};
