// ABOUTME: Workout catalog and client assignment models
// ABOUTME: Workout templates, WorkoutType, per-client assignments with completion state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use super::checks::{max_len, required_text};
use crate::constants::limits::{MAX_DIFFICULTY, MIN_DIFFICULTY, TITLE_MAX_LEN};
use crate::errors::{AppError, FieldErrors};

/// Workout category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Strength training
    Strength,
    /// Cardio
    Cardio,
    /// Flexibility
    Flexibility,
    /// High-intensity interval training
    Hiit,
    /// Yoga
    Yoga,
}

impl WorkoutType {
    /// All types in display order
    pub const ALL: [Self; 5] = [
        Self::Strength,
        Self::Cardio,
        Self::Flexibility,
        Self::Hiit,
        Self::Yoga,
    ];

    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Flexibility => "flexibility",
            Self::Hiit => "hiit",
            Self::Yoga => "yoga",
        }
    }

    /// Get display name for this type
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength Training",
            Self::Cardio => "Cardio",
            Self::Flexibility => "Flexibility",
            Self::Hiit => "HIIT",
            Self::Yoga => "Yoga",
        }
    }
}

impl Display for WorkoutType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid workout type: {s}")))
    }
}

/// A reusable workout template in the coach's library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Workout {
    /// Workout ID
    pub id: i64,
    /// Title
    pub title: String,
    /// Short description
    pub description: String,
    /// Category
    pub workout_type: WorkoutType,
    /// Duration in minutes
    pub duration_minutes: i32,
    /// Difficulty from 1 to 10
    pub difficulty_level: i32,
    /// Step-by-step instructions
    pub instructions: String,
    /// Optional demonstration video
    pub video_url: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Fields for a new workout template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkout {
    /// Title
    pub title: String,
    /// Short description
    pub description: String,
    /// Category
    pub workout_type: WorkoutType,
    /// Duration in minutes
    pub duration_minutes: i32,
    /// Difficulty from 1 to 10
    pub difficulty_level: i32,
    /// Step-by-step instructions
    pub instructions: String,
    /// Optional demonstration video, blank for none
    pub video_url: String,
}

impl NewWorkout {
    /// Check the template fields
    ///
    /// # Errors
    ///
    /// Returns field errors for missing text, a non-positive duration, a
    /// difficulty outside 1-10, or a video URL that is not http(s)
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        required_text(&mut errors, "title", &self.title);
        max_len(&mut errors, "title", &self.title, TITLE_MAX_LEN);
        required_text(&mut errors, "description", &self.description);
        required_text(&mut errors, "instructions", &self.instructions);

        if self.duration_minutes < 1 {
            errors.add(
                "duration_minutes",
                "Ensure this value is greater than or equal to 1.",
            );
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty_level) {
            errors.add(
                "difficulty_level",
                format!("Difficulty must be between {MIN_DIFFICULTY} and {MAX_DIFFICULTY}."),
            );
        }

        let video_url = self.video_url.trim();
        if !video_url.is_empty() {
            let valid = Url::parse(video_url)
                .map(|url| matches!(url.scheme(), "http" | "https") && url.host().is_some())
                .unwrap_or(false);
            if !valid {
                errors.add("video_url", "Enter a valid URL.");
            }
        }

        errors.into_result()
    }
}

/// One workout assigned to one client on one date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientWorkout {
    /// Assignment ID
    pub id: i64,
    /// Client profile the workout is assigned to
    pub client_id: i64,
    /// Assigned workout template
    pub workout_id: i64,
    /// Date the workout is scheduled for
    pub assigned_date: NaiveDate,
    /// Whether the client marked it done
    pub completed: bool,
    /// When it was first marked done
    pub completed_date: Option<DateTime<Utc>>,
    /// Coach or client notes
    pub notes: String,
}

/// An assignment together with its workout template, as listed to the client
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignedWorkout {
    /// The assignment row
    pub assignment: ClientWorkout,
    /// The template it points at
    pub workout: Workout,
}

/// Fields for a new assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    /// Client profile ID
    pub client_id: i64,
    /// Workout template ID
    pub workout_id: i64,
    /// Scheduled date
    pub assigned_date: NaiveDate,
    /// Notes for the client
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn workout() -> NewWorkout {
        NewWorkout {
            title: "Full body A".to_owned(),
            description: "Compound lifts".to_owned(),
            workout_type: WorkoutType::Strength,
            duration_minutes: 45,
            difficulty_level: 6,
            instructions: "Squat, bench, row".to_owned(),
            video_url: String::new(),
        }
    }

    #[test]
    fn test_valid_workout() {
        assert!(workout().validate().is_ok());
    }

    #[test]
    fn test_difficulty_bounds() {
        for (level, ok) in [(0, false), (1, true), (10, true), (11, false)] {
            let candidate = NewWorkout {
                difficulty_level: level,
                ..workout()
            };
            assert_eq!(candidate.validate().is_ok(), ok, "difficulty {level}");
        }
    }

    #[test]
    fn test_video_url_must_be_http() {
        let good = NewWorkout {
            video_url: "https://videos.example.com/squat".to_owned(),
            ..workout()
        };
        assert!(good.validate().is_ok());

        let bad = NewWorkout {
            video_url: "javascript:alert(1)".to_owned(),
            ..workout()
        };
        assert!(bad.validate().unwrap_err().has("video_url"));
    }

    #[test]
    fn test_workout_type_parsing() {
        assert_eq!("hiit".parse::<WorkoutType>().unwrap(), WorkoutType::Hiit);
        assert_eq!(WorkoutType::Hiit.to_string(), "HIIT");
        assert!("pilates".parse::<WorkoutType>().is_err());
    }
}
