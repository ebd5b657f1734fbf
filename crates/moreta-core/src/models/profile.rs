// ABOUTME: Client profile models holding per-user fitness attributes
// ABOUTME: ClientProfile, ProfileUpdate, ExperienceLevel, and FitnessGoal with height validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::checks::{decimal_in_column, max_len};
use crate::constants::limits::{
    MAX_AGE, MAX_HEIGHT_FEET, MAX_HEIGHT_INCHES, MIN_AGE, MIN_HEIGHT_FEET, MIN_HEIGHT_INCHES,
    PHONE_MAX_LEN, WEIGHT_DECIMAL_PLACES, WEIGHT_MAX_DIGITS,
};
use crate::errors::{AppError, FieldErrors};

/// Self-reported training experience
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    /// New to training
    #[default]
    Beginner,
    /// Trains regularly
    Intermediate,
    /// Experienced athlete
    Advanced,
}

impl ExperienceLevel {
    /// All levels in display order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Get display name for this level
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl Display for ExperienceLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

impl FromStr for ExperienceLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid experience level: {s}")))
    }
}

/// Primary training goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Lose body weight
    WeightLoss,
    /// Build muscle
    MuscleGain,
    /// Strength training
    Strength,
    /// Endurance
    Endurance,
    /// General fitness
    #[default]
    GeneralFitness,
}

impl FitnessGoal {
    /// All goals in display order
    pub const ALL: [Self; 5] = [
        Self::WeightLoss,
        Self::MuscleGain,
        Self::Strength,
        Self::Endurance,
        Self::GeneralFitness,
    ];

    /// Convert to string for database storage
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WeightLoss => "weight_loss",
            Self::MuscleGain => "muscle_gain",
            Self::Strength => "strength",
            Self::Endurance => "endurance",
            Self::GeneralFitness => "general_fitness",
        }
    }

    /// Get display name for this goal
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::WeightLoss => "Weight Loss",
            Self::MuscleGain => "Muscle Gain",
            Self::Strength => "Strength Training",
            Self::Endurance => "Endurance",
            Self::GeneralFitness => "General Fitness",
        }
    }
}

impl Display for FitnessGoal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.display_name())
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("Invalid fitness goal: {s}")))
    }
}

/// Per-user fitness attributes, distinct from the login identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientProfile {
    /// Profile ID
    pub id: i64,
    /// Owning user
    pub user_id: Uuid,
    /// Contact phone
    pub phone: String,
    /// Current weight in pounds
    pub current_weight: Option<f64>,
    /// Target weight in pounds
    pub target_weight: Option<f64>,
    /// Height, feet part
    pub height_feet: Option<i32>,
    /// Height, inches part (0-11)
    pub height_inches: Option<i32>,
    /// Age in years
    pub age: Option<i32>,
    /// Training experience
    pub experience_level: ExperienceLevel,
    /// Primary goal
    pub fitness_goals: FitnessGoal,
    /// Medical conditions or injuries
    pub medical_conditions: String,
    /// Dietary restrictions or allergies
    pub dietary_restrictions: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last update time
    pub updated_at: DateTime<Utc>,
}

impl ClientProfile {
    /// Height as `5' 9"`, `5'` or "Not provided"
    #[must_use]
    pub fn height_display(&self) -> String {
        match (self.height_feet, self.height_inches) {
            (Some(feet), Some(inches)) => format!("{feet}' {inches}\""),
            (Some(feet), None) => format!("{feet}'"),
            _ => "Not provided".to_owned(),
        }
    }

    /// The editable part of this profile
    #[must_use]
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            phone: self.phone.clone(),
            current_weight: self.current_weight,
            target_weight: self.target_weight,
            height_feet: self.height_feet,
            height_inches: self.height_inches,
            age: self.age,
            experience_level: self.experience_level,
            fitness_goals: self.fitness_goals,
            medical_conditions: self.medical_conditions.clone(),
            dietary_restrictions: self.dietary_restrictions.clone(),
        }
    }
}

/// Every field a client may change on their profile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    /// Contact phone
    pub phone: String,
    /// Current weight in pounds
    pub current_weight: Option<f64>,
    /// Target weight in pounds
    pub target_weight: Option<f64>,
    /// Height, feet part
    pub height_feet: Option<i32>,
    /// Height, inches part
    pub height_inches: Option<i32>,
    /// Age in years
    pub age: Option<i32>,
    /// Training experience
    pub experience_level: ExperienceLevel,
    /// Primary goal
    pub fitness_goals: FitnessGoal,
    /// Medical conditions or injuries
    pub medical_conditions: String,
    /// Dietary restrictions or allergies
    pub dietary_restrictions: String,
}

impl ProfileUpdate {
    /// Enforce the profile column rules
    ///
    /// # Errors
    ///
    /// Returns field errors for out-of-range height or age, oversized weights,
    /// or an overlong phone number
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if let Some(feet) = self.height_feet {
            if !(MIN_HEIGHT_FEET..=MAX_HEIGHT_FEET).contains(&feet) {
                errors.add(
                    "height_feet",
                    format!(
                        "Height in feet must be between {MIN_HEIGHT_FEET} and {MAX_HEIGHT_FEET}."
                    ),
                );
            }
        }
        if let Some(inches) = self.height_inches {
            if !(MIN_HEIGHT_INCHES..=MAX_HEIGHT_INCHES).contains(&inches) {
                errors.add(
                    "height_inches",
                    format!(
                        "Height in inches must be between \
                         {MIN_HEIGHT_INCHES} and {MAX_HEIGHT_INCHES}."
                    ),
                );
            }
        }
        if let Some(age) = self.age {
            if !(MIN_AGE..=MAX_AGE).contains(&age) {
                errors.add("age", format!("Age must be between {MIN_AGE} and {MAX_AGE}."));
            }
        }

        decimal_in_column(
            &mut errors,
            "current_weight",
            self.current_weight,
            WEIGHT_MAX_DIGITS,
            WEIGHT_DECIMAL_PLACES,
        );
        decimal_in_column(
            &mut errors,
            "target_weight",
            self.target_weight,
            WEIGHT_MAX_DIGITS,
            WEIGHT_DECIMAL_PLACES,
        );
        max_len(&mut errors, "phone", &self.phone, PHONE_MAX_LEN);

        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(feet: Option<i32>, inches: Option<i32>) -> ClientProfile {
        ClientProfile {
            id: 1,
            user_id: Uuid::new_v4(),
            phone: String::new(),
            current_weight: None,
            target_weight: None,
            height_feet: feet,
            height_inches: inches,
            age: None,
            experience_level: ExperienceLevel::default(),
            fitness_goals: FitnessGoal::default(),
            medical_conditions: String::new(),
            dietary_restrictions: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_height_display() {
        assert_eq!(profile(Some(5), Some(9)).height_display(), "5' 9\"");
        assert_eq!(profile(Some(6), Some(0)).height_display(), "6' 0\"");
        assert_eq!(profile(Some(6), None).height_display(), "6'");
        assert_eq!(profile(None, Some(4)).height_display(), "Not provided");
    }

    #[test]
    fn test_every_height_in_range_is_accepted() {
        for feet in MIN_HEIGHT_FEET..=MAX_HEIGHT_FEET {
            for inches in MIN_HEIGHT_INCHES..=MAX_HEIGHT_INCHES {
                let update = ProfileUpdate {
                    height_feet: Some(feet),
                    height_inches: Some(inches),
                    ..ProfileUpdate::default()
                };
                assert!(update.validate().is_ok(), "{feet}' {inches}\" rejected");
            }
        }
    }

    #[test]
    fn test_height_out_of_range_is_rejected() {
        for (feet, inches, field) in [
            (Some(2), None, "height_feet"),
            (Some(9), None, "height_feet"),
            (None, Some(-1), "height_inches"),
            (None, Some(12), "height_inches"),
        ] {
            let update = ProfileUpdate {
                height_feet: feet,
                height_inches: inches,
                ..ProfileUpdate::default()
            };
            let errors = update.validate().unwrap_err();
            assert!(errors.has(field), "{feet:?}/{inches:?} should fail on {field}");
        }
    }

    #[test]
    fn test_enum_round_trip_through_storage_strings() {
        for level in ExperienceLevel::ALL {
            assert_eq!(level.as_str().parse::<ExperienceLevel>().unwrap(), level);
        }
        for goal in FitnessGoal::ALL {
            assert_eq!(goal.as_str().parse::<FitnessGoal>().unwrap(), goal);
        }
        assert!("elite".parse::<ExperienceLevel>().is_err());
    }
}
