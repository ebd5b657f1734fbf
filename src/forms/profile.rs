// ABOUTME: Profile edit form mapping raw inputs onto a validated ProfileUpdate
// ABOUTME: Prefills from the stored profile and reports parse and range errors together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use serde::Deserialize;

use super::{display_optional, optional_decimal, optional_integer, required_choice};
use crate::errors::FieldErrors;
use crate::models::{ClientProfile, ProfileUpdate};

/// Raw profile submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    /// Contact phone
    pub phone: String,
    /// Current weight in pounds
    pub current_weight: String,
    /// Target weight in pounds
    pub target_weight: String,
    /// Height, feet part
    pub height_feet: String,
    /// Height, inches part
    pub height_inches: String,
    /// Age in years
    pub age: String,
    /// Experience level choice
    pub experience_level: String,
    /// Goal choice
    pub fitness_goals: String,
    /// Medical notes
    pub medical_conditions: String,
    /// Dietary notes
    pub dietary_restrictions: String,
}

impl From<&ClientProfile> for ProfileForm {
    fn from(profile: &ClientProfile) -> Self {
        Self {
            phone: profile.phone.clone(),
            current_weight: display_optional(profile.current_weight),
            target_weight: display_optional(profile.target_weight),
            height_feet: display_optional(profile.height_feet),
            height_inches: display_optional(profile.height_inches),
            age: display_optional(profile.age),
            experience_level: profile.experience_level.as_str().to_owned(),
            fitness_goals: profile.fitness_goals.as_str().to_owned(),
            medical_conditions: profile.medical_conditions.clone(),
            dietary_restrictions: profile.dietary_restrictions.clone(),
        }
    }
}

impl ProfileForm {
    /// Parse and range-check every field
    ///
    /// # Errors
    ///
    /// Returns all field errors found, including the profile range rules
    pub fn parse(&self) -> Result<ProfileUpdate, FieldErrors> {
        let mut errors = FieldErrors::new();

        let current_weight = optional_decimal(&mut errors, "current_weight", &self.current_weight);
        let target_weight = optional_decimal(&mut errors, "target_weight", &self.target_weight);
        let height_feet = optional_integer(&mut errors, "height_feet", &self.height_feet);
        let height_inches = optional_integer(&mut errors, "height_inches", &self.height_inches);
        let age = optional_integer(&mut errors, "age", &self.age);
        let experience_level =
            required_choice(&mut errors, "experience_level", &self.experience_level);
        let fitness_goals = required_choice(&mut errors, "fitness_goals", &self.fitness_goals);

        let update = ProfileUpdate {
            phone: self.phone.trim().to_owned(),
            current_weight,
            target_weight,
            height_feet,
            height_inches,
            age,
            experience_level: experience_level.unwrap_or_default(),
            fitness_goals: fitness_goals.unwrap_or_default(),
            medical_conditions: self.medical_conditions.clone(),
            dietary_restrictions: self.dietary_restrictions.clone(),
        };

        if let Err(range_errors) = update.validate() {
            errors.extend(range_errors);
        }
        errors.into_result().map(|()| update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceLevel, FitnessGoal};

    fn form() -> ProfileForm {
        ProfileForm {
            phone: "555-0100".into(),
            current_weight: "180.5".into(),
            target_weight: "170".into(),
            height_feet: "5".into(),
            height_inches: "9".into(),
            age: "34".into(),
            experience_level: "intermediate".into(),
            fitness_goals: "muscle_gain".into(),
            ..ProfileForm::default()
        }
    }

    #[test]
    fn test_parse_valid_profile() {
        let update = form().parse().unwrap();
        assert_eq!(update.height_feet, Some(5));
        assert_eq!(update.height_inches, Some(9));
        assert_eq!(update.current_weight, Some(180.5));
        assert_eq!(update.experience_level, ExperienceLevel::Intermediate);
        assert_eq!(update.fitness_goals, FitnessGoal::MuscleGain);
    }

    #[test]
    fn test_every_height_in_range_parses() {
        for feet in 3..=8 {
            for inches in 0..=11 {
                let mut f = form();
                f.height_feet = feet.to_string();
                f.height_inches = inches.to_string();
                assert!(f.parse().is_ok(), "{feet}'{inches}\" should be accepted");
            }
        }
    }

    #[test]
    fn test_height_out_of_range_rejected() {
        let mut f = form();
        f.height_feet = "9".into();
        f.height_inches = "12".into();
        let errors = f.parse().unwrap_err();
        assert!(errors.has("height_feet"));
        assert!(errors.has("height_inches"));
    }

    #[test]
    fn test_blank_optional_fields_are_none() {
        let f = ProfileForm {
            experience_level: "beginner".into(),
            fitness_goals: "general_fitness".into(),
            ..ProfileForm::default()
        };
        let update = f.parse().unwrap();
        assert_eq!(update.height_feet, None);
        assert_eq!(update.current_weight, None);
    }

    #[test]
    fn test_garbage_numbers_reported() {
        let mut f = form();
        f.age = "thirty".into();
        f.target_weight = "light".into();
        let errors = f.parse().unwrap_err();
        assert!(errors.has("age"));
        assert!(errors.has("target_weight"));
    }
}
