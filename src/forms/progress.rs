// ABOUTME: New progress entry form with body-fat and muscle-mass toggles
// ABOUTME: A metric whose toggle is off is dropped before parsing, so junk in it is ignored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::NaiveDate;
use serde::Deserialize;

use super::{checkbox, optional_decimal, required_date};
use crate::errors::FieldErrors;
use crate::models::NewProgressEntry;

/// Raw progress submission
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgressForm {
    /// Measurement date, `YYYY-MM-DD`
    pub date: String,
    /// Weight in pounds
    pub weight: String,
    /// Body-fat percentage
    pub body_fat_percentage: String,
    /// Muscle mass in pounds
    pub muscle_mass: String,
    /// Free-text notes
    pub notes: String,
    /// Checkbox: store body fat
    pub enable_body_fat: Option<String>,
    /// Checkbox: store muscle mass
    pub enable_muscle_mass: Option<String>,
}

impl ProgressForm {
    /// Empty form dated `today`
    #[must_use]
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            date: today.format("%Y-%m-%d").to_string(),
            ..Self::default()
        }
    }

    /// Whether the body-fat toggle is ticked
    #[must_use]
    pub fn body_fat_enabled(&self) -> bool {
        checkbox(self.enable_body_fat.as_deref())
    }

    /// Whether the muscle-mass toggle is ticked
    #[must_use]
    pub fn muscle_mass_enabled(&self) -> bool {
        checkbox(self.enable_muscle_mass.as_deref())
    }

    /// Parse into an entry, honouring the toggles
    ///
    /// # Errors
    ///
    /// Returns field errors for a missing or malformed date or bad numbers
    pub fn parse(&self) -> Result<NewProgressEntry, FieldErrors> {
        let mut errors = FieldErrors::new();
        let body_fat_enabled = self.body_fat_enabled();
        let muscle_mass_enabled = self.muscle_mass_enabled();

        let date = required_date(&mut errors, "date", &self.date);
        let weight = optional_decimal(&mut errors, "weight", &self.weight);
        let body_fat_percentage = if body_fat_enabled {
            optional_decimal(&mut errors, "body_fat_percentage", &self.body_fat_percentage)
        } else {
            None
        };
        let muscle_mass = if muscle_mass_enabled {
            optional_decimal(&mut errors, "muscle_mass", &self.muscle_mass)
        } else {
            None
        };

        let Some(date) = date else {
            return Err(errors);
        };
        let entry = NewProgressEntry {
            date,
            weight,
            body_fat_percentage,
            muscle_mass,
            notes: self.notes.clone(),
        }
        .with_toggles(body_fat_enabled, muscle_mass_enabled);

        if let Err(range_errors) = entry.validate() {
            errors.extend(range_errors);
        }
        errors.into_result().map(|()| entry)
    }
}
