// ABOUTME: Dated body-composition progress entries
// ABOUTME: ProgressEntry and NewProgressEntry with decimal column rules and metric toggles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::checks::decimal_in_column;
use crate::constants::limits::{
    BODY_FAT_DECIMAL_PLACES, BODY_FAT_MAX_DIGITS, WEIGHT_DECIMAL_PLACES, WEIGHT_MAX_DIGITS,
};
use crate::errors::FieldErrors;

/// Message shown when a client logs twice for the same date
pub const DUPLICATE_DATE_MESSAGE: &str = "Progress with this Client and Date already exists.";

/// One progress measurement for a client on a date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressEntry {
    /// Entry ID
    pub id: i64,
    /// Client profile
    pub client_id: i64,
    /// Measurement date, unique per client
    pub date: NaiveDate,
    /// Weight in pounds
    pub weight: Option<f64>,
    /// Body-fat percentage
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass in pounds
    pub muscle_mass: Option<f64>,
    /// Free-text notes
    pub notes: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

/// Fields for a new progress entry
#[derive(Debug, Clone, PartialEq)]
pub struct NewProgressEntry {
    /// Measurement date
    pub date: NaiveDate,
    /// Weight in pounds
    pub weight: Option<f64>,
    /// Body-fat percentage
    pub body_fat_percentage: Option<f64>,
    /// Muscle mass in pounds
    pub muscle_mass: Option<f64>,
    /// Free-text notes
    pub notes: String,
}

impl NewProgressEntry {
    /// Clear the optional metrics whose toggle is off
    #[must_use]
    pub fn with_toggles(mut self, enable_body_fat: bool, enable_muscle_mass: bool) -> Self {
        if !enable_body_fat {
            self.body_fat_percentage = None;
        }
        if !enable_muscle_mass {
            self.muscle_mass = None;
        }
        self
    }

    /// Check the measurement columns
    ///
    /// # Errors
    ///
    /// Returns field errors for negative or oversized measurements
    pub fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        decimal_in_column(
            &mut errors,
            "weight",
            self.weight,
            WEIGHT_MAX_DIGITS,
            WEIGHT_DECIMAL_PLACES,
        );
        decimal_in_column(
            &mut errors,
            "body_fat_percentage",
            self.body_fat_percentage,
            BODY_FAT_MAX_DIGITS,
            BODY_FAT_DECIMAL_PLACES,
        );
        decimal_in_column(
            &mut errors,
            "muscle_mass",
            self.muscle_mass,
            WEIGHT_MAX_DIGITS,
            WEIGHT_DECIMAL_PLACES,
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> NewProgressEntry {
        NewProgressEntry {
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            weight: Some(180.5),
            body_fat_percentage: Some(22.25),
            muscle_mass: Some(140.0),
            notes: String::new(),
        }
    }

    #[test]
    fn test_toggles_clear_metrics() {
        let cleared = entry().with_toggles(false, false);
        assert_eq!(cleared.body_fat_percentage, None);
        assert_eq!(cleared.muscle_mass, None);
        assert_eq!(cleared.weight, Some(180.5));

        let kept = entry().with_toggles(true, true);
        assert_eq!(kept.body_fat_percentage, Some(22.25));
    }

    #[test]
    fn test_body_fat_column_limits() {
        let too_big = NewProgressEntry {
            body_fat_percentage: Some(100.0),
            ..entry()
        };
        assert!(too_big.validate().unwrap_err().has("body_fat_percentage"));
        assert!(entry().validate().is_ok());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let negative = NewProgressEntry {
            weight: Some(-3.0),
            ..entry()
        };
        assert!(negative.validate().unwrap_err().has("weight"));
    }
}
