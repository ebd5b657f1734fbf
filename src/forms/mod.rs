// ABOUTME: Form parsing from urlencoded bodies into validated domain values
// ABOUTME: Shared field parsers that record messages into FieldErrors instead of failing fast
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Forms
//!
//! Each form is a flat struct of the raw submitted strings, deserialized by
//! `axum::Form`. Keeping the raw text lets a failed submission re-render with
//! exactly what the user typed. `parse` methods collect every problem into a
//! [`FieldErrors`] before giving up.

/// Workout, assignment and nutrition plan forms for coaches
pub mod coach;
/// Login form and redirect target checks
pub mod login;
/// Compose-message form
pub mod message;
/// Profile edit form
pub mod profile;
/// New progress entry form
pub mod progress;
/// Registration form and password rules
pub mod registration;

pub use coach::{AssignmentForm, NutritionPlanForm, WorkoutForm};
pub use login::{safe_next, LoginForm};
pub use message::MessageForm;
pub use profile::ProfileForm;
pub use progress::ProgressForm;
pub use registration::RegistrationForm;

use std::str::FromStr;

use chrono::NaiveDate;

use crate::errors::FieldErrors;

const REQUIRED: &str = "This field is required.";
const INVALID_NUMBER: &str = "Enter a number.";
const INVALID_WHOLE_NUMBER: &str = "Enter a whole number.";
const INVALID_DATE: &str = "Enter a valid date.";

/// Blank means absent; anything else must be a finite number
pub(crate) fn optional_decimal(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            errors.add(field, INVALID_NUMBER);
            None
        }
    }
}

/// Blank means absent; anything else must be an integer
pub(crate) fn optional_integer(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    raw.parse().map_or_else(
        |_| {
            errors.add(field, INVALID_WHOLE_NUMBER);
            None
        },
        Some,
    )
}

/// A required integer
pub(crate) fn required_integer(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<i32> {
    if raw.trim().is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    optional_integer(errors, field, raw)
}

/// A required `YYYY-MM-DD` date
pub(crate) fn required_date(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_or_else(
        |_| {
            errors.add(field, INVALID_DATE);
            None
        },
        Some,
    )
}

/// One of a fixed set of choices, by stored value
pub(crate) fn required_choice<T: FromStr>(
    errors: &mut FieldErrors,
    field: &str,
    raw: &str,
) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() {
        errors.add(field, REQUIRED);
        return None;
    }
    raw.parse().map_or_else(
        |_| {
            errors.add(
                field,
                format!("Select a valid choice. {raw} is not one of the available choices."),
            );
            None
        },
        Some,
    )
}

/// HTML checkboxes are present when ticked and absent otherwise
pub(crate) fn checkbox(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| !value.is_empty() && value != "off" && value != "false")
}

/// Render an optional number back into an input value
pub(crate) fn display_optional<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
