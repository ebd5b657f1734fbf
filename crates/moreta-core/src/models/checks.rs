// ABOUTME: Shared typed field checks used by model validation
// ABOUTME: Required text, length, range, and decimal magnitude rules with form-style messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use crate::errors::FieldErrors;

pub(crate) const REQUIRED: &str = "This field is required.";

pub(crate) fn required_text(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.trim().is_empty() {
        errors.add(field, REQUIRED);
    }
}

pub(crate) fn max_len(errors: &mut FieldErrors, field: &str, value: &str, max: usize) {
    let len = value.chars().count();
    if len > max {
        errors.add(
            field,
            format!("Ensure this value has at most {max} characters (it has {len})."),
        );
    }
}

pub(crate) fn non_negative_int(errors: &mut FieldErrors, field: &str, value: i32) {
    if value < 0 {
        errors.add(field, "Ensure this value is greater than or equal to 0.");
    }
}

/// Rejects negative values and values that do not fit the column's digits
pub(crate) fn decimal_in_column(
    errors: &mut FieldErrors,
    field: &str,
    value: Option<f64>,
    max_digits: u32,
    decimal_places: u32,
) {
    let Some(value) = value else {
        return;
    };
    if !value.is_finite() {
        errors.add(field, "Enter a number.");
        return;
    }
    if value < 0.0 {
        errors.add(field, "Ensure this value is greater than or equal to 0.");
        return;
    }
    let integer_digits = max_digits - decimal_places;
    let ceiling = 10_f64.powf(f64::from(integer_digits));
    if value >= ceiling {
        errors.add(
            field,
            format!(
                "Ensure that there are no more than {integer_digits} digits \
                 before the decimal point."
            ),
        );
    }
    let scaled = value * 10_f64.powf(f64::from(decimal_places));
    if (scaled - scaled.round()).abs() > 1e-6 {
        errors.add(
            field,
            format!("Ensure that there are no more than {decimal_places} decimal places."),
        );
    }
}
