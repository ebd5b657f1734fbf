// ABOUTME: Derived values shown on the client dashboard
// ABOUTME: BMI from imperial measurements, workout completion rate, and weight-trend chart points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

use serde::Serialize;

use crate::constants::dashboard::{
    TREND_BAR_SPACING, TREND_DATE_FORMAT, TREND_HEIGHT_OFFSET, TREND_HEIGHT_SCALE,
    WEIGHT_TREND_POINTS,
};
use crate::constants::units::{INCHES_PER_FOOT, KG_PER_POUND, METERS_PER_INCH};
use crate::models::ProgressEntry;

/// Round half away from zero to one decimal place
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Body-mass index from feet, inches and pounds
///
/// Returns `None` unless both height parts are present, the total height is
/// positive and the weight is positive.
#[must_use]
pub fn bmi(
    height_feet: Option<i32>,
    height_inches: Option<i32>,
    weight_lbs: Option<f64>,
) -> Option<f64> {
    let (feet, inches, weight) = (height_feet?, height_inches?, weight_lbs?);
    if weight <= 0.0 {
        return None;
    }
    let total_inches = feet * INCHES_PER_FOOT + inches;
    if total_inches <= 0 {
        return None;
    }
    let meters = f64::from(total_inches) * METERS_PER_INCH;
    let kilograms = weight * KG_PER_POUND;
    Some(round_to_tenth(kilograms / (meters * meters)))
}

/// Percentage of assignments completed, rounded to one decimal
#[must_use]
pub fn completion_rate(total: u32, completed: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round_to_tenth(f64::from(completed) / f64::from(total) * 100.0)
}

/// One bar of the weight-trend chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightTrendPoint {
    /// `MM/DD` label
    pub date: String,
    /// Weight in pounds
    pub weight: f64,
    /// Horizontal position in pixels
    pub left: u32,
    /// Bar height in pixels
    pub height: f64,
}

/// Chart points from progress entries ordered newest first
///
/// The newest [`WEIGHT_TREND_POINTS`] entries are plotted oldest first. An
/// entry without a weight produces no bar but keeps its slot.
#[must_use]
pub fn weight_trend(recent_newest_first: &[ProgressEntry]) -> Vec<WeightTrendPoint> {
    let window = &recent_newest_first[..recent_newest_first.len().min(WEIGHT_TREND_POINTS)];
    window
        .iter()
        .rev()
        .zip(1_u32..)
        .filter_map(|(entry, slot)| {
            entry.weight.map(|weight| WeightTrendPoint {
                date: entry.date.format(TREND_DATE_FORMAT).to_string(),
                weight,
                left: slot * TREND_BAR_SPACING,
                height: (weight + TREND_HEIGHT_OFFSET) * TREND_HEIGHT_SCALE,
            })
        })
        .collect()
}
