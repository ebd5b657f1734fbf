// ABOUTME: Application constants for unit conversion, field limits, and dashboard sizing
// ABOUTME: Keeps magic numbers used by validation and metrics in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

/// Unit conversion factors
pub mod units {
    /// Kilograms per pound
    pub const KG_PER_POUND: f64 = 0.453_592;
    /// Metres per inch
    pub const METERS_PER_INCH: f64 = 0.0254;
    /// Inches per foot
    pub const INCHES_PER_FOOT: i32 = 12;
}

/// Field limits mirrored from the storage schema
pub mod limits {
    /// Minimum accepted height in feet
    pub const MIN_HEIGHT_FEET: i32 = 3;
    /// Maximum accepted height in feet
    pub const MAX_HEIGHT_FEET: i32 = 8;
    /// Minimum accepted extra inches
    pub const MIN_HEIGHT_INCHES: i32 = 0;
    /// Maximum accepted extra inches
    pub const MAX_HEIGHT_INCHES: i32 = 11;
    /// Minimum accepted age
    pub const MIN_AGE: i32 = 1;
    /// Maximum accepted age
    pub const MAX_AGE: i32 = 120;
    /// Phone number length
    pub const PHONE_MAX_LEN: usize = 15;

    /// Weight and muscle mass: total digits
    pub const WEIGHT_MAX_DIGITS: u32 = 5;
    /// Weight and muscle mass: digits after the decimal point
    pub const WEIGHT_DECIMAL_PLACES: u32 = 1;
    /// Body-fat percentage: total digits
    pub const BODY_FAT_MAX_DIGITS: u32 = 4;
    /// Body-fat percentage: digits after the decimal point
    pub const BODY_FAT_DECIMAL_PLACES: u32 = 2;

    /// Lowest workout difficulty
    pub const MIN_DIFFICULTY: i32 = 1;
    /// Highest workout difficulty
    pub const MAX_DIFFICULTY: i32 = 10;

    /// Titles and subjects
    pub const TITLE_MAX_LEN: usize = 200;
    /// Usernames
    pub const USERNAME_MAX_LEN: usize = 150;
    /// First and last names
    pub const NAME_MAX_LEN: usize = 30;
    /// Minimum password length
    pub const PASSWORD_MIN_LEN: usize = 8;
}

/// Dashboard sizing and chart geometry
pub mod dashboard {
    /// Progress rows shown on the dashboard
    pub const RECENT_PROGRESS_LIMIT: usize = 10;
    /// Progress rows feeding the weight-trend chart
    pub const WEIGHT_TREND_POINTS: usize = 5;
    /// Horizontal distance between chart bars in pixels
    pub const TREND_BAR_SPACING: u32 = 60;
    /// Offset added to the weight before scaling the bar height
    pub const TREND_HEIGHT_OFFSET: f64 = 100.0;
    /// Scale applied to the offset weight for the bar height
    pub const TREND_HEIGHT_SCALE: f64 = 1.5;
    /// Chart label format (month/day)
    pub const TREND_DATE_FORMAT: &str = "%m/%d";
}
