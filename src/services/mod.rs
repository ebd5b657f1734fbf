// ABOUTME: Domain service layer for logic that spans several tables
// ABOUTME: Keeps route handlers thin; handlers parse input and render output only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! Domain service layer

/// Dashboard aggregation and derived metrics
pub mod dashboard;

pub use dashboard::{load_dashboard, DashboardData};
