// ABOUTME: Core types and constants for the Moreta fitness coaching application
// ABOUTME: Foundation crate with error handling, domain models, validation, and dashboard metrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

#![deny(unsafe_code)]

//! # Moreta Core
//!
//! Foundation crate providing shared types for the Moreta coaching platform.
//! Nothing in here touches the database or the network, so it changes rarely
//! and keeps the web crate's incremental builds cheap.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `FieldErrors`
//! - **constants**: Unit conversions, field limits and dashboard sizing
//! - **models**: Users, client profiles, workouts, progress, nutrition plans, messages
//! - **metrics**: BMI, completion rate and weight-trend computations for the dashboard

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models and their field validation
pub mod models;

/// Derived dashboard values computed from stored data
pub mod metrics;
