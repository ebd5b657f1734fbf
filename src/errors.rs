// ABOUTME: Unified error handling re-exported from moreta-core
// ABOUTME: AppError, ErrorCode, FieldErrors and AppResult used across the web crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Unified Error Handling System
//!
//! The definitions live in `moreta_core::errors` so the domain models can
//! return them; this module keeps `crate::errors::*` paths stable for the web
//! layer. `AppError` renders itself as an HTML error page through axum's
//! `IntoResponse` (enabled by the `http-response` feature).

pub use moreta_core::errors::validation::NON_FIELD;
pub use moreta_core::errors::{AppError, AppResult, ErrorCode, FieldErrors};
