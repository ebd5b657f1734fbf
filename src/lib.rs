// ABOUTME: Main library entry point for the Moreta fitness coaching web application
// ABOUTME: Server-rendered pages for clients and coaches over an SQLite store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

#![deny(unsafe_code)]

//! # Moreta Fitness
//!
//! A coaching web application: clients register, keep a profile, receive
//! assigned workouts, log body-composition progress, read their nutrition
//! plans and exchange messages with their coach. Coaches (staff users) manage
//! the workout catalog, assignments and nutrition plans from the coach console.
//!
//! ## Architecture
//!
//! - **Database**: `sqlx` over `SQLite`, one `impl Database` block per entity
//! - **Auth**: bcrypt password hashes and HS256 session tokens in a cookie
//! - **Forms**: urlencoded form parsing into validated domain types
//! - **Views**: HTML pages assembled from a base template
//! - **Routes**: axum handlers following Post/Redirect/Get with flash messages
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use moreta_fitness::config::ServerConfig;
//! use moreta_fitness::resources::ServerResources;
//! use moreta_fitness::routes::build_router;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let resources = ServerResources::initialize(config).await?;
//!     let router = build_router(resources);
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//!     axum::serve(listener, router).await?;
//!     Ok(())
//! }
//! ```

/// Password hashing and session tokens
pub mod auth;

/// Environment-driven configuration
pub mod config;

/// Server defaults, cookie names, paths and flash text
pub mod constants;

/// `SQLite` storage
pub mod database;

/// Error types re-exported from `moreta-core`
pub mod errors;

/// Form parsing and validation
pub mod forms;

/// Structured logging setup
pub mod logging;

/// Request extractors and tracing layers
pub mod middleware;

/// Shared state handed to every handler
pub mod resources;

/// HTTP routes
pub mod routes;

/// Cookie handling for sessions and flash messages
pub mod security;

/// Read-side aggregation for the dashboard
pub mod services;

/// HTML page rendering
pub mod views;

/// Domain models re-exported from `moreta-core`
pub mod models {
    pub use moreta_core::models::*;
}

/// Test utilities for creating consistent test data
#[cfg(any(test, feature = "testing"))]
pub mod test_utils;
