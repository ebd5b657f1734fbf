// ABOUTME: Configuration module for the Moreta server
// ABOUTME: Environment-driven settings for the HTTP listener, database and sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! Configuration is read once from environment variables at startup; there are
//! no configuration files.

/// Environment variable parsing into typed server settings
pub mod environment;

pub use environment::{AuthConfig, DatabaseConfig, DatabaseUrl, Environment, ServerConfig};
