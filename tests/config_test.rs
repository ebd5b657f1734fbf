// ABOUTME: Tests for environment-driven server configuration
// ABOUTME: Mutates process environment variables, so every test runs serially
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness
#![allow(clippy::unwrap_used)]

use std::env;

use moreta_fitness::config::{DatabaseUrl, Environment, ServerConfig};
use serial_test::serial;

const VARS: [&str; 6] = [
    "ENVIRONMENT",
    "HTTP_PORT",
    "DATABASE_URL",
    "SESSION_SECRET",
    "SESSION_EXPIRY_HOURS",
    "BCRYPT_COST",
];

fn clear_env() {
    for key in VARS {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_defaults_apply_when_unset() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 8000);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(
        config.database.url,
        DatabaseUrl::parse_url("sqlite:./data/moreta.db")
    );
    assert_eq!(config.auth.bcrypt_cost, bcrypt::DEFAULT_COST);
    // A generated secret stands in until one is configured
    assert!(!config.auth.session_secret.is_empty());
}

#[test]
#[serial]
fn test_overrides_are_read() {
    clear_env();
    env::set_var("HTTP_PORT", "9100");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("SESSION_SECRET", "a-long-configured-secret");
    env::set_var("BCRYPT_COST", "6");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.http_port, 9100);
    assert_eq!(config.database.url, DatabaseUrl::Memory);
    assert_eq!(config.auth.session_secret, b"a-long-configured-secret".to_vec());
    assert_eq!(config.auth.bcrypt_cost, 6);

    clear_env();
}

#[test]
#[serial]
fn test_production_requires_session_secret() {
    clear_env();
    env::set_var("ENVIRONMENT", "production");

    assert!(ServerConfig::from_env().is_err());

    env::set_var("SESSION_SECRET", "prod-secret-value");
    let config = ServerConfig::from_env().unwrap();
    assert!(config.environment.is_production());

    clear_env();
}

#[test]
#[serial]
fn test_malformed_values_are_rejected() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("BCRYPT_COST", "99");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("SESSION_EXPIRY_HOURS", "0");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
}
