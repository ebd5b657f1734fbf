// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Reads port, database URL, session secret and bcrypt cost from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! Environment-based configuration management for production deployment

use std::env;
use std::fmt;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::constants::defaults;

/// Environment type for security and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// File path
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse `sqlite:<path>`, `sqlite::memory:` or a bare file path
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s
            .strip_prefix("sqlite://")
            .or_else(|| s.strip_prefix("sqlite:"))
            .unwrap_or(s);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Database settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Where the data lives
    pub url: DatabaseUrl,
    /// Pool size for file databases
    pub max_connections: u32,
}

/// Session and password hashing settings
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens
    pub session_secret: Vec<u8>,
    /// Session lifetime in hours
    pub session_expiry_hours: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("session_secret", &"[REDACTED]")
            .field("session_expiry_hours", &self.session_expiry_hours)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is malformed or `SESSION_SECRET` is
    /// missing in production
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let environment =
            Environment::from_str_or_default(&env_var_or("ENVIRONMENT", "development"));

        let http_port = env_var_or("HTTP_PORT", &defaults::HTTP_PORT.to_string())
            .parse()
            .context("Invalid HTTP_PORT value")?;

        let session_expiry_hours: i64 = env_var_or(
            "SESSION_EXPIRY_HOURS",
            &defaults::SESSION_EXPIRY_HOURS.to_string(),
        )
        .parse()
        .context("Invalid SESSION_EXPIRY_HOURS value")?;
        if session_expiry_hours <= 0 {
            bail!("SESSION_EXPIRY_HOURS must be positive");
        }

        let bcrypt_cost: u32 = env_var_or("BCRYPT_COST", &bcrypt::DEFAULT_COST.to_string())
            .parse()
            .context("Invalid BCRYPT_COST value")?;
        if !(4..=31).contains(&bcrypt_cost) {
            bail!("BCRYPT_COST must be between 4 and 31");
        }

        let config = Self {
            http_port,
            environment,
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&env_var_or("DATABASE_URL", defaults::DATABASE_URL)),
                max_connections: defaults::DB_MAX_CONNECTIONS,
            },
            auth: AuthConfig {
                session_secret: load_session_secret(environment)?,
                session_expiry_hours,
                bcrypt_cost,
            },
        };

        config.log_summary();
        Ok(config)
    }

    /// Configuration for tests: in-memory database, cheap hashing, fixed secret
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            http_port: 0,
            environment: Environment::Testing,
            database: DatabaseConfig {
                url: DatabaseUrl::Memory,
                max_connections: 1,
            },
            auth: AuthConfig {
                session_secret: b"moreta-test-session-secret-0123456789".to_vec(),
                session_expiry_hours: defaults::SESSION_EXPIRY_HOURS,
                bcrypt_cost: defaults::TEST_BCRYPT_COST,
            },
        }
    }

    fn log_summary(&self) {
        info!(
            http_port = self.http_port,
            environment = %self.environment,
            database = %self.database.url,
            session_expiry_hours = self.auth.session_expiry_hours,
            bcrypt_cost = self.auth.bcrypt_cost,
            "Configuration loaded"
        );
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn load_session_secret(environment: Environment) -> Result<Vec<u8>> {
    match env::var("SESSION_SECRET") {
        Ok(secret) if !secret.is_empty() => Ok(secret.into_bytes()),
        _ if environment.is_production() => {
            bail!("SESSION_SECRET must be set in production")
        }
        _ => {
            warn!("SESSION_SECRET not set; using a per-process secret, sessions end on restart");
            let mut secret = [0_u8; 32];
            rand::thread_rng().fill_bytes(&mut secret);
            Ok(hex::encode(secret).into_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(DatabaseUrl::parse_url("sqlite::memory:"), DatabaseUrl::Memory);
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/moreta.db"),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/moreta.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("/tmp/x.db").to_connection_string(),
            "sqlite:/tmp/x.db"
        );
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from_str_or_default("prod"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("???"), Environment::Development);
    }

    #[test]
    fn test_testing_config_uses_cheapest_valid_bcrypt_cost() {
        let cost = ServerConfig::for_testing().auth.bcrypt_cost;
        assert_eq!(cost, defaults::TEST_BCRYPT_COST);
        assert!(bcrypt::hash("pw", cost).is_ok());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let rendered = format!("{:?}", ServerConfig::for_testing().auth);
        assert!(rendered.contains("REDACTED"));
        assert!(!rendered.contains("moreta-test-session-secret"));
    }
}
