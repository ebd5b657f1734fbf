// ABOUTME: Shared resource container handed to every request handler
// ABOUTME: Owns the database pool, session token manager, security header policy and config
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Server Resources
//!
//! Built once at startup and cloned into the router state. Cloning only bumps
//! reference counts.

use std::sync::Arc;

use tracing::info;

use crate::auth::AuthManager;
use crate::config::ServerConfig;
use crate::database::Database;
use crate::errors::AppResult;
use crate::security::SecurityConfig;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Connection pool and entity queries
    pub database: Arc<Database>,
    /// Session token signing and validation
    pub auth_manager: Arc<AuthManager>,
    /// Response header policy
    pub security: Arc<SecurityConfig>,
    /// Startup configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Wrap already-built components
    #[must_use]
    pub fn new(database: Database, config: ServerConfig) -> Self {
        let auth_manager = AuthManager::new(&config.auth);
        let security = SecurityConfig::for_environment(config.environment);
        Self {
            database: Arc::new(database),
            auth_manager: Arc::new(auth_manager),
            security: Arc::new(security),
            config: Arc::new(config),
        }
    }

    /// Connect to the configured database and build the container
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn initialize(config: ServerConfig) -> AppResult<Self> {
        let database = Database::connect(&config.database).await?;
        info!(
            environment = %config.environment,
            database = %config.database.url,
            "Server resources initialized"
        );
        Ok(Self::new(database, config))
    }

    /// Whether cookies should carry the `Secure` attribute
    #[must_use]
    pub fn secure_cookies(&self) -> bool {
        self.config.environment.is_production()
    }
}
