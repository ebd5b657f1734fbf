// ABOUTME: Moreta CLI - account administration and demo data for the Moreta server
// ABOUTME: Creates coach accounts, seeds demo data, deactivates and deletes users
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness
//!
//! Usage:
//! ```bash
//! # Create a staff account for the coach console
//! moreta-cli create-coach --username coach --email coach@example.com --password 'long-passphrase'
//!
//! # Load a demo coach and client with workouts, progress and a nutrition plan
//! moreta-cli seed-demo
//!
//! # Block a user from logging in
//! moreta-cli deactivate-user --username alice
//!
//! # Remove a user and everything they own
//! moreta-cli delete-user --username alice
//! ```

mod commands;

use clap::{Parser, Subcommand};
use moreta_fitness::config::{DatabaseConfig, DatabaseUrl};
use moreta_fitness::constants::defaults;
use moreta_fitness::database::Database;
use moreta_fitness::errors::AppResult;
use std::env;
use tracing::info;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "moreta-cli",
    about = "Moreta Fitness management CLI",
    long_about = "Command-line tool for managing Moreta Fitness accounts and demo data."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Database URL override
    #[arg(long, global = true)]
    database_url: Option<String>,

    /// bcrypt work factor for new passwords
    #[arg(long, global = true, default_value_t = bcrypt::DEFAULT_COST)]
    bcrypt_cost: u32,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Create a staff (coach) account
    CreateCoach {
        /// Login name
        #[arg(long)]
        username: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// First name
        #[arg(long, default_value = "")]
        first_name: String,

        /// Last name
        #[arg(long, default_value = "")]
        last_name: String,
    },

    /// Load a demo coach, client and sample data
    SeedDemo,

    /// Block a user from logging in
    DeactivateUser {
        /// Login name
        #[arg(long)]
        username: String,
    },

    /// Delete a user with their profile, assignments, progress, plans and messages
    DeleteUser {
        /// Login name
        #[arg(long)]
        username: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    let database_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| defaults::DATABASE_URL.to_owned());

    info!("Connecting to database: {}", database_url);
    let database = Database::connect(&DatabaseConfig {
        url: DatabaseUrl::parse_url(&database_url),
        max_connections: 1,
    })
    .await?;

    match cli.command {
        Command::CreateCoach {
            username,
            email,
            password,
            first_name,
            last_name,
        } => {
            commands::user::create_coach(
                &database,
                commands::user::CoachAccount {
                    username,
                    email,
                    password,
                    first_name,
                    last_name,
                },
                cli.bcrypt_cost,
            )
            .await?;
        }
        Command::SeedDemo => commands::seed::seed_demo(&database, cli.bcrypt_cost).await?,
        Command::DeactivateUser { username } => {
            commands::user::deactivate(&database, &username).await?;
        }
        Command::DeleteUser { username } => commands::user::delete(&database, &username).await?,
    }

    Ok(())
}
