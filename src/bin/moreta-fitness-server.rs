// ABOUTME: HTTP server binary for the Moreta coaching web application
// ABOUTME: Loads configuration, opens the database, serves the router until Ctrl-C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Moreta Fitness

//! # Moreta Fitness Server Binary
//!
//! ```bash
//! DATABASE_URL=sqlite:./data/moreta.db SESSION_SECRET=change-me \
//!     moreta-fitness-server --http-port 8000
//! ```

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use moreta_fitness::config::{DatabaseUrl, ServerConfig};
use moreta_fitness::logging;
use moreta_fitness::resources::ServerResources;
use moreta_fitness::routes::build_router;
use tokio::net::TcpListener;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "moreta-fitness-server")]
#[command(about = "Moreta Fitness - coaching web application server")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL (`sqlite:<path>` or `sqlite::memory:`)
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = DatabaseUrl::parse_url(&database_url);
    }

    info!("Starting Moreta Fitness server");
    let http_port = config.http_port;
    let resources = ServerResources::initialize(config)
        .await
        .context("Failed to initialize server resources")?;
    let router = build_router(resources);

    let addr = SocketAddr::from(([0, 0, 0, 0], http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!(%addr, "Listening");

    if let Err(e) = axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(error = %e, "Server error");
        return Err(e.into());
    }

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl-C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => error!(error = %e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
