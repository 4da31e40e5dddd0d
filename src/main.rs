//! Strictly RPS - HTTP server entry point.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use strictly_rps::{AppState, GameRepository, RandomOpponent, ServerConfig, create_router};
use tracing::{info, instrument, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cli.config();
    match cli.command.unwrap_or_default() {
        Command::Serve => run_server(config).await,
        Command::Migrate => run_migrate(config),
    }
}

/// Creates the schema and exits.
#[instrument(skip_all, fields(db_path = %config.db_path()))]
fn run_migrate(config: ServerConfig) -> Result<()> {
    GameRepository::open(config.db_path())?;
    info!("Database ready");
    Ok(())
}

/// Runs the HTTP server until Ctrl-C.
#[instrument(skip_all, fields(addr = %config.bind_address(), db_path = %config.db_path()))]
async fn run_server(config: ServerConfig) -> Result<()> {
    let repository = GameRepository::open(config.db_path())?;
    let state = AppState::from_parts(Arc::new(repository), Arc::new(RandomOpponent));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host().as_str(), *config.port())).await?;
    info!("Server ready at http://{}/", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
    }
}
