//! Command-line interface for strictly_rps.

use clap::{Parser, Subcommand};
use strictly_rps::{DEFAULT_DB_PATH, DEFAULT_HOST, DEFAULT_PORT, ServerConfig};

/// Strictly RPS - rock-paper-scissors against the computer over HTTP
#[derive(Parser, Debug)]
#[command(name = "strictly_rps")]
#[command(about = "Rock-paper-scissors HTTP service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Host to bind to
    #[arg(long, env = "RPS_HOST", default_value = DEFAULT_HOST, global = true)]
    pub host: String,

    /// Port to bind to
    #[arg(short, long, env = "RPS_PORT", default_value_t = DEFAULT_PORT, global = true)]
    pub port: u16,

    /// Path to the database file (created if it doesn't exist)
    #[arg(long, env = "RPS_DB_PATH", default_value = DEFAULT_DB_PATH, global = true)]
    pub db_path: String,

    /// Subcommand to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, Default)]
pub enum Command {
    /// Run the HTTP game server
    #[default]
    Serve,

    /// Create or upgrade the database schema, then exit
    Migrate,
}

impl Cli {
    /// Collects the server settings from the parsed arguments.
    pub fn config(&self) -> ServerConfig {
        ServerConfig::new(self.host.clone(), self.port, self.db_path.clone())
    }
}
