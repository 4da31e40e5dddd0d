//! Server configuration.

use std::net::SocketAddr;

use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;
/// Default SQLite file, created next to the working directory.
pub const DEFAULT_DB_PATH: &str = "game.db";

/// Resolved settings for one server run.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct ServerConfig {
    /// Host or IP to bind.
    host: String,
    /// TCP port to bind.
    port: u16,
    /// Path of the SQLite database file.
    db_path: String,
}

impl ServerConfig {
    /// `host:port` as a display string.
    #[instrument(skip(self))]
    pub fn bind_address(&self) -> String {
        match self.host.parse::<std::net::IpAddr>() {
            Ok(ip) => SocketAddr::new(ip, self.port).to_string(),
            Err(_) => format!("{}:{}", self.host, self.port),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_HOST.to_string(),
            DEFAULT_PORT,
            DEFAULT_DB_PATH.to_string(),
        )
    }
}
