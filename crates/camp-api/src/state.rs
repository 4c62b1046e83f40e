//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor, and the environment-driven configuration it
//! is built from.

use sqlx::SqlitePool;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 5555;

/// Default database: a file next to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://camp.db";

/// Runtime configuration for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to.
    pub port: u16,
    /// SQLx connection string.
    pub database_url: String,
    /// Emit JSON log lines instead of human-readable text.
    pub json_logs: bool,
}

impl AppConfig {
    /// Read `PORT`, `DATABASE_URL` and `LOG_FORMAT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "PORT is not a valid port number, using default");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let json_logs = lookup("LOG_FORMAT")
            .map(|v| v.eq_ignore_ascii_case("json"))
            .unwrap_or(false);

        Self {
            port,
            database_url,
            json_logs,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            json_logs: false,
        }
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: AppConfig) -> Self {
        Self { pool, config }
    }
}
