/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration and
 * opening the record store.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables (a `.env` file is loaded
 * first by the binary), with defaults suitable for local development:
 *
 * - `DATABASE_URL` - SQLite URL, default `sqlite://promcare.db`
 * - `DATABASE_MAX_CONNECTIONS` - pool size, default 5
 * - `SERVER_PORT` - listen port, default 3000
 * - `KEEP_ALIVE_URL` - optional URL pinged periodically
 * - `KEEP_ALIVE_INTERVAL_SECS` - ping interval, default 840
 *
 * # Error Handling
 *
 * Unlike optional integrations, the record store is required: failure to
 * connect or migrate aborts startup with a `StartupError`.
 */

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://promcare.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_KEEP_ALIVE_INTERVAL: Duration = Duration::from_secs(840);

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Errors that abort server startup
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Periodic self-ping settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepAlive {
    pub url: String,
    pub interval: Duration,
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub port: u16,
    pub keep_alive: Option<KeepAlive>,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }
        if let Some(raw) = lookup("DATABASE_MAX_CONNECTIONS") {
            builder = builder.max_connections(parse_number("DATABASE_MAX_CONNECTIONS", &raw)?);
        }
        if let Some(raw) = lookup("SERVER_PORT") {
            builder = builder.port(parse_number("SERVER_PORT", &raw)?);
        }
        if let Some(url) = lookup("KEEP_ALIVE_URL").filter(|url| !url.trim().is_empty()) {
            let interval = match lookup("KEEP_ALIVE_INTERVAL_SECS") {
                Some(raw) => Duration::from_secs(parse_number("KEEP_ALIVE_INTERVAL_SECS", &raw)?),
                None => DEFAULT_KEEP_ALIVE_INTERVAL,
            };
            builder = builder.keep_alive(url, interval);
        }

        builder.build()
    }

    /// Address the HTTP listener binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_number<T: FromStr>(key: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    database_url: Option<String>,
    max_connections: Option<u32>,
    port: Option<u16>,
    keep_alive: Option<KeepAlive>,
}

impl ServerConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn keep_alive(mut self, url: impl Into<String>, interval: Duration) -> Self {
        self.keep_alive = Some(KeepAlive {
            url: url.into(),
            interval,
        });
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let database_url = self
            .database_url
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(ConfigError::MissingValue("DATABASE_URL"));
        }

        let max_connections = self.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS);
        if max_connections == 0 {
            return Err(ConfigError::InvalidNumber {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        if let Some(keep_alive) = &self.keep_alive {
            if keep_alive.interval.is_zero() {
                return Err(ConfigError::InvalidNumber {
                    key: "KEEP_ALIVE_INTERVAL_SECS",
                    value: "0".to_string(),
                });
            }
        }

        Ok(ServerConfig {
            database_url,
            max_connections,
            port: self.port.unwrap_or(DEFAULT_PORT),
            keep_alive: self.keep_alive,
        })
    }
}

/// Open the record store and bring its schema up to date
///
/// In-memory URLs are pinned to a single connection that never expires;
/// every pooled connection would otherwise see its own empty database.
pub async fn load_database(url: &str, max_connections: u32) -> Result<SqlitePool, StartupError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    let pool_options = if url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}
