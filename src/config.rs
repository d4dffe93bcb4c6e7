//! Application configuration module
//!
//! Handles loading and validating configuration from environment variables.

use serde::Deserialize;
use std::net::Ipv4Addr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: Ipv4Addr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::new(0, 0, 0, 0), // Bind to 0.0.0.0 for Docker
            port: 3000,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database: String,
    pub max_pool_size: usize,
    /// Seconds to wait for a pooled connection before failing the request
    pub pool_timeout_secs: u64,
    pub use_tls: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            database: "postgres".to_string(),
            max_pool_size: 10,
            pool_timeout_secs: 5,
            use_tls: false,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["http://localhost:3001".to_string()],
        }
    }
}

/// Complete application settings
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

impl Settings {
    /// Load settings from environment variables
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists (ignore errors if file not found)
        let _ = dotenvy::dotenv();

        let server = ServerConfig {
            host: std::env::var("HOST")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or_else(|| ServerConfig::default().host),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(|| ServerConfig::default().port),
        };

        // Try DATABASE_URL first, fall back to individual vars
        let database = if let Ok(database_url) = std::env::var("DATABASE_URL") {
            parse_database_url(&database_url)?
        } else {
            DatabaseConfig {
                host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
                port: std::env::var("DB_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5432),
                user: std::env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string()),
                password: std::env::var("DB_PASSWORD").unwrap_or_default(),
                database: std::env::var("DB_NAME").unwrap_or_else(|_| "postgres".to_string()),
                max_pool_size: pool_size_from_env(),
                pool_timeout_secs: pool_timeout_from_env(),
                use_tls: false,
            }
        };

        let cors = CorsConfig {
            allowed_origins: std::env::var("ALLOWED_ORIGINS")
                .ok()
                .map(|s| parse_origins(&s))
                .unwrap_or_else(|| CorsConfig::default().allowed_origins),
        };

        Ok(Self {
            server,
            database,
            cors,
        })
    }
}

/// Configuration for the run-once migration and diagnostic programs.
///
/// Unlike the server these never fall back to built-in credentials: the
/// connection string must come from the environment.
#[derive(Debug, Clone)]
pub struct ScriptConfig {
    pub database: DatabaseConfig,
}

impl ScriptConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingVar("DATABASE_URL".to_string()))?;

        Self::from_url(&database_url)
    }

    /// A script holds exactly one connection
    pub fn from_url(database_url: &str) -> Result<Self, ConfigError> {
        let database = DatabaseConfig {
            max_pool_size: 1,
            ..parse_database_url(database_url)?
        };
        Ok(Self { database })
    }
}

/// Parse a DATABASE_URL connection string (postgresql://...)
pub fn parse_database_url(url: &str) -> Result<DatabaseConfig, ConfigError> {
    let parsed = url::Url::parse(url).map_err(|_| {
        ConfigError::InvalidValue(
            "Invalid DATABASE_URL format (expected postgresql://...)".to_string(),
        )
    })?;

    if !matches!(parsed.scheme(), "postgres" | "postgresql") {
        return Err(ConfigError::InvalidValue(format!(
            "Unsupported DATABASE_URL scheme: {}",
            parsed.scheme()
        )));
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| ConfigError::InvalidValue("Missing host in DATABASE_URL".to_string()))?
        .to_string();

    let database = parsed.path().trim_start_matches('/').to_string();
    if database.is_empty() {
        return Err(ConfigError::InvalidValue(
            "Missing database name in DATABASE_URL".to_string(),
        ));
    }

    // Neon only accepts TLS connections
    let use_tls = host.contains("neon.tech")
        || parsed
            .query_pairs()
            .any(|(key, value)| key == "sslmode" && (value == "require" || value == "verify-full"));

    Ok(DatabaseConfig {
        host,
        port: parsed.port().unwrap_or(5432),
        user: parsed.username().to_string(),
        password: parsed.password().map(|p| p.to_string()).unwrap_or_default(),
        database,
        max_pool_size: pool_size_from_env(),
        pool_timeout_secs: pool_timeout_from_env(),
        use_tls,
    })
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn pool_size_from_env() -> usize {
    std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(10)
}

fn pool_timeout_from_env() -> u64 {
    std::env::var("DB_POOL_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5)
}
