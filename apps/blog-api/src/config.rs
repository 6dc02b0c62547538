//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use blog_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// `None` runs the service on the in-memory store.
    pub database: Option<DatabaseConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Configuration for the test harness: loopback, ephemeral port and
    /// the store named by `TEST_DATABASE_URL` (in-memory when unset).
    pub fn for_tests() -> Self {
        let lookup = |key: &str| env::var(key).ok();
        Self {
            database: database_from(&lookup, "TEST_DATABASE_URL"),
            ..Self::in_memory()
        }
    }

    /// Loopback, ephemeral port, in-memory store.
    pub fn in_memory() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: None,
        }
    }

    /// Build from any key/value source. Unparseable values fall back to
    /// their defaults.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&lookup, "PORT", 8080),
            database: database_from(&lookup, "DATABASE_URL"),
        }
    }
}

fn database_from(
    lookup: &impl Fn(&str) -> Option<String>,
    url_var: &str,
) -> Option<DatabaseConfig> {
    lookup(url_var)
        .filter(|url| !url.trim().is_empty())
        .map(|url| DatabaseConfig {
            url,
            max_connections: parse_or(lookup, "DB_MAX_CONNECTIONS", 100),
            min_connections: parse_or(lookup, "DB_MIN_CONNECTIONS", 10),
            connect_timeout: Duration::from_secs(parse_or(lookup, "DB_CONNECT_TIMEOUT_SECS", 10)),
        })
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
