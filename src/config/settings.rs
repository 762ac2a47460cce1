//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use common::{DatabaseConfig, ServerConfig};

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL, DEFAULT_REQUEST_TIMEOUT_SECONDS,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_SHUTDOWN_GRACE_SECONDS,
};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is read first when present. Unset or unparsable values
    /// fall back to the defaults in `config::constants`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: parse_var(
                    "DATABASE_MAX_CONNECTIONS",
                    DEFAULT_DATABASE_MAX_CONNECTIONS,
                ),
            },
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
                port: parse_var("SERVER_PORT", DEFAULT_SERVER_PORT),
                request_timeout_seconds: parse_var(
                    "REQUEST_TIMEOUT_SECONDS",
                    DEFAULT_REQUEST_TIMEOUT_SECONDS,
                ),
                shutdown_grace_seconds: parse_var(
                    "SHUTDOWN_GRACE_SECONDS",
                    DEFAULT_SHUTDOWN_GRACE_SECONDS,
                ),
            },
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        self.server.addr()
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("{} has invalid value {:?}, using default", key, raw);
            default
        }),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_var_falls_back_on_garbage() {
        env::set_var("TASK_MANAGER_TEST_PORT", "not-a-port");
        assert_eq!(parse_var("TASK_MANAGER_TEST_PORT", 8010u16), 8010);

        env::set_var("TASK_MANAGER_TEST_PORT", "9000");
        assert_eq!(parse_var("TASK_MANAGER_TEST_PORT", 8010u16), 9000);
    }

    #[test]
    fn debug_output_hides_database_url() {
        let config = Config {
            database: DatabaseConfig::default(),
            server: ServerConfig::default(),
        };
        let printed = format!("{:?}", config);
        assert!(!printed.contains("test:test"));
        assert_eq!(config.server_addr(), "0.0.0.0:8010");
    }
}
