//! Application configuration loaded from environment variables.
//!
//! Fail-fast: required variables must be present and valid, or the
//! application exits with a clear error message.

use std::env;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing.
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    /// An environment variable has an invalid value.
    #[error("Invalid value for {name}: {message}")]
    Invalid {
        /// The variable name.
        name: &'static str,
        /// What was wrong with it.
        message: String,
    },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Postgres connection string.
    pub database_url: String,
    /// Maximum database pool connections.
    pub db_max_connections: u32,
    /// Shared secret for bearer-token validation.
    pub jwt_secret: String,
    /// Default log filter directive.
    pub rust_log: String,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `DATABASE_URL` or `JWT_SECRET` is missing,
    /// or a numeric variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;
        let jwt_secret = env::var("JWT_SECRET").map_err(|_| ConfigError::Missing("JWT_SECRET"))?;

        if jwt_secret.len() < 32 {
            return Err(ConfigError::Invalid {
                name: "JWT_SECRET",
                message: "must be at least 32 bytes".to_string(),
            });
        }

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_env("PORT", 8080)?;
        let db_max_connections = parse_env("DB_MAX_CONNECTIONS", 10)?;
        let rust_log =
            env::var("RUST_LOG").unwrap_or_else(|_| "info,lexrisk=debug".to_string());

        Ok(Self {
            host,
            port,
            database_url,
            db_max_connections,
            jwt_secret,
            rust_log,
        })
    }
}

fn parse_env<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(value) => value.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            message: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_database_url_reported() {
        // Clear in this test's view; env mutation is process-wide so keep the
        // assertion resilient to either missing variable.
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("JWT_SECRET");
        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }
}
