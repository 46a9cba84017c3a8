//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use chrono::Duration;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_EXPIRATION_HOURS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    MAX_JWT_EXPIRATION_HOURS, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Secret used by debug builds when `JWT_SECRET` is missing.
const DEV_JWT_SECRET: &str = "dev-secret-key-minimum-32-chars!!";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub jwt_expiration_hours: i64,
    pub server_host: String,
    pub server_port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiration_hours", &self.jwt_expiration_hours)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Release builds refuse to start without `JWT_SECRET`; debug builds fall
    /// back to an insecure development secret and log a warning.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                DEV_JWT_SECRET.to_string()
            }
            Err(_) => {
                return Err(AppError::internal(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let jwt_expiration_hours = parse_setting(
            "JWT_EXPIRATION_HOURS",
            env::var("JWT_EXPIRATION_HOURS").ok(),
            DEFAULT_JWT_EXPIRATION_HOURS,
        )?;
        let server_port = parse_setting(
            "SERVER_PORT",
            env::var("SERVER_PORT").ok(),
            DEFAULT_SERVER_PORT,
        )?;

        Self::new(
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            jwt_expiration_hours,
        )
        .map(|config| Self {
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port,
            ..config
        })
    }

    /// Build a configuration from explicit values, with default server address.
    ///
    /// # Errors
    /// Returns an internal error if the secret is shorter than
    /// [`MIN_JWT_SECRET_LENGTH`] or the validity window is not positive.
    pub fn new(
        database_url: impl Into<String>,
        jwt_secret: impl Into<String>,
        jwt_expiration_hours: i64,
    ) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(AppError::internal(format!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LENGTH
            )));
        }
        if !(1..=MAX_JWT_EXPIRATION_HOURS).contains(&jwt_expiration_hours) {
            return Err(AppError::internal(format!(
                "JWT_EXPIRATION_HOURS must be between 1 and {} hours",
                MAX_JWT_EXPIRATION_HOURS
            )));
        }

        Ok(Self {
            database_url: database_url.into(),
            jwt_secret,
            jwt_expiration_hours,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
        })
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Token validity window as a duration.
    pub fn token_validity(&self) -> Duration {
        Duration::hours(self.jwt_expiration_hours)
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Parse an optional raw setting, falling back to `default` only when unset.
fn parse_setting<T: FromStr>(name: &str, raw: Option<String>, default: T) -> AppResult<T> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| {
            AppError::internal(format!("{} has an invalid value: {:?}", name, value))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    #[test]
    fn test_short_secret_rejected() {
        let result = Config::new("postgres://localhost/db", "secret", 10);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_positive_window_rejected() {
        assert!(Config::new("postgres://localhost/db", SECRET, 0).is_err());
        assert!(Config::new("postgres://localhost/db", SECRET, -5).is_err());
    }

    #[test]
    fn test_window_upper_bound() {
        let max = MAX_JWT_EXPIRATION_HOURS;
        assert!(Config::new("postgres://localhost/db", SECRET, max).is_ok());
        assert!(Config::new("postgres://localhost/db", SECRET, max + 1).is_err());
        assert!(Config::new("postgres://localhost/db", SECRET, 3_000_000_000).is_err());
    }

    #[test]
    fn test_unset_setting_uses_default() {
        assert_eq!(parse_setting("SERVER_PORT", None, 3000u16).unwrap(), 3000);
        assert_eq!(
            parse_setting("JWT_EXPIRATION_HOURS", Some(" 12 ".to_string()), 10i64).unwrap(),
            12
        );
    }

    #[test]
    fn test_unparseable_setting_is_an_error() {
        assert!(parse_setting("JWT_EXPIRATION_HOURS", Some("10h".to_string()), 10i64).is_err());
        assert!(parse_setting("SERVER_PORT", Some("70000".to_string()), 3000u16).is_err());
    }

    #[test]
    fn test_token_validity_from_hours() {
        let config = Config::new("postgres://localhost/db", SECRET, 10).unwrap();
        assert_eq!(config.token_validity(), Duration::hours(10));
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::new("postgres://user:pw@localhost/db", SECRET, 10).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains(SECRET));
        assert!(!debug.contains("pw@localhost"));
        assert!(debug.contains("[REDACTED]"));
    }
}
