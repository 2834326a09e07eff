//! Application configuration module
//!
//! `AppConfig` is built once at startup and shared read-only by every request
//! handler. The builder performs all validation so an `AppConfig` value is
//! always usable; the environment loader lives in
//! `backend::server::config`.

use std::fmt;

use chrono::Duration;
use thiserror::Error;

/// Default token lifetime in minutes
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;
/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = bcrypt::DEFAULT_COST;
/// Default listen port
pub const DEFAULT_PORT: u16 = 8001;
/// Default upload body limit (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Minimum accepted signing secret length in bytes
pub const MIN_SECRET_LEN: usize = 32;

const PLACEHOLDER_SECRETS: &[&str] = &[
    "your-secret-key-here-change-in-production",
    "your-secret-key-change-in-production",
    "changeme",
    "secret",
];

/// Application configuration
#[derive(Clone)]
pub struct AppConfig {
    jwt_secret: String,
    /// Lifetime of issued tokens
    pub token_ttl: Duration,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    /// Listen port
    pub port: u16,
    /// PostgreSQL connection URL; `None` runs on in-memory stores
    pub database_url: Option<String>,
    /// Allowed CORS origins; `["*"]` allows any origin
    pub cors_origins: Vec<String>,
    /// Request body limit for uploads
    pub max_upload_bytes: usize,
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Token signing secret
    pub fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Whether any origin may call the API
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.iter().any(|origin| origin == "*")
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("port", &self.port)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("cors_origins", &self.cors_origins)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

/// Builder for AppConfig
#[derive(Default)]
pub struct AppConfigBuilder {
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    bcrypt_cost: Option<u32>,
    port: Option<u16>,
    database_url: Option<String>,
    cors_origins: Option<Vec<String>>,
    max_upload_bytes: Option<usize>,
}

impl AppConfigBuilder {
    /// Set the token signing secret
    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    /// Set the token lifetime
    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    /// Set the bcrypt work factor
    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = Some(cost);
        self
    }

    /// Set the listen port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the PostgreSQL URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the allowed CORS origins
    pub fn cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Set the upload body limit
    pub fn max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = Some(bytes);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let jwt_secret = self.jwt_secret.ok_or(ConfigError::MissingValue("JWT_SECRET"))?;
        if PLACEHOLDER_SECRETS.contains(&jwt_secret.as_str()) {
            return Err(ConfigError::WeakSecret("placeholder value"));
        }
        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::WeakSecret("shorter than 32 bytes"));
        }

        let token_ttl = self
            .token_ttl
            .unwrap_or_else(|| Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES));
        if token_ttl <= Duration::zero() {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_MINUTES",
                message: "must be positive".to_string(),
            });
        }

        let bcrypt_cost = self.bcrypt_cost.unwrap_or(DEFAULT_BCRYPT_COST);
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                message: format!("{} is outside 4..=31", bcrypt_cost),
            });
        }

        let cors_origins = self
            .cors_origins
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(|| vec!["*".to_string()]);

        Ok(AppConfig {
            jwt_secret,
            token_ttl,
            bcrypt_cost,
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url.filter(|url| !url.trim().is_empty()),
            cors_origins,
            max_upload_bytes: self.max_upload_bytes.unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
        })
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },
    #[error("JWT_SECRET rejected: {0}")]
    WeakSecret(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn test_defaults() {
        let config = AppConfig::builder().jwt_secret(SECRET).build().unwrap();
        assert_eq!(config.token_ttl, Duration::minutes(30));
        assert_eq!(config.bcrypt_cost, bcrypt::DEFAULT_COST);
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.database_url.is_none());
        assert!(config.allows_any_origin());
        assert_eq!(config.jwt_secret(), SECRET.as_bytes());
    }

    #[test]
    fn test_missing_secret() {
        let result = AppConfig::builder().build();
        assert_eq!(result.unwrap_err(), ConfigError::MissingValue("JWT_SECRET"));
    }

    #[test]
    fn test_placeholder_secret_rejected() {
        let result = AppConfig::builder()
            .jwt_secret("your-secret-key-here-change-in-production")
            .build();
        assert!(matches!(result, Err(ConfigError::WeakSecret(_))));
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = AppConfig::builder().jwt_secret("short").build();
        assert!(matches!(result, Err(ConfigError::WeakSecret(_))));
    }

    #[test]
    fn test_invalid_cost() {
        let result = AppConfig::builder().jwt_secret(SECRET).bcrypt_cost(2).build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "BCRYPT_COST", .. })
        ));
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let result = AppConfig::builder()
            .jwt_secret(SECRET)
            .token_ttl(Duration::zero())
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: "TOKEN_TTL_MINUTES", .. })
        ));
    }

    #[test]
    fn test_blank_database_url_is_none() {
        let config = AppConfig::builder()
            .jwt_secret(SECRET)
            .database_url("  ")
            .build()
            .unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = AppConfig::builder().jwt_secret(SECRET).build().unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains(SECRET));
        assert!(debug.contains("<redacted>"));
    }
}
