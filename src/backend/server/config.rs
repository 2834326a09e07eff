/**
 * Server Configuration
 *
 * This module loads `AppConfig` from the environment and opens the optional
 * PostgreSQL pool.
 *
 * # Configuration Sources
 *
 * Environment variables (after `.env` is loaded by the binary):
 * `JWT_SECRET`, `TOKEN_TTL_MINUTES`, `BCRYPT_COST`, `SERVER_PORT`,
 * `DATABASE_URL`, `CORS_ORIGINS`, `MAX_UPLOAD_BYTES`.
 *
 * # Error Handling
 *
 * A missing or weak `JWT_SECRET`, or an unparsable number, stops startup.
 * A database that cannot be reached is fatal as well once `DATABASE_URL` is
 * set; with no `DATABASE_URL` the server runs on in-memory stores.
 */

use std::str::FromStr;

use chrono::Duration;
use sqlx::PgPool;

use crate::shared::{AppConfig, ConfigError};

/// Database configuration result
///
/// `None` when no `DATABASE_URL` is configured.
pub type DatabaseConfig = Option<PgPool>;

/// Load configuration from process environment variables
///
/// # Errors
///
/// Any `ConfigError` raised while parsing or validating.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    config_from_lookup(|key| std::env::var(key).ok())
}

/// Build configuration from an arbitrary variable lookup
///
/// Empty values are treated as unset.
pub fn config_from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
    let mut builder = AppConfig::builder();

    if let Some(secret) = get("JWT_SECRET") {
        builder = builder.jwt_secret(secret);
    }
    if let Some(minutes) = get("TOKEN_TTL_MINUTES") {
        let minutes: i64 = parse("TOKEN_TTL_MINUTES", &minutes)?;
        let ttl = Duration::try_minutes(minutes).ok_or_else(|| ConfigError::InvalidValue {
            key: "TOKEN_TTL_MINUTES",
            message: format!("{} minutes is out of range", minutes),
        })?;
        builder = builder.token_ttl(ttl);
    }
    if let Some(cost) = get("BCRYPT_COST") {
        builder = builder.bcrypt_cost(parse("BCRYPT_COST", &cost)?);
    }
    if let Some(port) = get("SERVER_PORT") {
        builder = builder.port(parse("SERVER_PORT", &port)?);
    }
    if let Some(url) = get("DATABASE_URL") {
        builder = builder.database_url(url);
    }
    if let Some(origins) = get("CORS_ORIGINS") {
        builder = builder.cors_origins(
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
        );
    }
    if let Some(bytes) = get("MAX_UPLOAD_BYTES") {
        builder = builder.max_upload_bytes(parse("MAX_UPLOAD_BYTES", &bytes)?);
    }

    builder.build()
}

fn parse<T>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        key,
        message: e.to_string(),
    })
}

/// Open the PostgreSQL pool and run migrations
///
/// This function:
/// 1. Returns `None` if no `DATABASE_URL` is configured
/// 2. Creates a PostgreSQL connection pool
/// 3. Runs the migrations in `migrations/`
///
/// # Errors
///
/// Connection or migration failure.
pub async fn load_database(config: &AppConfig) -> Result<DatabaseConfig, sqlx::Error> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Using in-memory stores; data will not survive a restart.");
        return Ok(None);
    };

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {:?}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await.map_err(|e| {
        tracing::error!("Failed to run database migrations: {}", e);
        sqlx::Error::from(e)
    })?;
    tracing::info!("Database migrations completed successfully");

    Ok(Some(pool))
}
