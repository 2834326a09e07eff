/**
 * Server Initialization
 *
 * This module assembles the application: open the database if configured,
 * pick the matching stores, build `AppState`, and create the router.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_database;
use crate::backend::server::state::{AppState, Stores};
use crate::shared::AppConfig;

/// Build the application state for a configuration
///
/// PostgreSQL stores when a pool could be opened, in-memory stores otherwise.
///
/// # Errors
///
/// Database connection or migration failure when `DATABASE_URL` is set.
pub async fn create_state(config: AppConfig) -> Result<AppState, sqlx::Error> {
    let db_pool = load_database(&config).await?;

    let stores = match &db_pool {
        Some(pool) => Stores::postgres(pool.clone()),
        None => Stores::in_memory(),
    };

    Ok(AppState::new(config, stores, db_pool))
}

/// Create and configure the Axum application
///
/// # Returns
///
/// The router and the state it serves, so the caller can close the pool on
/// shutdown.
pub async fn create_app(config: AppConfig) -> Result<(Router<()>, AppState), sqlx::Error> {
    tracing::info!("Initializing PicEditor backend server");

    let state = create_state(config).await?;
    let app = create_router(state.clone());

    tracing::info!("Router configured");

    Ok((app, state))
}
