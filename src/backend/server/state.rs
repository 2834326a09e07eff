/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is built once at startup and never mutated afterwards. It holds:
 * - The validated configuration (signing secret, TTL, limits)
 * - The auth service (hasher, token service, identity resolver)
 * - The project store and the ownership guard in front of it
 * - The template catalog
 * - The database pool, when one is configured
 *
 * Durable state lives in the stores; everything else is immutable, so the
 * only synchronization is whatever the store itself needs.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of the
 * state they use, e.g. `State<Arc<AuthService>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::{AuthService, MemoryUserStore, PgUserStore, UserStore};
use crate::backend::projects::{MemoryProjectStore, PgProjectStore, ProjectGuard, ProjectStore};
use crate::backend::templates::{MemoryTemplateStore, PgTemplateStore, TemplateStore};
use crate::shared::AppConfig;

/// The three stores the backend talks to
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub projects: Arc<dyn ProjectStore>,
    pub templates: Arc<dyn TemplateStore>,
}

impl Stores {
    /// PostgreSQL stores sharing one pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            projects: Arc::new(PgProjectStore::new(pool.clone())),
            templates: Arc::new(PgTemplateStore::new(pool)),
        }
    }

    /// Empty in-memory stores
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            projects: Arc::new(MemoryProjectStore::new()),
            templates: Arc::new(MemoryTemplateStore::new()),
        }
    }
}

/// Central application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<AuthService>,
    pub projects: Arc<dyn ProjectStore>,
    pub guard: ProjectGuard,
    pub templates: Arc<dyn TemplateStore>,
    pub db_pool: Option<PgPool>,
}

impl AppState {
    /// Assemble state from configuration and stores
    pub fn new(config: AppConfig, stores: Stores, db_pool: Option<PgPool>) -> Self {
        let auth = AuthService::from_config(stores.users, &config);
        Self {
            config: Arc::new(config),
            auth: Arc::new(auth),
            guard: ProjectGuard::new(stores.projects.clone()),
            projects: stores.projects,
            templates: stores.templates,
            db_pool,
        }
    }

    /// State backed entirely by in-memory stores
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(config, Stores::in_memory(), None)
    }
}

impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(state: &AppState) -> Self {
        state.auth.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ProjectStore> {
    fn from_ref(state: &AppState) -> Self {
        state.projects.clone()
    }
}

impl FromRef<AppState> for ProjectGuard {
    fn from_ref(state: &AppState) -> Self {
        state.guard.clone()
    }
}

impl FromRef<AppState> for Arc<dyn TemplateStore> {
    fn from_ref(state: &AppState) -> Self {
        state.templates.clone()
    }
}
