//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! - **`state`** - `AppState`, `Stores` and `FromRef` implementations
//! - **`config`** - Environment loading and database pool
//! - **`init`** - App creation
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `load_config` reads and validates the environment
//! 2. **Database**: `load_database` opens the pool and runs migrations when configured
//! 3. **State Creation**: stores, auth service and project guard go into `AppState`
//! 4. **Router Creation**: routes, auth middleware, CORS and tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{load_config, load_database};
pub use init::{create_app, create_state};
pub use state::{AppState, Stores};
