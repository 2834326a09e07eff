//! Backend Module
//!
//! All server-side code for the PicEditor API: an Axum HTTP server that signs
//! users in, stores their canvases, and serves the template catalog.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Credential hashing, tokens, identity resolution, auth handlers
//! - **`projects`** - Project store, ownership guard, project handlers
//! - **`templates`** - Template catalog
//! - **`uploads`** - Image upload to data URL
//! - **`middleware`** - Bearer-token authentication
//! - **`error`** - Backend error types and HTTP mapping
//!
//! # Request Path
//!
//! A protected request passes the auth middleware, which turns the bearer
//! token into a `User`. Handlers that touch a single project then ask the
//! `ProjectGuard` before reading or writing it.
//!
//! # Example
//!
//! ```rust,no_run
//! use piceditor::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config()?;
//! let (app, _state) = create_app(config).await?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8001").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Projects and the access guard
pub mod projects;

/// Template catalog
pub mod templates;

/// Image uploads
pub mod uploads;

pub use error::BackendError;
pub use server::create_app;
