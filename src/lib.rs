//! PicEditor - Main Library
//!
//! Backend for a browser-based picture editor: accounts, saved canvases, a
//! template catalog and image uploads, served over a JSON HTTP API.
//!
//! # Module Structure
//!
//! - **`shared`** - Domain types and configuration
//!   - Projects, templates, validation errors
//!   - `AppConfig` and its builder
//!
//! - **`backend`** - Server-side code
//!   - Axum router, middleware and handlers
//!   - Credential hashing, signed tokens, identity resolution
//!   - Project ownership guard
//!   - PostgreSQL and in-memory stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use piceditor::backend::server::{create_app, load_config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let (app, _state) = create_app(load_config()?).await?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Types and configuration shared across the crate
pub mod shared;

/// Server-side code
pub mod backend;
