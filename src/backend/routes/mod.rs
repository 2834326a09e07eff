//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! - **`router`** - Main router creation, CORS and tracing layers, 404 fallback
//! - **`api_routes`** - Public and protected `/api` routes
//! - **`health`** - Health check handler
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - API endpoint routes
//! └── health.rs       - GET /api/health
//! ```

/// Main router creation
pub mod router;

/// API endpoint routes
pub mod api_routes;

/// Health check
pub mod health;

pub use router::{cors_layer, create_router};
