//! Shared Module
//!
//! This module contains the data structures exchanged with the browser editor
//! and the configuration shared by every backend component. These types are
//! serialized as JSON over the HTTP API.

/// Project data structures
pub mod project;

/// Template catalog entries
pub mod template;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use project::{Project, ProjectCreate, ProjectUpdate};
pub use template::{Template, TemplateCategories};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
