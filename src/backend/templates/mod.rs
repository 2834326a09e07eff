//! Template Catalog Module
//!
//! Read-only starting designs shown on the dashboard.
//!
//! - **`store`** - `TemplateStore` trait with PostgreSQL and in-memory implementations
//! - **`handlers`** - `GET /api/templates` and `GET /api/templates/categories`

/// Template stores
pub mod store;

/// HTTP handlers
pub mod handlers;

pub use store::{MemoryTemplateStore, PgTemplateStore, TemplateStore};
pub use handlers::{list_categories, list_templates};
