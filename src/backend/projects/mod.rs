//! Projects Module
//!
//! A user's saved canvases and the ownership guard in front of them.
//!
//! - **`store`** - `ProjectStore` trait with PostgreSQL and in-memory implementations
//! - **`guard`** - `ProjectGuard`, the resource access check
//! - **`handlers`** - `/api/projects` CRUD and the export stub

pub mod store;
pub mod guard;
pub mod handlers;

pub use guard::{authorize_owner, ProjectGuard};
pub use handlers::{create_project, delete_project, export_project, get_project, list_projects, update_project};
pub use store::{MemoryProjectStore, PgProjectStore, ProjectStore};
