//! Backend Error Module
//!
//! This module defines error types specific to the backend server.
//! These errors are used in HTTP handlers and can be converted to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and the status/message mapping
//! ├── store.rs      - StoreError shared by all store implementations
//! ├── conversion.rs - IntoResponse implementation
//! └── rejection.rs  - ApiJson extractor mapping body rejections to 400
//! ```
//!
//! # Error Types
//!
//! - `BackendError` - Returned by every handler
//! - `StoreError` - Returned by user/project/template stores
//!
//! Authentication failures (`AuthError`) live in `backend::auth` and convert
//! into `BackendError` with `?`.

/// Error type definitions
pub mod types;

/// Store error type
pub mod store;

/// Error conversion implementations
pub mod conversion;

/// JSON extractor with a `BackendError` rejection
pub mod rejection;

// Re-export commonly used types
pub use types::BackendError;
pub use store::StoreError;
pub use conversion::ErrorBody;
pub use rejection::ApiJson;
