//! Authentication Module
//!
//! This module handles credential hashing, token issuance and verification,
//! identity resolution, and the HTTP handlers for the auth endpoints.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── error.rs        - AuthError taxonomy
//! ├── password.rs     - bcrypt credential hasher
//! ├── sessions.rs     - Signed bearer tokens (HS256)
//! ├── users.rs        - User model and stores
//! ├── identity.rs     - Token subject to user resolution
//! ├── validation.rs   - Signup input checks
//! ├── service.rs      - Signup / login / authenticate
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, email and password → user created → token returned
//! 2. **Login**: username and password → credentials verified → token returned
//! 3. **Authenticate**: token verified → subject resolved to an active user
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless; there is no session store
//! - Invalid credentials return 401 without saying which part was wrong

pub mod error;
pub mod password;
pub mod sessions;
pub mod users;
pub mod identity;
pub mod validation;
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use error::AuthError;
pub use handlers::{get_me, login, signup, AuthResponse, LoginRequest, SignupRequest, UserResponse};
pub use identity::IdentityResolver;
pub use password::PasswordHasher;
pub use service::{AuthService, Session};
pub use sessions::{Claims, IssuedToken, TokenRejection, TokenService};
pub use users::{MemoryUserStore, PgUserStore, User, UserStore};
