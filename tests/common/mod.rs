//! Common test utilities and helpers
//!
//! Shared fixtures for the integration tests:
//! - A test configuration (cheap bcrypt, fixed secret)
//! - A `TestServer` over the full router on in-memory stores
//! - Helpers for signing users up and creating projects

#![allow(dead_code)]

pub mod auth_helpers;

pub use auth_helpers::*;

use axum_test::TestServer;
use piceditor::backend::routes::create_router;
use piceditor::backend::server::AppState;
use piceditor::shared::AppConfig;

/// Signing secret used by every test server
pub const TEST_SECRET: &str = "integration-test-secret-0123456789abcdef";

/// Configuration with the lowest bcrypt cost so tests stay fast
pub fn test_config() -> AppConfig {
    AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .expect("test config is valid")
}

/// Full router on in-memory stores, plus the state behind it
pub fn test_server_with_state() -> (TestServer, AppState) {
    let state = AppState::in_memory(test_config());
    let server = TestServer::new(create_router(state.clone())).expect("test server starts");
    (server, state)
}

/// Full router on in-memory stores
pub fn test_server() -> TestServer {
    test_server_with_state().0
}
