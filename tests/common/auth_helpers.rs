//! Authentication test helpers
//!
//! Sign users up through the API and build request bodies.

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};

/// Test user credentials
pub struct TestUser {
    pub id: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Password every helper-created user gets
pub const TEST_PASSWORD: &str = "Secret1!";

/// Sign up `username` through the API
pub async fn signup_user(server: &TestServer, username: &str) -> TestUser {
    let email = format!("{username}@example.com");
    let response = server
        .post("/api/auth/signup")
        .json(&json!({
            "username": username,
            "email": email,
            "password": TEST_PASSWORD,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED, "signup of {username} failed");

    let body: Value = response.json();
    TestUser {
        id: body["user"]["id"].as_str().expect("user id").to_string(),
        username: username.to_string(),
        email,
        password: TEST_PASSWORD.to_string(),
        token: body["access_token"].as_str().expect("access token").to_string(),
    }
}

/// Create a project for `user` and return its JSON
pub async fn create_project(server: &TestServer, user: &TestUser, title: &str) -> Value {
    let response = server
        .post("/api/projects")
        .authorization_bearer(&user.token)
        .json(&json!({ "title": title }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

/// Assert the standard error body
pub fn assert_error(body: &Value, status: StatusCode, message: &str) {
    assert_eq!(body["error"], message);
    assert_eq!(body["status"], status.as_u16());
}
