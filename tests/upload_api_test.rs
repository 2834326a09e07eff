//! Upload API tests

mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use base64::{prelude::BASE64_STANDARD, Engine};
use pretty_assertions::assert_eq;
use serde_json::Value;

use common::*;
use piceditor::backend::routes::create_router;
use piceditor::backend::server::AppState;
use piceditor::shared::AppConfig;

/// 1x1 transparent PNG
const PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNkYPhfDwAChAI9jU77mgAAAABJRU5ErkJggg==";

fn png_form() -> MultipartForm {
    let png = BASE64_STANDARD.decode(PNG_BASE64).unwrap();
    MultipartForm::new().add_part(
        "file",
        Part::bytes(png).file_name("test.png").mime_type("image/png"),
    )
}

#[tokio::test]
async fn test_upload_returns_data_url() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;

    let response = server
        .post("/api/upload")
        .authorization_bearer(&alice.token)
        .multipart(png_form())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["filename"], "test.png");
    assert_eq!(body["content_type"], "image/png");
    assert_eq!(body["data"], format!("data:image/png;base64,{PNG_BASE64}"));
    assert_eq!(body["size"], BASE64_STANDARD.decode(PNG_BASE64).unwrap().len());
}

#[tokio::test]
async fn test_upload_requires_authentication() {
    let server = test_server();

    let response = server.post("/api/upload").multipart(png_form()).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_upload_rejects_other_types() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(b"<svg/>".to_vec()).file_name("x.svg").mime_type("image/svg+xml"),
    );
    let response = server
        .post("/api/upload")
        .authorization_bearer(&alice.token)
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_error(&response.json(), StatusCode::BAD_REQUEST, "Invalid file type");
}

#[tokio::test]
async fn test_upload_without_file_field() {
    let server = test_server();
    let alice = signup_user(&server, "alice").await;

    let form = MultipartForm::new().add_text("caption", "no image here");
    let response = server
        .post("/api/upload")
        .authorization_bearer(&alice.token)
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_over_limit() {
    let config = AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .max_upload_bytes(64)
        .build()
        .unwrap();
    let server = TestServer::new(create_router(AppState::in_memory(config))).unwrap();
    let alice = signup_user(&server, "alice").await;

    let form = MultipartForm::new().add_part(
        "file",
        Part::bytes(vec![0u8; 4096]).file_name("big.png").mime_type("image/png"),
    );
    let response = server
        .post("/api/upload")
        .authorization_bearer(&alice.token)
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
}
