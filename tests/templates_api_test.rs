//! Template catalog and health tests

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::*;
use piceditor::backend::auth::MemoryUserStore;
use piceditor::backend::projects::MemoryProjectStore;
use piceditor::backend::routes::create_router;
use piceditor::backend::server::{AppState, Stores};
use piceditor::backend::templates::MemoryTemplateStore;
use piceditor::shared::Template;

fn template(title: &str, category: &str) -> Template {
    Template {
        id: Uuid::new_v4(),
        title: title.to_string(),
        category: category.to_string(),
        canvas_data: json!({}),
        thumbnail: String::new(),
        width: 1080,
        height: 1080,
        is_premium: false,
        created_at: Utc::now(),
    }
}

fn server_with_templates(templates: Vec<Template>) -> TestServer {
    let stores = Stores {
        users: Arc::new(MemoryUserStore::new()),
        projects: Arc::new(MemoryProjectStore::new()),
        templates: Arc::new(MemoryTemplateStore::with_templates(templates)),
    };
    TestServer::new(create_router(AppState::new(test_config(), stores, None))).unwrap()
}

#[tokio::test]
async fn test_templates_are_public() {
    let server = server_with_templates(vec![
        template("Sale", "social"),
        template("Launch", "social"),
        template("Header", "web"),
    ]);

    let response = server.get("/api/templates").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let templates: Vec<Value> = response.json();
    assert_eq!(templates.len(), 3);

    let categories: Value = server.get("/api/templates/categories").await.json();
    assert_eq!(categories, json!({ "categories": ["social", "web"] }));
}

#[tokio::test]
async fn test_empty_catalog() {
    let server = test_server();

    let templates: Vec<Value> = server.get("/api/templates").await.json();
    assert!(templates.is_empty());

    let categories: Value = server.get("/api/templates/categories").await.json();
    assert_eq!(categories, json!({ "categories": [] }));
}

#[tokio::test]
async fn test_health() {
    let server = test_server();

    let response = server.get("/api/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route() {
    let server = test_server();

    let response = server.get("/api/nothing-here").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
