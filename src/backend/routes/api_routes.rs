/**
 * API Route Configuration
 *
 * This module defines the `/api` routes, split by whether they need a
 * signed-in user.
 *
 * # Routes
 *
 * ## Public
 * - `POST /api/auth/signup` - User registration
 * - `POST /api/auth/login` - User login
 * - `GET /api/templates` - Template catalog
 * - `GET /api/templates/categories` - Template categories
 * - `GET /api/health` - Health check
 *
 * ## Protected (bearer token)
 * - `GET /api/auth/me` - Current user
 * - `GET|POST /api/projects` - List / create projects
 * - `GET|PUT|DELETE /api/projects/{id}` - Read / update / delete a project
 * - `POST /api/projects/{id}/export` - Export stub
 * - `POST /api/upload` - Image upload
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_me, login, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::projects::{
    create_project, delete_project, export_project, get_project, list_projects, update_project,
};
use crate::backend::routes::health::health_check;
use crate::backend::server::state::AppState;
use crate::backend::templates::{list_categories, list_templates};
use crate::backend::uploads::upload_image;

/// Routes that anyone may call
pub fn configure_public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/templates", get(list_templates))
        .route("/api/templates/categories", get(list_categories))
        .route("/api/health", get(health_check))
}

/// Routes that require `Authorization: Bearer <token>`
///
/// The auth middleware is attached with `route_layer`, so unknown paths still
/// fall through to the 404 fallback instead of answering 401.
///
/// # Arguments
///
/// * `state` - Application state; supplies the auth service and upload limit
pub fn configure_protected_routes(state: &AppState) -> Router<AppState> {
    let uploads = Router::new()
        .route("/api/upload", post(upload_image))
        .layer(DefaultBodyLimit::max(state.config.max_upload_bytes));

    Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/projects", get(list_projects).post(create_project))
        .route(
            "/api/projects/{id}",
            get(get_project).put(update_project).delete(delete_project),
        )
        .route("/api/projects/{id}/export", post(export_project))
        .merge(uploads)
        .route_layer(middleware::from_fn_with_state(
            state.auth.clone(),
            auth_middleware,
        ))
}
