/**
 * Project Handlers
 *
 * CRUD over the caller's own projects plus the export stub. All routes sit
 * behind the auth middleware; every operation on a single project goes
 * through [`ProjectGuard`] first, so someone else's project and a missing one
 * both answer 404 "Project not found".
 */

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{FromRequest, Path, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::Json,
    Form,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::AuthError;
use crate::backend::error::{ApiJson, BackendError};
use crate::backend::middleware::AuthUser;
use crate::backend::projects::guard::ProjectGuard;
use crate::backend::projects::store::ProjectStore;
use crate::shared::{Project, ProjectCreate, ProjectUpdate, SharedError};

/// Body of `DELETE /api/projects/{id}`
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Optional body of `POST /api/projects/{id}/export`, JSON or form-encoded
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExportRequest {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_quality")]
    pub quality: u8,
}

impl Default for ExportRequest {
    fn default() -> Self {
        Self {
            format: default_format(),
            quality: default_quality(),
        }
    }
}

fn default_format() -> String {
    "png".to_string()
}

fn default_quality() -> u8 {
    90
}

/// Response of the export stub
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportResponse {
    pub message: String,
    pub project_id: Uuid,
    pub format: String,
    pub quality: u8,
}

/// Create a project owned by the caller
pub async fn create_project(
    AuthUser(user): AuthUser,
    State(projects): State<Arc<dyn ProjectStore>>,
    ApiJson(request): ApiJson<ProjectCreate>,
) -> Result<(StatusCode, Json<Project>), BackendError> {
    request.validate()?;

    let project = projects.insert(Project::new(user.id, request)).await?;
    tracing::info!("Project {} created by {}", project.id, user.username);

    Ok((StatusCode::CREATED, Json(project)))
}

/// List the caller's projects, most recently updated first
pub async fn list_projects(
    AuthUser(user): AuthUser,
    State(projects): State<Arc<dyn ProjectStore>>,
) -> Result<Json<Vec<Project>>, BackendError> {
    let owned = projects.list_for_owner(user.id).await?;
    Ok(Json(owned))
}

/// Fetch one project
///
/// # Errors
///
/// * `404 Not Found` - Unknown ID, malformed ID, or owned by another user
pub async fn get_project(
    AuthUser(user): AuthUser,
    State(guard): State<ProjectGuard>,
    Path(project_id): Path<String>,
) -> Result<Json<Project>, BackendError> {
    let project = guard.authorize_raw(&user, &project_id).await?;
    Ok(Json(project))
}

/// Apply a partial update and bump `updated_at`
pub async fn update_project(
    AuthUser(user): AuthUser,
    State(guard): State<ProjectGuard>,
    State(projects): State<Arc<dyn ProjectStore>>,
    Path(project_id): Path<String>,
    ApiJson(update): ApiJson<ProjectUpdate>,
) -> Result<Json<Project>, BackendError> {
    let project = guard.authorize_raw(&user, &project_id).await?;
    update.validate()?;

    let updated = projects
        .update_owned(project.id, user.id, &update, Utc::now())
        .await?
        .ok_or(AuthError::AccessDenied)?;

    tracing::info!("Project {} updated by {}", updated.id, user.username);
    Ok(Json(updated))
}

/// Delete a project
pub async fn delete_project(
    AuthUser(user): AuthUser,
    State(guard): State<ProjectGuard>,
    State(projects): State<Arc<dyn ProjectStore>>,
    Path(project_id): Path<String>,
) -> Result<Json<MessageResponse>, BackendError> {
    let project = guard.authorize_raw(&user, &project_id).await?;

    if !projects.delete_owned(project.id, user.id).await? {
        return Err(AuthError::AccessDenied.into());
    }

    tracing::info!("Project {} deleted by {}", project.id, user.username);
    Ok(Json(MessageResponse {
        message: "Project deleted successfully".to_string(),
    }))
}

/// Export stub
///
/// Accepts an empty body, `format`/`quality` form fields, or
/// `{"format": .., "quality": ..}`. Rendering happens client-side; this only
/// confirms the request against an owned project.
pub async fn export_project(
    AuthUser(user): AuthUser,
    State(guard): State<ProjectGuard>,
    Path(project_id): Path<String>,
    body: Request,
) -> Result<Json<ExportResponse>, BackendError> {
    let project = guard.authorize_raw(&user, &project_id).await?;
    let request = parse_export_request(body).await?;

    tracing::info!(
        "Export of project {} as {} requested by {}",
        project.id,
        request.format,
        user.username
    );

    Ok(Json(ExportResponse {
        message: "Export functionality will be implemented".to_string(),
        project_id: project.id,
        format: request.format,
        quality: request.quality,
    }))
}

async fn parse_export_request(request: Request) -> Result<ExportRequest, BackendError> {
    let is_form = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

    if is_form {
        let Form(export) = Form::<ExportRequest>::from_request(request, &())
            .await
            .map_err(|rejection| {
                SharedError::serialization(format!("Invalid form data: {}", rejection.body_text()))
            })?;
        return Ok(export);
    }

    let body = Bytes::from_request(request, &())
        .await
        .map_err(|rejection| BackendError::handler(rejection.status(), rejection.body_text()))?;
    Ok(parse_export_json(&body)?)
}

fn parse_export_json(body: &[u8]) -> Result<ExportRequest, SharedError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ExportRequest::default());
    }
    Ok(serde_json::from_slice(body)?)
}
