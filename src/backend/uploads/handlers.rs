/**
 * Upload Handler
 *
 * `POST /api/upload` accepts a multipart form with a single `file` field and
 * hands the image back as a base64 data URL the editor can drop straight
 * onto the canvas. Nothing is persisted.
 *
 * Only JPEG, PNG, WebP and GIF are accepted, judged by the part's declared
 * content type. The request body size is capped by the route's body limit.
 */

use axum::{
    extract::multipart::{Multipart, MultipartError},
    http::StatusCode,
    response::Json,
};
use base64::{prelude::BASE64_STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;

/// Multipart field carrying the image
pub const FILE_FIELD: &str = "file";

/// Content types the editor can place on a canvas
pub const ALLOWED_CONTENT_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/webp", "image/gif"];

/// Uploaded image echoed back as a data URL
#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    pub content_type: String,
    pub data: String,
    pub size: usize,
}

/// True for the four image types listed in [`ALLOWED_CONTENT_TYPES`]
pub fn is_allowed_content_type(content_type: &str) -> bool {
    ALLOWED_CONTENT_TYPES.contains(&content_type)
}

/// Encode bytes as a `data:` URL
pub fn to_data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, BASE64_STANDARD.encode(bytes))
}

/// Upload handler
///
/// # Errors
///
/// * `400 Bad Request` - No `file` field, or not an allowed image type
/// * `413 Payload Too Large` - Body exceeds the configured upload limit
pub async fn upload_image(
    AuthUser(user): AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, BackendError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !is_allowed_content_type(&content_type) {
            tracing::warn!("Rejected upload of type {:?} from {}", content_type, user.username);
            return Err(BackendError::handler(StatusCode::BAD_REQUEST, "Invalid file type"));
        }

        let filename = field.file_name().unwrap_or(FILE_FIELD).to_string();
        let bytes = field.bytes().await.map_err(multipart_error)?;

        tracing::info!("Upload of {} ({} bytes) by {}", filename, bytes.len(), user.username);

        return Ok(Json(UploadResponse {
            data: to_data_url(&content_type, &bytes),
            size: bytes.len(),
            filename,
            content_type,
        }));
    }

    Err(BackendError::handler(StatusCode::BAD_REQUEST, "No file provided"))
}

fn multipart_error(err: MultipartError) -> BackendError {
    tracing::warn!("Malformed multipart upload: {}", err);
    BackendError::handler(err.status(), err.body_text())
}
