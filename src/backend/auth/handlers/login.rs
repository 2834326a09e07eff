/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown user, wrong password and disabled account all return the same
 *   401 response (no information leakage)
 * - User passwords are never returned in responses
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::error::{ApiJson, BackendError};

/// Login handler
///
/// # Arguments
///
/// * `State(auth)` - Authentication service
/// * `ApiJson(request)` - Login request containing username and password
///
/// # Returns
///
/// JSON response with the token and user info
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body
/// * `401 Unauthorized` - "Incorrect username or password"
/// * `500 Internal Server Error` - Store or signing failure
pub async fn login(
    State(auth): State<Arc<AuthService>>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Login request for: {:?}", request.username);

    let session = auth.login(&request.username, &request.password).await?;

    Ok(Json(session.into()))
}
