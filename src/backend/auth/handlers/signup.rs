/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /api/auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate username, email and password shape
 * 2. Hash the password with bcrypt
 * 3. Insert the user (username and email must be unused)
 * 4. Return a fresh token and the new user
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest};
use crate::backend::auth::service::AuthService;
use crate::backend::auth::validation::validate_signup;
use crate::backend::error::{ApiJson, BackendError};

/// Signup handler
///
/// # Arguments
///
/// * `State(auth)` - Authentication service
/// * `ApiJson(request)` - Signup request containing username, email and password
///
/// # Returns
///
/// `201 Created` with the token and user info
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, invalid input, or username/email
///   already registered
/// * `500 Internal Server Error` - Store or hashing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "password": "Secret1!"
/// }
/// ```
pub async fn signup(
    State(auth): State<Arc<AuthService>>,
    ApiJson(request): ApiJson<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    validate_signup(&request.username, &request.email, &request.password).map_err(|err| {
        tracing::debug!("Signup rejected for {:?}: {}", request.username, err);
        err
    })?;

    tracing::info!("Signup request for: {}", request.username);

    let session = auth
        .signup(&request.username, &request.email, &request.password)
        .await?;

    Ok((StatusCode::CREATED, Json(session.into())))
}
