/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Request problems detected directly in a handler, carrying their own
 * status code (e.g. an upload with a disallowed content type).
 *
 * ## Auth Errors
 *
 * Authentication and authorization failures from `backend::auth`. The
 * mapping deliberately collapses several variants into one response:
 * an expired token and a deleted account both read "Invalid token", and a
 * project owned by someone else reads exactly like a missing one.
 *
 * ## Store Errors
 *
 * Database failures. These are logged and answered with a bare 500.
 */

use thiserror::Error;
use axum::http::StatusCode;

use crate::backend::auth::AuthError;
use crate::backend::error::store::StoreError;
use crate::shared::SharedError;

/// Message for invalid, expired or unresolvable tokens
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid token";
/// Message for a failed login
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Incorrect username or password";
/// Message for signup conflicts
pub const DUPLICATE_IDENTITY_MESSAGE: &str = "Username or email already registered";
/// Message for missing or foreign projects
pub const PROJECT_NOT_FOUND_MESSAGE: &str = "Project not found";
/// Message for any infrastructure failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use piceditor::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid file type");
/// assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., bad upload, malformed body)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Authentication or authorization failure
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Store failure outside the auth layer
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Request payload failed validation
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidCredentials`, `InvalidToken`, `AccountNotFound` - 401
    /// - `DuplicateIdentity` - 400
    /// - `AccessDenied` - 404
    /// - `SharedError` - 400
    /// - store, hashing and signing failures - 500
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials
                | AuthError::InvalidToken
                | AuthError::AccountNotFound => StatusCode::UNAUTHORIZED,
                AuthError::DuplicateIdentity => StatusCode::BAD_REQUEST,
                AuthError::AccessDenied => StatusCode::NOT_FOUND,
                AuthError::Store(_) | AuthError::Hashing(_) | AuthError::Signing(_) => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the client-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => INVALID_CREDENTIALS_MESSAGE.to_string(),
                AuthError::InvalidToken | AuthError::AccountNotFound => {
                    INVALID_TOKEN_MESSAGE.to_string()
                }
                AuthError::DuplicateIdentity => DUPLICATE_IDENTITY_MESSAGE.to_string(),
                AuthError::AccessDenied => PROJECT_NOT_FOUND_MESSAGE.to_string(),
                AuthError::Store(_) | AuthError::Hashing(_) | AuthError::Signing(_) => {
                    INTERNAL_ERROR_MESSAGE.to_string()
                }
            },
            Self::Store(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            Self::SharedError(err) => err.client_message(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid file type");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid file type");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_token_failures_are_indistinguishable() {
        let invalid = BackendError::from(AuthError::InvalidToken);
        let missing = BackendError::from(AuthError::AccountNotFound);
        assert_eq!(invalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(invalid.status_code(), missing.status_code());
        assert_eq!(invalid.message(), missing.message());
    }

    #[test]
    fn test_access_denied_reads_as_not_found() {
        let denied = BackendError::from(AuthError::AccessDenied);
        assert_eq!(denied.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(denied.message(), PROJECT_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_status_code_mapping() {
        let credentials = BackendError::from(AuthError::InvalidCredentials);
        assert_eq!(credentials.status_code(), StatusCode::UNAUTHORIZED);

        let duplicate = BackendError::from(AuthError::DuplicateIdentity);
        assert_eq!(duplicate.status_code(), StatusCode::BAD_REQUEST);

        let validation = BackendError::from(SharedError::validation("title", "empty"));
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.message(), "empty");
    }

    #[test]
    fn test_store_error_hides_details() {
        let error = BackendError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.message(), INTERNAL_ERROR_MESSAGE);
    }
}
