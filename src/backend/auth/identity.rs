/**
 * Identity Resolution
 *
 * Maps the subject of a verified token to the stored user record.
 *
 * An account that disappeared (or was deactivated) after the token was issued
 * resolves to `AccountNotFound`. Callers treat that exactly like an invalid
 * token: the request is rejected as unauthenticated, never as a server error.
 */

use std::sync::Arc;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::users::{User, UserStore};

/// Looks up users by token subject
#[derive(Clone)]
pub struct IdentityResolver {
    users: Arc<dyn UserStore>,
}

impl IdentityResolver {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Resolve a verified subject (username) to an active user
    ///
    /// # Errors
    /// * `AccountNotFound` - no user with that username, or the account is inactive
    /// * `Store` - the user store failed
    pub async fn resolve(&self, subject: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .find_by_username(subject)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Token subject no longer exists: {}", subject);
                AuthError::AccountNotFound
            })?;

        if !user.is_active {
            tracing::warn!("Token subject is deactivated: {}", subject);
            return Err(AuthError::AccountNotFound);
        }

        Ok(user)
    }
}
