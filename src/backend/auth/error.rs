/**
 * Authentication Errors
 *
 * The five terminal outcomes of the authentication and authorization layer,
 * plus the infrastructure failures that can occur while producing them.
 *
 * None of the terminal variants are retried or recovered silently; the HTTP
 * layer maps each of them to a client-visible failure. `InvalidToken` and
 * `AccountNotFound` produce the same response, and so do `AccessDenied` and
 * a missing project.
 */

use thiserror::Error;

use crate::backend::error::StoreError;

/// Authentication and authorization failures
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown username or wrong password at login
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Signup with a username or email that is already registered
    #[error("username or email already registered")]
    DuplicateIdentity,

    /// Missing, malformed, expired or tampered token
    #[error("invalid token")]
    InvalidToken,

    /// Token was valid but the account no longer resolves
    #[error("account not found")]
    AccountNotFound,

    /// Authenticated, but the resource is not owned by the caller
    #[error("access denied")]
    AccessDenied,

    /// Store failure while checking identity or ownership
    #[error(transparent)]
    Store(#[from] StoreError),

    /// bcrypt failed to produce a digest
    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// The token could not be signed
    #[error("token signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

impl AuthError {
    /// True for the client-caused outcomes; false for infrastructure failures
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::InvalidCredentials
                | Self::DuplicateIdentity
                | Self::InvalidToken
                | Self::AccountNotFound
                | Self::AccessDenied
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_variants() {
        assert!(AuthError::InvalidCredentials.is_terminal());
        assert!(AuthError::DuplicateIdentity.is_terminal());
        assert!(AuthError::InvalidToken.is_terminal());
        assert!(AuthError::AccountNotFound.is_terminal());
        assert!(AuthError::AccessDenied.is_terminal());
    }

    #[test]
    fn test_store_failure_is_not_terminal() {
        let err = AuthError::from(StoreError::Database(sqlx::Error::PoolTimedOut));
        assert!(!err.is_terminal());
    }
}
