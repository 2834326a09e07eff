/**
 * Session Tokens
 *
 * This module issues and validates the signed, time-limited JWTs that carry
 * a user's identity between requests.
 *
 * # Token Lifecycle
 *
 * A token is valid from issuance until its `exp` claim, then expired. The
 * boundary itself counts as expired: a token checked at exactly `exp` is
 * rejected, so a token issued with a zero TTL is never valid. A token whose
 * signature does not match is invalid from the start.
 *
 * There is no revocation list. A leaked token stays usable until it expires.
 *
 * # Security
 *
 * - HS256 with a secret loaded from configuration
 * - Claims are signed, not encrypted; the username and expiry are readable
 *   by anyone holding the token
 */

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::auth::error::AuthError;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated user
    pub sub: String,
    /// Expiration time (Unix timestamp, seconds)
    pub exp: i64,
    /// Issued at time (Unix timestamp, seconds)
    pub iat: i64,
}

/// Why a presented token was not accepted
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TokenRejection {
    /// Signature and shape were fine but `exp` has been reached
    #[error("token expired")]
    Expired,
    /// Malformed, wrong algorithm, or signature mismatch
    #[error("token invalid")]
    Invalid,
}

impl From<TokenRejection> for AuthError {
    fn from(_: TokenRejection) -> Self {
        AuthError::InvalidToken
    }
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    /// Encoded JWT
    pub token: String,
    /// Claims embedded in the token
    pub claims: Claims,
}

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service signing with `secret`
    ///
    /// # Arguments
    /// * `secret` - HS256 key, loaded once at startup
    /// * `ttl` - Lifetime of tokens produced by [`TokenService::issue`]
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked in `verify_at` with an exclusive boundary.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Default lifetime of issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject` with the configured lifetime
    pub fn issue(&self, subject: &str) -> Result<IssuedToken, AuthError> {
        self.issue_with_ttl(subject, self.ttl)
    }

    /// Issue a token for `subject` that expires `ttl` from now
    pub fn issue_with_ttl(&self, subject: &str, ttl: Duration) -> Result<IssuedToken, AuthError> {
        self.issue_at(subject, ttl, Utc::now().timestamp())
    }

    /// Issue a token as if the current time were `now` (Unix seconds)
    pub fn issue_at(&self, subject: &str, ttl: Duration, now: i64) -> Result<IssuedToken, AuthError> {
        let claims = Claims {
            sub: subject.to_string(),
            exp: now.saturating_add(ttl.num_seconds()),
            iat: now,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;

        Ok(IssuedToken { token, claims })
    }

    /// Verify a token against the current time
    pub fn verify(&self, token: &str) -> Result<Claims, TokenRejection> {
        self.verify_at(token, Utc::now().timestamp())
    }

    /// Verify a token as if the current time were `now` (Unix seconds)
    ///
    /// # Returns
    /// The claims if the signature matches and `now < exp`.
    pub fn verify_at(&self, token: &str, now: i64) -> Result<Claims, TokenRejection> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::debug!("Token failed verification: {}", e);
            TokenRejection::Invalid
        })?;

        if data.claims.exp <= now {
            tracing::debug!("Token for {} expired at {}", data.claims.sub, data.claims.exp);
            return Err(TokenRejection::Expired);
        }

        Ok(data.claims)
    }
}
