/**
 * Authentication Service
 *
 * Ties the password hasher, token service and identity resolver together
 * into the three operations the HTTP layer needs:
 *
 * 1. **Signup**: hash password → insert user → issue token
 * 2. **Login**: look up user → verify password → issue token
 * 3. **Authenticate**: verify token → resolve subject to a user
 *
 * Tokens carry the username as their subject. A login for an unknown
 * username still runs one bcrypt verification against a decoy digest, so
 * response time does not reveal which usernames exist.
 */

use std::sync::Arc;

use crate::backend::auth::error::AuthError;
use crate::backend::auth::identity::IdentityResolver;
use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{User, UserStore};
use crate::backend::error::StoreError;
use crate::shared::AppConfig;

/// Plaintext of the decoy digest checked when a login names no account
const DECOY_PASSWORD: &str = "piceditor-decoy-password";

/// A signed-in user and their token
#[derive(Debug, Clone)]
pub struct Session {
    /// Encoded bearer token
    pub token: String,
    /// Token expiry (Unix seconds)
    pub expires_at: i64,
    /// The authenticated account
    pub user: User,
}

/// Signup, login and token authentication
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenService,
    identity: IdentityResolver,
    decoy_digest: Option<Arc<str>>,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenService) -> Self {
        let identity = IdentityResolver::new(users.clone());
        let decoy_digest = match hasher.hash(DECOY_PASSWORD) {
            Ok(digest) => Some(Arc::from(digest)),
            Err(e) => {
                tracing::error!("Failed to prepare decoy password digest: {}", e);
                None
            }
        };
        Self {
            users,
            hasher,
            tokens,
            identity,
            decoy_digest,
        }
    }

    /// Build the service from startup configuration
    pub fn from_config(users: Arc<dyn UserStore>, config: &AppConfig) -> Self {
        Self::new(
            users,
            PasswordHasher::new(config.bcrypt_cost),
            TokenService::new(config.jwt_secret(), config.token_ttl),
        )
    }

    /// The token service used for issuing and verifying
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Create an account and sign it in
    ///
    /// Input must already be validated (`validation::validate_signup`).
    ///
    /// # Errors
    /// * `DuplicateIdentity` - username or email already registered; the
    ///   existing account is not modified
    pub async fn signup(&self, username: &str, email: &str, password: &str) -> Result<Session, AuthError> {
        if self.users.find_by_username(username).await?.is_some() {
            tracing::warn!("Username already exists: {}", username);
            return Err(AuthError::DuplicateIdentity);
        }

        let password_hash = self.hasher.hash(password)?;
        let user = User::new(username.to_string(), email.to_string(), password_hash);

        // The store's unique constraints settle races between concurrent signups.
        let user = self.users.insert(user).await.map_err(|e| match e {
            StoreError::Conflict(key) => {
                tracing::warn!("Signup conflict on {} for {}", key, username);
                AuthError::DuplicateIdentity
            }
            other => AuthError::Store(other),
        })?;

        tracing::info!("User created successfully: {} ({})", user.username, user.email);

        self.open_session(user)
    }

    /// Sign in with username and password
    ///
    /// # Errors
    /// * `InvalidCredentials` - unknown user, wrong password or inactive
    ///   account; the cases are not distinguished
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let Some(user) = self.users.find_by_username(username).await? else {
            tracing::warn!("User not found: {:?}", username);
            if let Some(decoy) = &self.decoy_digest {
                self.hasher.verify(password, decoy);
            }
            return Err(AuthError::InvalidCredentials);
        };

        if !self.hasher.verify(password, &user.password_hash) {
            tracing::warn!("Invalid password for user: {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        if !user.is_active {
            tracing::warn!("Login attempt for inactive user: {}", username);
            return Err(AuthError::InvalidCredentials);
        }

        tracing::info!("User logged in successfully: {}", user.username);

        self.open_session(user)
    }

    /// Resolve a raw bearer token to its user
    ///
    /// # Errors
    /// * `InvalidToken` - malformed, tampered or expired
    /// * `AccountNotFound` - token valid but the account no longer resolves
    pub async fn authenticate(&self, raw_token: &str) -> Result<User, AuthError> {
        let claims = self.tokens.verify(raw_token)?;
        self.identity.resolve(&claims.sub).await
    }

    fn open_session(&self, user: User) -> Result<Session, AuthError> {
        let issued = self.tokens.issue(&user.username)?;
        Ok(Session {
            token: issued.token,
            expires_at: issued.claims.exp,
            user,
        })
    }
}
