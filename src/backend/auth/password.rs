/**
 * Password Hashing
 *
 * One-way password digests using bcrypt. Each digest carries its own random
 * salt and cost, so `verify` needs nothing but the password and the stored
 * string.
 *
 * # Security
 *
 * - `verify` fails closed: a malformed or truncated digest returns `false`
 * - bcrypt ignores input past 72 bytes; signup validation rejects longer
 *   passwords so distinct accepted passwords never collide
 * - Passwords are never logged
 */

use crate::backend::auth::error::AuthError;

/// Longest password bcrypt reads in full
pub const MAX_PASSWORD_BYTES: usize = 72;

/// bcrypt password hasher with a fixed work factor
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost (4..=31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// The configured work factor
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh salt
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Hashing` if bcrypt rejects the cost or fails to
    /// gather randomness.
    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(bcrypt::hash(password, self.cost)?)
    }

    /// Check a password against a stored digest
    ///
    /// Any error from bcrypt (bad prefix, wrong length, invalid cost) is
    /// treated as a mismatch.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        match bcrypt::verify(password, digest) {
            Ok(valid) => valid,
            Err(e) => {
                tracing::warn!("Rejecting malformed password digest: {}", e);
                false
            }
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_COST: u32 = 4;

    #[test]
    fn test_hash_then_verify() {
        let hasher = PasswordHasher::new(TEST_COST);
        let digest = hasher.hash("Secret1!").unwrap();
        assert!(hasher.verify("Secret1!", &digest));
    }

    #[test]
    fn test_wrong_password() {
        let hasher = PasswordHasher::new(TEST_COST);
        let digest = hasher.hash("Secret1!").unwrap();
        assert!(!hasher.verify("Secret2!", &digest));
    }

    #[test]
    fn test_digests_are_salted() {
        let hasher = PasswordHasher::new(TEST_COST);
        let first = hasher.hash("Secret1!").unwrap();
        let second = hasher.hash("Secret1!").unwrap();
        assert_ne!(first, second);
        assert!(!first.contains("Secret1!"));
    }

    #[test]
    fn test_malformed_digest_fails_closed() {
        let hasher = PasswordHasher::new(TEST_COST);
        assert!(!hasher.verify("Secret1!", ""));
        assert!(!hasher.verify("Secret1!", "not-a-bcrypt-digest"));
        assert!(!hasher.verify("Secret1!", "$2b$04$tooshort"));
    }

    #[test]
    fn test_invalid_cost_is_an_error() {
        let hasher = PasswordHasher::new(2);
        assert!(matches!(hasher.hash("Secret1!"), Err(AuthError::Hashing(_))));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        #[test]
        fn prop_verify_accepts_only_the_hashed_password(
            p1 in "[ -~]{8,72}",
            p2 in "[ -~]{8,72}",
        ) {
            let hasher = PasswordHasher::new(TEST_COST);
            let digest = hasher.hash(&p1).unwrap();
            prop_assert!(hasher.verify(&p1, &digest));
            if p1 != p2 {
                prop_assert!(!hasher.verify(&p2, &digest));
            }
        }
    }
}
