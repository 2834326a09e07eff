//! Signup input validation.

use crate::backend::auth::password::MAX_PASSWORD_BYTES;
use crate::shared::SharedError;

/// Shortest accepted password
pub const MIN_PASSWORD_BYTES: usize = 8;

/// Validate username format
///
/// Usernames must be:
/// - 3-30 characters long
/// - Contain only alphanumeric characters and underscores
/// - Start with a letter
pub fn is_valid_username(username: &str) -> bool {
    if username.len() < 3 || username.len() > 30 {
        return false;
    }

    let mut chars = username.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Basic email shape check: one `@`, non-empty local part, dotted domain
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Check username, email and password for a new account
pub fn validate_signup(username: &str, email: &str, password: &str) -> Result<(), SharedError> {
    if !is_valid_username(username) {
        return Err(SharedError::validation(
            "username",
            "Username must be 3-30 chars, start with a letter, and contain only letters, numbers, and underscores",
        ));
    }

    if !is_valid_email(email) {
        return Err(SharedError::validation("email", "Invalid email format"));
    }

    if password.len() < MIN_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            "Password must be at least 8 characters",
        ));
    }

    if password.len() > MAX_PASSWORD_BYTES {
        return Err(SharedError::validation(
            "password",
            "Password must be at most 72 bytes",
        ));
    }

    Ok(())
}
