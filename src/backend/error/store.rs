/**
 * Store Errors
 *
 * Errors returned by the user, project and template stores. Both the
 * PostgreSQL and the in-memory implementations report uniqueness violations
 * as `Conflict` so callers never have to inspect driver error codes.
 */

use thiserror::Error;

/// Errors returned by store implementations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique key (username, email, id) is already taken
    #[error("conflict on {0}")]
    Conflict(String),

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_unique_violation() {
                let constraint = db_err.constraint().unwrap_or("unique key").to_string();
                return Self::Conflict(constraint);
            }
        }
        Self::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_database_error() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn test_conflict_display() {
        let err = StoreError::Conflict("users_username_key".to_string());
        assert_eq!(err.to_string(), "conflict on users_username_key");
    }
}
