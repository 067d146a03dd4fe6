//! Shared error mapping for the SQLite persistence layer

use application::ApplicationError;
use rusqlite::ffi;

/// Map any storage failure to an internal application error
pub fn internal(e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Internal(format!("Database error: {e}"))
}

/// Check whether a SQLite error is a `UNIQUE` constraint violation
pub fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Translate a write failure, reporting a taken name as `PackingListAlreadyExists`
pub fn map_write_error(e: rusqlite::Error, name: &str) -> ApplicationError {
    if is_unique_violation(&e) {
        ApplicationError::PackingListAlreadyExists {
            name: name.to_string(),
        }
    } else {
        internal(e)
    }
}
