//! Error handling utilities for repositories

use sqlx::Error as SqlxError;
use tuiter_core::{DomainError, Id, ReactionKind};

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StoreUnavailable(e.to_string())
}

/// Map an insert failure on a reaction table.
///
/// A unique violation means the pair already has a record; a foreign key
/// violation means the tuit does not exist.
pub fn map_insert_error(e: SqlxError, kind: ReactionKind, tuit_id: Id) -> DomainError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return DomainError::DuplicateReaction { kind };
        }
        if db_err.is_foreign_key_violation() {
            return tuit_not_found(tuit_id);
        }
    }
    map_db_error(e)
}

/// Create a "tuit not found" error
pub fn tuit_not_found(id: Id) -> DomainError {
    DomainError::TuitNotFound(id)
}
