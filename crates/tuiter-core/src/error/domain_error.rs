//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::ReactionKind;
use crate::value_objects::Id;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Tuit not found: {0}")]
    TuitNotFound(Id),

    #[error("No {kind} found for this user and tuit")]
    ReactionNotFound { kind: ReactionKind },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("User already has a {kind} on this tuit")]
    DuplicateReaction { kind: ReactionKind },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::TuitNotFound(_) => "UNKNOWN_TUIT",
            Self::ReactionNotFound { .. } => "UNKNOWN_REACTION",
            Self::DuplicateReaction { .. } => "DUPLICATE_REACTION",
            Self::StoreUnavailable(_) => "STORE_UNAVAILABLE",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TuitNotFound(_) | Self::ReactionNotFound { .. })
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateReaction { .. })
    }
}
