//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Ids are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tuiter_core::{ReactionKind, ReactionState};

// ============================================================================
// Tuit Responses
// ============================================================================

/// Reaction counters of a tuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TuitStatsResponse {
    pub likes: i64,
    pub dislikes: i64,
}

/// Tuit response
#[derive(Debug, Clone, Serialize)]
pub struct TuitResponse {
    pub id: String,
    pub tuit: String,
    pub posted_by: String,
    pub posted_on: DateTime<Utc>,
    pub stats: TuitStatsResponse,
}

// ============================================================================
// Reaction Responses
// ============================================================================

/// A single like or dislike record
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub kind: ReactionKind,
    pub tuit_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a toggle
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ToggleResponse {
    pub state: ReactionState,
    pub stats: TuitStatsResponse,
}

/// A user's state towards one tuit
#[derive(Debug, Clone, Serialize)]
pub struct ReactionStateResponse {
    pub user_id: String,
    pub tuit_id: String,
    pub state: ReactionState,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Status of each backing store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub store: String,
}

impl ReadinessResponse {
    pub fn ready(store_healthy: bool) -> Self {
        Self {
            status: if store_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                store: if store_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
