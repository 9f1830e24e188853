//! Entity to DTO mappers

use tuiter_core::{Reaction, Tuit, TuitStats};

use super::responses::{ReactionResponse, ToggleResponse, TuitResponse, TuitStatsResponse};
use crate::services::ToggleOutcome;

impl From<TuitStats> for TuitStatsResponse {
    fn from(stats: TuitStats) -> Self {
        Self {
            likes: stats.likes,
            dislikes: stats.dislikes,
        }
    }
}

impl From<&Tuit> for TuitResponse {
    fn from(tuit: &Tuit) -> Self {
        Self {
            id: tuit.id.to_string(),
            tuit: tuit.tuit.clone(),
            posted_by: tuit.posted_by.to_string(),
            posted_on: tuit.posted_on,
            stats: tuit.stats.into(),
        }
    }
}

impl From<Tuit> for TuitResponse {
    fn from(tuit: Tuit) -> Self {
        Self::from(&tuit)
    }
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self {
            kind: reaction.kind,
            tuit_id: reaction.tuit_id.to_string(),
            user_id: reaction.user_id.to_string(),
            created_at: reaction.created_at,
        }
    }
}

impl From<ToggleOutcome> for ToggleResponse {
    fn from(outcome: ToggleOutcome) -> Self {
        Self {
            state: outcome.state,
            stats: outcome.stats.into(),
        }
    }
}
